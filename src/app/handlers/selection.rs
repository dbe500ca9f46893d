//! Handler für Selektion und Verschieben.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert das nächste Objekt/Kabel zur Weltposition.
pub fn select_nearest(state: &mut AppState, world_pos: glam::Vec2, max_distance: f32, additive: bool) {
    use_cases::selection::select_nearest(state, world_pos, max_distance, additive);
}

/// Selektiert Objekte innerhalb eines Rechtecks.
pub fn select_in_rect(state: &mut AppState, min: glam::Vec2, max: glam::Vec2, additive: bool) {
    use_cases::selection::select_in_rect(state, min, max, additive);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear(state);
}

/// Selektiert alle Objekte.
pub fn select_all(state: &mut AppState) {
    use_cases::selection::select_all(state);
}

/// Beginnt den Move-Lifecycle (Undo-Snapshot).
pub fn begin_move(state: &mut AppState) {
    use_cases::selection::begin_move(state);
}

/// Verschiebt die selektierten Objekte um ein Delta.
pub fn move_selected(state: &mut AppState, delta_world: glam::Vec2) {
    use_cases::selection::move_selected(state, delta_world);
}
