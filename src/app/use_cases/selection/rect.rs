//! Use-Case: Rechteck-Selektion von Objekten.

use crate::app::AppState;

/// Selektiert alle Objekte innerhalb des Rechtecks (Bodenebene).
/// Additiv erweitert die bestehende Selektion, sonst wird sie ersetzt.
pub fn select_in_rect(state: &mut AppState, min: glam::Vec2, max: glam::Vec2, additive: bool) {
    let ids = state.scene.objects_in_rect(min, max);

    if !additive {
        state.selection.clear();
    }

    state.selection.selected_object_ids.extend(ids.iter().copied());
    if state.selection.anchor_object_id.is_none() {
        state.selection.anchor_object_id = ids.first().copied();
    }

    log::debug!("Rechteck-Selektion: {} Objekt(e)", ids.len());
}

/// Selektiert alle Objekte der Szene.
pub fn select_all(state: &mut AppState) {
    state.selection.selected_object_ids = state.scene.objects.keys().copied().collect();
    state.selection.selected_assembly_ids.clear();
}

/// Hebt die komplette Selektion auf.
pub fn clear(state: &mut AppState) {
    state.selection.clear();
}
