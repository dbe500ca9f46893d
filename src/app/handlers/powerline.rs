//! Handler für Powerline-Einstellungen und -Generierung.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Segmentanzahl (mindestens 1).
pub fn set_segment_count(state: &mut AppState, count: u32) {
    state.editor.powerline.segment_count = count.max(1);
}

/// Setzt den Durchhang (mindestens 0).
pub fn set_sag_amount(state: &mut AppState, sag: f32) {
    state.editor.powerline.sag = sag.max(0.0);
}

/// Schaltet den Socket-Modus um.
pub fn set_attach_to_sockets(state: &mut AppState, enabled: bool) {
    state.editor.powerline.attach_to_sockets = enabled;
    log::info!("Socket-Modus: {}", enabled);
}

/// Setzt das Kabel-Mesh für neue Segmente.
pub fn set_cable_mesh(state: &mut AppState, mesh_id: String) {
    state.editor.powerline.cable_mesh_id = mesh_id;
}

/// Setzt das Mesh für neu platzierte Masten.
pub fn set_placement_mesh(state: &mut AppState, mesh_id: String) {
    state.editor.placement_mesh_id = mesh_id;
}

/// Generiert eine Powerline zwischen den zwei selektierten Objekten.
pub fn generate(state: &mut AppState) {
    use_cases::powerline::generate_for_selection(state);
}

/// Regeneriert die selektierten Baugruppen.
pub fn regenerate_selected(state: &mut AppState) {
    use_cases::powerline::regenerate_selected(state);
}
