//! Handler für Werkzeugwahl, Platzieren und Löschen.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktiviert ein Editor-Werkzeug.
pub fn set_editor_tool(state: &mut AppState, tool: crate::app::state::EditorTool) {
    state.editor.active_tool = tool;
    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Platziert ein neues Objekt an der übergebenen Weltposition.
pub fn place_object(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::editing::place_object_at_position(state, world_pos);
}

/// Löscht alle aktuell selektierten Objekte und Baugruppen.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}
