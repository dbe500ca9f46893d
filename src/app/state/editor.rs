//! Editor-Werkzeug-Zustand und Powerline-Einstellungen.

use crate::core::PowerlineSettings;

/// Aktives Editor-Werkzeug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Objekte selektieren und verschieben
    #[default]
    Select,
    /// Neue Masten platzieren
    Place,
}

/// Zustand der Editor-Werkzeuge und der Panel-Einstellungen.
#[derive(Debug, Clone)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Aktuelle Powerline-Einstellungen aus dem Panel
    pub powerline: PowerlineSettings,
    /// Mesh-ID für neu platzierte Masten
    pub placement_mesh_id: String,
}

impl EditorToolState {
    /// Erstellt den Werkzeug-Zustand mit Standardwerten.
    pub fn new() -> Self {
        Self {
            active_tool: EditorTool::Select,
            powerline: PowerlineSettings::default(),
            placement_mesh_id: "mast_holz".to_string(),
        }
    }
}

impl Default for EditorToolState {
    fn default() -> Self {
        Self::new()
    }
}
