use std::sync::Arc;

use crate::app::history::Snapshot;
use crate::app::CommandLog;
use crate::core::{MeshLibrary, Scene};
use crate::shared::EditorOptions;

use super::{EditorToolState, SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Szene (Arc für O(1)-Undo-Snapshots, COW via `Arc::make_mut`)
    pub scene: Arc<Scene>,
    /// Katalog der platzierbaren Mesh-Assets
    pub mesh_library: MeshLibrary,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: crate::app::history::EditHistory,
    /// Laufzeit-Optionen (Farben, Größen, Kamera-Limits)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            scene: Arc::new(Scene::new()),
            mesh_library: MeshLibrary::builtin(),
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            command_log: CommandLog::new(),
            history: crate::app::history::EditHistory::new_with_capacity(200),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Objekte zurück (für UI-Anzeige)
    pub fn object_count(&self) -> usize {
        self.scene.object_count()
    }

    /// Gibt die Anzahl der Baugruppen zurück (für UI-Anzeige)
    pub fn assembly_count(&self) -> usize {
        self.scene.assembly_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Setzt die Statusnachricht der Status-Bar.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.ui.status_message = Some(message.into());
    }

    /// Übernimmt geladene Optionen und wendet die Powerline-Defaults
    /// auf die Panel-Einstellungen an.
    pub fn apply_options(&mut self, options: EditorOptions) {
        self.editor.powerline.segment_count = options.powerline_segment_count.max(1);
        self.editor.powerline.sag = options.powerline_sag.max(0.0);
        self.options = options;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_powerline_defaults_reach_settings() {
        let mut options = EditorOptions::default();
        options.powerline_segment_count = 24;
        options.powerline_sag = 7.5;

        let mut state = AppState::new();
        state.apply_options(options);

        assert_eq!(state.editor.powerline.segment_count, 24);
        assert_eq!(state.editor.powerline.sag, 7.5);
    }

    #[test]
    fn invalid_configured_defaults_are_clamped() {
        let mut options = EditorOptions::default();
        options.powerline_segment_count = 0;
        options.powerline_sag = -3.0;

        let mut state = AppState::new();
        state.apply_options(options);

        assert_eq!(state.editor.powerline.segment_count, 1);
        assert_eq!(state.editor.powerline.sag, 0.0);
    }
}
