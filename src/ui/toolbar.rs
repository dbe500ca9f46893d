//! Toolbar für Editor-Werkzeugauswahl.

use crate::app::{AppIntent, AppState, EditorTool};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.active_tool;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            let select_btn = egui::Button::new("Select (1)");
            if ui
                .add(select_btn.selected(active == EditorTool::Select))
                .clicked()
            {
                events.push(AppIntent::SetEditorToolRequested {
                    tool: EditorTool::Select,
                });
            }

            let place_btn = egui::Button::new("Mast platzieren (2)");
            if ui
                .add(place_btn.selected(active == EditorTool::Place))
                .clicked()
            {
                events.push(AppIntent::SetEditorToolRequested {
                    tool: EditorTool::Place,
                });
            }

            ui.separator();

            // Delete-Button (nur wenn Selektion vorhanden)
            let has_selection = !state.selection.is_empty();
            if ui
                .add_enabled(has_selection, egui::Button::new("🗑 Delete (Del)"))
                .clicked()
            {
                events.push(AppIntent::DeleteSelectedRequested);
            }

            // Platzieren-Status
            if active == EditorTool::Place {
                ui.separator();
                let mesh_name = state
                    .mesh_library
                    .get(&state.editor.placement_mesh_id)
                    .map(|asset| asset.display_name.as_str())
                    .unwrap_or("?");
                ui.label(format!("Klick platziert: {}", mesh_name));
            }
        });
    });

    events
}
