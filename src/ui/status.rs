//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditorTool};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Masten: {} | Powerlines: {}",
                state.object_count(),
                state.assembly_count()
            ));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom, state.view.camera.position.x, state.view.camera.position.y
            ));

            ui.separator();

            let selected_objects = state.selection.selected_object_ids.len();
            let selected_assemblies = state.selection.selected_assembly_ids.len();
            ui.label(format!(
                "Selektiert: {} / {}",
                selected_objects, selected_assemblies
            ));

            ui.separator();

            // Aktives Werkzeug
            let tool_name = match state.editor.active_tool {
                EditorTool::Select => "Select",
                EditorTool::Place => "Platzieren",
            };
            ui.label(format!("Tool: {}", tool_name));

            // Statusnachricht (z.B. fehlgeschlagene Generierung)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
