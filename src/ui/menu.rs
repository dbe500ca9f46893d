//! Top-Menü (Datei, Bearbeiten, Ansicht, Hilfe).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            // Bearbeiten: Undo / Redo / Selektion
            ui.menu_button("Bearbeiten", |ui| {
                let can_undo = state.can_undo();
                let can_redo = state.can_redo();

                if ui
                    .add_enabled(can_undo, egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(can_redo, egui::Button::new("Redo (Ctrl+Y / Shift+Cmd+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Alle selektieren (Ctrl+A)").clicked() {
                    events.push(AppIntent::SelectAllRequested);
                    ui.close();
                }

                let has_selection = !state.selection.is_empty();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Selektion aufheben (Esc)"))
                    .clicked()
                {
                    events.push(AppIntent::ClearSelectionRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Reset Camera").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                let has_objects = !state.selection.selected_object_ids.is_empty();
                if ui
                    .add_enabled(
                        has_objects,
                        egui::Button::new("Auf Selektion zentrieren (F)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::FocusSelectionRequested);
                    ui.close();
                }
            });

            ui.menu_button("Hilfe", |ui| {
                if ui.button("Über").clicked() {
                    log::info!("Powerline-Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
