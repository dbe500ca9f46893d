//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use std::collections::HashSet;

use crate::app::{AppIntent, EditorTool};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    selected_object_ids: &HashSet<u64>,
    selection_is_empty: bool,
    active_tool: EditorTool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Ctrl+A (Alle selektieren), Escape (Selektion aufheben / Tool zurücksetzen)
    let (key_a_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::A),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_a_pressed {
        events.push(AppIntent::SelectAllRequested);
    }

    if key_escape_pressed {
        if !selection_is_empty {
            events.push(AppIntent::ClearSelectionRequested);
        } else if active_tool != EditorTool::Select {
            // Zurück zum Select-Tool
            events.push(AppIntent::SetEditorToolRequested {
                tool: EditorTool::Select,
            });
        }
    }

    // Delete, Tool-Wechsel, Generieren, Fokussieren
    let (key_del_pressed, key_1_pressed, key_2_pressed, key_g_pressed, key_f_pressed) =
        ui.input(|i| {
            (
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Num1),
                i.key_pressed(egui::Key::Num2),
                i.key_pressed(egui::Key::G),
                i.key_pressed(egui::Key::F),
            )
        });

    if key_del_pressed && !selection_is_empty {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    if key_1_pressed && !modifiers.command {
        events.push(AppIntent::SetEditorToolRequested {
            tool: EditorTool::Select,
        });
    }
    if key_2_pressed && !modifiers.command {
        events.push(AppIntent::SetEditorToolRequested {
            tool: EditorTool::Place,
        });
    }

    // G = Generieren (bei genau 2 selektierten Objekten)
    if key_g_pressed && !modifiers.command && selected_object_ids.len() == 2 {
        events.push(AppIntent::GeneratePowerlineRequested);
    }

    // F = Kamera auf die Selektion zentrieren
    if key_f_pressed && !modifiers.command && !selected_object_ids.is_empty() {
        events.push(AppIntent::FocusSelectionRequested);
    }

    events
}
