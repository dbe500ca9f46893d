//! Seitenpanel mit den Powerline-Einstellungen und Selektionsinfo.

use crate::app::{AppIntent, AppState};
use crate::core::MeshKind;
use crate::shared::options;

/// Rendert das Powerline-Panel am rechten Rand und gibt erzeugte Events zurück.
pub fn render_powerline_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("powerline_panel")
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Powerline");
            ui.separator();

            render_settings(ui, state, &mut events);
            ui.separator();
            render_generate_buttons(ui, state, &mut events);
            ui.separator();
            render_placement(ui, state, &mut events);
            ui.separator();
            render_selection_info(ui, state);
        });

    events
}

fn render_settings(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let settings = &state.editor.powerline;

    let mut segment_count = settings.segment_count;
    if ui
        .add(
            egui::Slider::new(&mut segment_count, 1..=options::POWERLINE_SEGMENT_COUNT_MAX)
                .text("Segmente"),
        )
        .changed()
    {
        events.push(AppIntent::SegmentCountChanged {
            count: segment_count,
        });
    }

    let mut sag = settings.sag;
    if ui
        .add(egui::Slider::new(&mut sag, 0.0..=options::POWERLINE_SAG_MAX).text("Durchhang"))
        .changed()
    {
        events.push(AppIntent::SagAmountChanged { sag });
    }

    let mut attach = settings.attach_to_sockets;
    if ui.checkbox(&mut attach, "An Sockets befestigen").changed() {
        events.push(AppIntent::AttachToSocketsToggled { enabled: attach });
    }

    let cable_label = state
        .mesh_library
        .get(&settings.cable_mesh_id)
        .map(|asset| asset.display_name.clone())
        .unwrap_or_else(|| settings.cable_mesh_id.clone());

    egui::ComboBox::from_id_salt("cable_mesh_combo")
        .selected_text(cable_label)
        .show_ui(ui, |ui| {
            for asset in state.mesh_library.assets_of_kind(MeshKind::Cable) {
                let is_selected = asset.id == settings.cable_mesh_id;
                if ui
                    .selectable_label(is_selected, &asset.display_name)
                    .clicked()
                {
                    events.push(AppIntent::CableMeshSelected {
                        mesh_id: asset.id.clone(),
                    });
                }
            }
        });
}

fn render_generate_buttons(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let can_generate = state.selection.selected_object_ids.len() == 2;
    if ui
        .add_enabled(can_generate, egui::Button::new("⚡ Generieren"))
        .clicked()
    {
        events.push(AppIntent::GeneratePowerlineRequested);
    }
    if !can_generate {
        ui.label(
            egui::RichText::new("Genau 2 Masten selektieren")
                .small()
                .weak(),
        );
    }

    let can_regenerate = !state.selection.selected_assembly_ids.is_empty();
    if ui
        .add_enabled(can_regenerate, egui::Button::new("↻ Regenerieren"))
        .clicked()
    {
        events.push(AppIntent::RegenerateSelectedRequested);
    }
}

fn render_placement(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label("Mast-Typ für Platzierung:");

    let placement_label = state
        .mesh_library
        .get(&state.editor.placement_mesh_id)
        .map(|asset| asset.display_name.clone())
        .unwrap_or_else(|| state.editor.placement_mesh_id.clone());

    egui::ComboBox::from_id_salt("placement_mesh_combo")
        .selected_text(placement_label)
        .show_ui(ui, |ui| {
            for asset in state.mesh_library.assets_of_kind(MeshKind::Support) {
                let is_selected = asset.id == state.editor.placement_mesh_id;
                if ui
                    .selectable_label(is_selected, &asset.display_name)
                    .clicked()
                {
                    events.push(AppIntent::PlacementMeshSelected {
                        mesh_id: asset.id.clone(),
                    });
                }
            }
        });
}

fn render_selection_info(ui: &mut egui::Ui, state: &AppState) {
    ui.label(format!(
        "Selektiert: {} Objekt(e), {} Baugruppe(n)",
        state.selection.selected_object_ids.len(),
        state.selection.selected_assembly_ids.len()
    ));

    // Details der selektierten Objekte (sortiert für stabile Anzeige)
    let mut object_ids: Vec<u64> = state.selection.selected_object_ids.iter().copied().collect();
    object_ids.sort_unstable();
    for id in object_ids {
        if let Some(object) = state.scene.objects.get(&id) {
            let socket_count = state
                .mesh_library
                .get(&object.mesh_id)
                .map(|asset| asset.sockets.len())
                .unwrap_or(0);
            ui.label(format!(
                "• {} ({}, {} Sockets)",
                object.name, object.mesh_id, socket_count
            ));
        }
    }

    let mut assembly_ids: Vec<u64> = state
        .selection
        .selected_assembly_ids
        .iter()
        .copied()
        .collect();
    assembly_ids.sort_unstable();
    for id in assembly_ids {
        if let Some(assembly) = state.scene.assemblies.get(&id) {
            ui.label(format!(
                "• Powerline {}: {} Spans, {:.1} m",
                assembly.id,
                assembly.spans.len(),
                assembly.total_length()
            ));
        }
    }
}
