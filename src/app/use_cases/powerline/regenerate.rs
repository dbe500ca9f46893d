//! Use-Case: Selektierte Baugruppen neu generieren.

use std::sync::Arc;

use crate::app::AppState;

use super::plan::{plan_powerline, CablePlan};

/// Regeneriert alle selektierten Baugruppen aus den aktuellen Objektpositionen
/// und den aktuellen Panel-Einstellungen.
///
/// Es wird zuerst für alle Baugruppen geplant und erst danach mutiert; eine
/// Baugruppe, deren Planung fehlschlägt (z.B. gelöschtes Quellobjekt), bleibt
/// unverändert. Der ganze Batch ist ein Undo-Schritt.
pub fn regenerate_selected(state: &mut AppState) {
    if state.selection.selected_assembly_ids.is_empty() {
        log::warn!("Regenerieren: keine Baugruppe selektiert");
        state.set_status("Regenerieren: keine Baugruppe selektiert");
        return;
    }

    let mut ids: Vec<u64> = state.selection.selected_assembly_ids.iter().copied().collect();
    ids.sort_unstable();

    let mut plans: Vec<(u64, CablePlan)> = Vec::new();
    let mut failed = 0usize;

    for assembly_id in ids {
        let Some(assembly) = state.scene.assemblies.get(&assembly_id) else {
            failed += 1;
            continue;
        };

        match plan_powerline(
            &state.scene,
            &state.mesh_library,
            assembly.source_a,
            assembly.source_b,
            &state.editor.powerline,
        ) {
            Ok(plan) => plans.push((assembly_id, plan)),
            Err(e) => {
                log::warn!("Baugruppe {} nicht regeneriert: {:#}", assembly_id, e);
                failed += 1;
            }
        }
    }

    if plans.is_empty() {
        state.set_status("Regenerieren fehlgeschlagen: keine Baugruppe planbar");
        return;
    }

    state.record_undo_snapshot();

    let scene = Arc::make_mut(&mut state.scene);
    let regenerated = plans.len();
    for (assembly_id, plan) in plans {
        if let Some(assembly) = scene.assemblies.get_mut(&assembly_id) {
            assembly.origin = plan.origin;
            assembly.settings = plan.settings;
            assembly.spans = plan.spans;
        }
    }

    let message = if failed == 0 {
        format!("{} Baugruppe(n) regeneriert", regenerated)
    } else {
        format!("{} Baugruppe(n) regeneriert, {} übersprungen", regenerated, failed)
    };
    log::info!("{}", message);
    state.set_status(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};
    use std::collections::HashSet;
    use std::sync::Arc;

    use crate::app::use_cases::powerline::generate::generate_for_selection;
    use crate::core::Scene;

    fn state_with_generated_assembly() -> AppState {
        let mut scene = Scene::new();
        let a = scene.spawn_object("mast_holz", Vec3::new(0.0, 0.0, 0.0));
        let b = scene.spawn_object("mast_holz", Vec3::new(40.0, 0.0, 0.0));

        let mut state = AppState::new();
        state.scene = Arc::new(scene);
        state.selection.selected_object_ids.insert(a);
        state.selection.selected_object_ids.insert(b);
        generate_for_selection(&mut state);
        state
    }

    #[test]
    fn regenerate_follows_moved_objects() {
        let mut state = state_with_generated_assembly();

        // Quellobjekt verschieben, dann regenerieren
        let mut moved = HashSet::new();
        moved.insert(2u64);
        Arc::make_mut(&mut state.scene).translate_objects(&moved, Vec2::new(20.0, 10.0));

        regenerate_selected(&mut state);

        let assembly = state.scene.assemblies.values().next().expect("Baugruppe erwartet");
        let last = assembly.spans[0]
            .points
            .last()
            .expect("Punkte erwartet")
            .position;
        assert_eq!(last, Vec3::new(60.0, 10.0, 0.0));
    }

    #[test]
    fn regenerate_uses_current_panel_settings() {
        let mut state = state_with_generated_assembly();
        state.editor.powerline.segment_count = 3;

        regenerate_selected(&mut state);

        let assembly = state.scene.assemblies.values().next().expect("Baugruppe erwartet");
        assert_eq!(assembly.settings.segment_count, 3);
        assert_eq!(assembly.spans[0].points.len(), 4);
    }

    #[test]
    fn regenerate_without_selection_is_a_noop() {
        let mut state = state_with_generated_assembly();
        state.selection.clear();
        let before = state.scene.assemblies.clone();

        regenerate_selected(&mut state);

        assert_eq!(state.scene.assemblies, before);
    }

    #[test]
    fn unplannable_assembly_stays_unchanged() {
        let mut state = state_with_generated_assembly();
        let before = state.scene.assemblies.clone();
        let undo_before = state.can_undo();

        // Planung scheitert, wenn das Panel auf ein Kabel ohne Katalog-Eintrag zeigt
        state.editor.powerline.cable_mesh_id = "kabel_unbekannt".to_string();
        regenerate_selected(&mut state);

        assert_eq!(state.scene.assemblies, before);
        assert_eq!(state.can_undo(), undo_before);
    }
}
