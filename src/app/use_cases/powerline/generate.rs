//! Use-Case: Powerline zwischen den zwei selektierten Objekten generieren.

use std::sync::Arc;

use crate::app::AppState;

use super::plan::plan_powerline;

/// Generiert eine Powerline zwischen genau zwei selektierten Objekten.
///
/// Bei abweichender Selektionsgröße oder fehlgeschlagener Planung bleibt die
/// Szene unverändert und es wird kein Undo-Schritt aufgezeichnet; die Ursache
/// landet als Warnung in Log und Status-Bar.
pub fn generate_for_selection(state: &mut AppState) {
    if state.selection.selected_object_ids.len() != 2 {
        let message = format!(
            "Generieren braucht genau 2 selektierte Objekte ({} selektiert)",
            state.selection.selected_object_ids.len()
        );
        log::warn!("{}", message);
        state.set_status(message);
        return;
    }

    // IDs sortiert für deterministische Reihenfolge (HashSet-Iteration ist nicht-deterministisch)
    let mut ids: Vec<u64> = state.selection.selected_object_ids.iter().copied().collect();
    ids.sort_unstable();

    let plan = match plan_powerline(
        &state.scene,
        &state.mesh_library,
        ids[0],
        ids[1],
        &state.editor.powerline,
    ) {
        Ok(plan) => plan,
        Err(e) => {
            log::warn!("Powerline-Generierung fehlgeschlagen: {:#}", e);
            state.set_status(format!("Generierung fehlgeschlagen: {}", e));
            return;
        }
    };

    state.record_undo_snapshot();

    let scene = Arc::make_mut(&mut state.scene);
    let assembly_id = scene.add_assembly(
        plan.origin,
        plan.source_a,
        plan.source_b,
        plan.settings,
        plan.spans,
    );

    state.selection.clear();
    state.selection.selected_assembly_ids.insert(assembly_id);

    let assembly = &state.scene.assemblies[&assembly_id];
    let message = format!(
        "Powerline {} generiert: {} Spans, {} Segmente",
        assembly_id,
        assembly.spans.len(),
        assembly.segment_count()
    );
    log::info!("{}", message);
    state.set_status(message);
}
