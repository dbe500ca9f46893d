//! Use-Case: Selektierte Objekte und Baugruppen löschen.

use std::sync::Arc;

use crate::app::AppState;

/// Löscht die selektierten Objekte (mit Kaskade auf referenzierende
/// Baugruppen) sowie die direkt selektierten Baugruppen. Ein Undo-Schritt
/// für die ganze Operation.
pub fn delete_selected(state: &mut AppState) {
    if state.selection.is_empty() {
        return;
    }

    state.record_undo_snapshot();

    let object_ids = state.selection.selected_object_ids.clone();
    let assembly_ids = state.selection.selected_assembly_ids.clone();

    let scene = Arc::make_mut(&mut state.scene);
    let removed_assemblies_direct = scene.remove_assemblies(&assembly_ids);
    let (removed_objects, removed_assemblies_cascade) = scene.remove_objects(&object_ids);

    state.selection.clear();

    log::info!(
        "Gelöscht: {} Objekt(e), {} Baugruppe(n) ({} davon kaskadiert)",
        removed_objects,
        removed_assemblies_direct + removed_assemblies_cascade,
        removed_assemblies_cascade
    );
}
