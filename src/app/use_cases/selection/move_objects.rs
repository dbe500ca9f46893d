//! Use-Case: Drag-Verschieben selektierter Objekte.
//!
//! Der Move-Lifecycle besteht aus Begin (Undo-Snapshot), beliebig vielen
//! Delta-Updates und einem End-Event. Baugruppen folgen bewusst nicht
//! automatisch — Regenerieren ist ein expliziter Schritt.

use std::sync::Arc;

use crate::app::AppState;

/// Beginnt das Verschieben: ein Undo-Schritt pro Drag-Geste.
pub fn begin_move(state: &mut AppState) {
    if state.selection.selected_object_ids.is_empty() {
        return;
    }
    state.record_undo_snapshot();
}

/// Verschiebt die selektierten Objekte um ein Weltkoordinaten-Delta.
pub fn move_selected(state: &mut AppState, delta_world: glam::Vec2) {
    if state.selection.selected_object_ids.is_empty() {
        return;
    }

    let ids = state.selection.selected_object_ids.clone();
    let scene = Arc::make_mut(&mut state.scene);
    scene.translate_objects(&ids, delta_world);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};
    use std::sync::Arc;

    use crate::core::Scene;

    fn with_selected_mast() -> AppState {
        let mut scene = Scene::new();
        let id = scene.spawn_object("mast_holz", Vec3::new(5.0, 5.0, 0.0));

        let mut state = AppState::new();
        state.scene = Arc::new(scene);
        state.selection.selected_object_ids.insert(id);
        state
    }

    #[test]
    fn move_translates_selected_objects() {
        let mut state = with_selected_mast();

        begin_move(&mut state);
        move_selected(&mut state, Vec2::new(3.0, -2.0));
        move_selected(&mut state, Vec2::new(1.0, 0.0));

        let object = state.scene.objects.get(&1).expect("Objekt erwartet");
        assert_eq!(object.position, Vec3::new(9.0, 3.0, 0.0));
    }

    #[test]
    fn whole_drag_is_one_undo_step() {
        let mut state = with_selected_mast();

        begin_move(&mut state);
        move_selected(&mut state, Vec2::new(10.0, 0.0));
        move_selected(&mut state, Vec2::new(10.0, 0.0));

        let current = crate::app::history::Snapshot::from_state(&state);
        let restored = state
            .history
            .pop_undo_with_current(current)
            .expect("undo vorhanden");
        restored.apply_to(&mut state);

        let object = state.scene.objects.get(&1).expect("Objekt erwartet");
        assert_eq!(object.position, Vec3::new(5.0, 5.0, 0.0));
        assert!(!state.can_undo());
    }

    #[test]
    fn begin_move_without_selection_records_nothing() {
        let mut state = with_selected_mast();
        state.selection.clear();

        begin_move(&mut state);
        assert!(!state.can_undo());
    }
}
