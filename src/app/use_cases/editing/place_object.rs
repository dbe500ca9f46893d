//! Use-Case: Neues Objekt an Weltposition platzieren.

use std::sync::Arc;

use crate::app::AppState;
use crate::core::MeshKind;

/// Platziert einen neuen Mast mit dem aktuellen Platzierungs-Mesh.
///
/// Das neue Objekt ersetzt die aktuelle Selektion. Zeigt das Panel auf
/// ein unbekanntes oder Nicht-Mast-Mesh, passiert nichts.
pub fn place_object_at_position(state: &mut AppState, world_pos: glam::Vec2) {
    let mesh_id = state.editor.placement_mesh_id.clone();

    match state.mesh_library.get(&mesh_id) {
        Some(asset) if asset.kind == MeshKind::Support => {}
        Some(_) => {
            log::warn!("Platzieren: '{}' ist kein Mast-Asset", mesh_id);
            state.set_status(format!("'{}' ist kein Mast-Asset", mesh_id));
            return;
        }
        None => {
            log::warn!("Platzieren: Mesh '{}' ist nicht im Katalog", mesh_id);
            state.set_status(format!("Mesh '{}' ist nicht im Katalog", mesh_id));
            return;
        }
    }

    state.record_undo_snapshot();

    let scene = Arc::make_mut(&mut state.scene);
    let id = scene.spawn_object(&mesh_id, glam::Vec3::new(world_pos.x, world_pos.y, 0.0));

    state.selection.clear();
    state.selection.selected_object_ids.insert(id);
    state.selection.anchor_object_id = Some(id);

    log::info!("Objekt {} ({}) platziert bei {:?}", id, mesh_id, world_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_object_and_selects_it() {
        let mut state = AppState::new();

        place_object_at_position(&mut state, glam::Vec2::new(12.0, -5.0));

        assert_eq!(state.object_count(), 1);
        let object = state.scene.objects.values().next().expect("Objekt erwartet");
        assert_eq!(object.position, glam::Vec3::new(12.0, -5.0, 0.0));
        assert!(state.selection.selected_object_ids.contains(&object.id));
        assert!(state.can_undo());
    }

    #[test]
    fn placement_with_cable_mesh_is_rejected() {
        let mut state = AppState::new();
        state.editor.placement_mesh_id = "kabel_standard".to_string();

        place_object_at_position(&mut state, glam::Vec2::ZERO);

        assert_eq!(state.object_count(), 0);
        assert!(!state.can_undo());
    }
}
