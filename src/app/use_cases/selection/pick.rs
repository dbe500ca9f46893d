//! Use-Case: Selektion per Klick (Nearest-Pick, Objekte vor Kabeln).

use crate::app::AppState;

/// Selektiert das nächste Objekt zur Weltposition; trifft kein Objekt,
/// wird die nächste Kabel-Baugruppe innerhalb desselben Radius geprüft.
///
/// Additiv (Ctrl) toggelt den Treffer in der Selektion, sonst ersetzt er sie.
/// Ohne Treffer wird die Selektion gelöscht.
pub fn select_nearest(state: &mut AppState, world_pos: glam::Vec2, max_distance: f32, additive: bool) {
    if max_distance < 0.0 {
        state.selection.clear();
        return;
    }

    let object_hit = state
        .scene
        .nearest_object(world_pos)
        .filter(|hit| hit.distance <= max_distance)
        .map(|hit| hit.object_id);

    // Objekte haben Vorrang; Kabel nur prüfen wenn kein Objekt getroffen wurde
    let assembly_hit = if object_hit.is_none() {
        state
            .scene
            .nearest_assembly(world_pos)
            .filter(|(_, distance)| *distance <= max_distance)
            .map(|(id, _)| id)
    } else {
        None
    };

    if additive {
        if let Some(object_id) = object_hit {
            if state.selection.selected_object_ids.contains(&object_id) {
                state.selection.selected_object_ids.remove(&object_id);
                state.selection.anchor_object_id =
                    state.selection.selected_object_ids.iter().copied().next();
            } else {
                state.selection.selected_object_ids.insert(object_id);
                state.selection.anchor_object_id = Some(object_id);
            }
        } else if let Some(assembly_id) = assembly_hit {
            if state.selection.selected_assembly_ids.contains(&assembly_id) {
                state.selection.selected_assembly_ids.remove(&assembly_id);
            } else {
                state.selection.selected_assembly_ids.insert(assembly_id);
            }
        }
    } else {
        state.selection.clear();
        if let Some(object_id) = object_hit {
            state.selection.selected_object_ids.insert(object_id);
            state.selection.anchor_object_id = Some(object_id);
        } else if let Some(assembly_id) = assembly_hit {
            state.selection.selected_assembly_ids.insert(assembly_id);
        }
    }
}
