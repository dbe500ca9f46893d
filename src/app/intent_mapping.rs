//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::FocusSelectionRequested => vec![AppCommand::FocusSelection],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::ObjectPickRequested {
            world_pos,
            additive,
        } => {
            let viewport_height = state.view.viewport_size[1];
            let base_max_distance = state
                .view
                .camera
                .pick_radius_world(viewport_height, state.options.selection_pick_radius_px);

            // Bereits selektierte Objekte bekommen eine vergrößerte Hitbox,
            // damit ein erneuter Klick sie zuverlässig trifft
            let increased_max_distance = base_max_distance * state.options.selection_size_factor;

            let mut max_distance = base_max_distance;
            for id in state.selection.selected_object_ids.iter() {
                if let Some(object) = state.scene.objects.get(id) {
                    if (object.ground_position() - world_pos).length() <= increased_max_distance {
                        max_distance = increased_max_distance;
                        break;
                    }
                }
            }

            vec![AppCommand::SelectNearestObject {
                world_pos,
                max_distance,
                additive,
            }]
        }
        AppIntent::SelectObjectsInRectRequested { min, max, additive } => {
            vec![AppCommand::SelectObjectsInRect { min, max, additive }]
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAllObjects],
        AppIntent::BeginMoveSelectedRequested => vec![AppCommand::BeginMoveSelected],
        AppIntent::MoveSelectedRequested { delta_world } => {
            vec![AppCommand::MoveSelected { delta_world }]
        }
        AppIntent::EndMoveSelectedRequested => vec![AppCommand::EndMoveSelected],
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::PlaceObjectRequested { world_pos } => {
            vec![AppCommand::PlaceObjectAtPosition { world_pos }]
        }
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::SegmentCountChanged { count } => vec![AppCommand::SetSegmentCount { count }],
        AppIntent::SagAmountChanged { sag } => vec![AppCommand::SetSagAmount { sag }],
        AppIntent::AttachToSocketsToggled { enabled } => {
            vec![AppCommand::SetAttachToSockets { enabled }]
        }
        AppIntent::CableMeshSelected { mesh_id } => vec![AppCommand::SetCableMesh { mesh_id }],
        AppIntent::PlacementMeshSelected { mesh_id } => {
            vec![AppCommand::SetPlacementMesh { mesh_id }]
        }
        AppIntent::GeneratePowerlineRequested => vec![AppCommand::GeneratePowerline],
        AppIntent::RegenerateSelectedRequested => vec![AppCommand::RegenerateSelectedAssemblies],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
    }
}
