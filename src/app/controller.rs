//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Anwendungssteuerung ===
            AppCommand::RequestExit => state.should_exit = true,

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::FocusSelection => handlers::view::focus_selection(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Selektion ===
            AppCommand::SelectNearestObject {
                world_pos,
                max_distance,
                additive,
            } => handlers::selection::select_nearest(state, world_pos, max_distance, additive),
            AppCommand::SelectObjectsInRect { min, max, additive } => {
                handlers::selection::select_in_rect(state, min, max, additive)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::SelectAllObjects => handlers::selection::select_all(state),
            AppCommand::BeginMoveSelected => handlers::selection::begin_move(state),
            AppCommand::MoveSelected { delta_world } => {
                handlers::selection::move_selected(state, delta_world)
            }
            AppCommand::EndMoveSelected => { /* No-op: Move-Lifecycle Ende */ }

            // === Editing ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::PlaceObjectAtPosition { world_pos } => {
                handlers::editing::place_object(state, world_pos)
            }
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),

            // === Powerline ===
            AppCommand::SetSegmentCount { count } => {
                handlers::powerline::set_segment_count(state, count)
            }
            AppCommand::SetSagAmount { sag } => handlers::powerline::set_sag_amount(state, sag),
            AppCommand::SetAttachToSockets { enabled } => {
                handlers::powerline::set_attach_to_sockets(state, enabled)
            }
            AppCommand::SetCableMesh { mesh_id } => {
                handlers::powerline::set_cable_mesh(state, mesh_id)
            }
            AppCommand::SetPlacementMesh { mesh_id } => {
                handlers::powerline::set_placement_mesh(state, mesh_id)
            }
            AppCommand::GeneratePowerline => handlers::powerline::generate(state),
            AppCommand::RegenerateSelectedAssemblies => {
                handlers::powerline::regenerate_selected(state)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }
}
