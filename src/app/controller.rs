//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
///
/// `handle_intent` ist der einzige Einstieg für Eingaben; jede Event-Loop
/// (eframe, Tests, Benchmarks) ruft ihn synchron pro Event auf.
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
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Spline-Editing ===
            AppCommand::AddNode { position } => handlers::editing::add_node(state, position),
            AppCommand::ResetSpline => handlers::editing::reset(state),
            AppCommand::SetInsertionPolicy { policy } => {
                handlers::editing::set_insertion_policy(state, policy)
            }

            // === Greifen & Ziehen ===
            AppCommand::Grab { target } => handlers::drag::grab(state, target),
            AppCommand::DragGrabbed { position } => handlers::drag::drag_to(state, position),
            AppCommand::ReleaseGrab => handlers::drag::release(state),

            // === Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ToggleConstructionLines => {
                handlers::view::toggle_construction_lines(state)
            }

            // === Optionen & Anwendungssteuerung ===
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options),
            AppCommand::SetOptionsDialogVisible { visible } => {
                handlers::dialog::set_options_dialog_visible(state, visible)
            }
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
