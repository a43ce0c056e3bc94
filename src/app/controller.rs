//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
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
            // === Sitzung ===
            AppCommand::PushPendingClick { pixel } => handlers::session::push_click(state, pixel),
            AppCommand::ProcessPendingClicks => handlers::session::process_pending_clicks(state),
            AppCommand::GenerateCurvesIfReady => handlers::session::generate_curves_if_ready(state),
            AppCommand::ClearObjects => handlers::session::clear_objects(state),

            // === View ===
            AppCommand::SetClearColor { color } => handlers::view::set_clear_color(state, color),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Fenster & Anwendungssteuerung ===
            AppCommand::SetTestWindowVisible { visible } => {
                handlers::dialog::set_test_window_visible(state, visible)
            }
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            // === Optionen ===
            AppCommand::ReloadOptions => handlers::options::reload(state)?,
            AppCommand::SaveOptions => handlers::options::save(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
