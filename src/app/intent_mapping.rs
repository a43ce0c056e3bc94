//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportClicked { pixel } => vec![AppCommand::PushPendingClick { pixel }],
        AppIntent::FrameStarted => {
            // Klicks zuerst verarbeiten, danach der Drei-Einträge-Check
            vec![
                AppCommand::ProcessPendingClicks,
                AppCommand::GenerateCurvesIfReady,
            ]
        }
        AppIntent::CleanRequested => vec![AppCommand::ClearObjects],
        AppIntent::ClearColorChanged { color } => {
            if color == state.view.clear_color {
                Vec::new()
            } else {
                vec![AppCommand::SetClearColor { color }]
            }
        }
        AppIntent::TestWindowToggled { visible } => {
            vec![AppCommand::SetTestWindowVisible { visible }]
        }
        AppIntent::ViewportResized { size } => {
            if size == state.view.viewport_size {
                Vec::new()
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OptionsReloadRequested => vec![AppCommand::ReloadOptions],
        AppIntent::OptionsSaveRequested => vec![AppCommand::SaveOptions],
    }
}
