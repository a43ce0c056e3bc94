//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_escape_pressed, key_f5_pressed, key_s_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::F5),
            i.key_pressed(egui::Key::S),
        )
    });

    // Escape schließt das Fenster
    if key_escape_pressed {
        events.push(AppIntent::ExitRequested);
    }

    if key_f5_pressed {
        events.push(AppIntent::OptionsReloadRequested);
    }

    if modifiers.command && key_s_pressed {
        events.push(AppIntent::OptionsSaveRequested);
    }

    events
}
