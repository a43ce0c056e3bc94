//! Handler für Fenster-State und Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Blendet das Test-Fenster ein oder aus.
pub fn set_test_window_visible(state: &mut AppState, visible: bool) {
    state.ui.show_test_window = visible;
}
