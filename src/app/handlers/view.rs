//! Handler für Viewport und Hintergrundfarbe.

use crate::app::AppState;
use crate::core::Color;

/// Setzt die Hintergrundfarbe.
pub fn set_clear_color(state: &mut AppState, color: Color) {
    state.view.clear_color = color;
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    if !size[0].is_finite() || !size[1].is_finite() || size[0] <= 0.0 || size[1] <= 0.0 {
        log::warn!("Ungültige Viewport-Größe ignoriert: {:?}", size);
        return;
    }
    state.view.viewport_size = size;
}
