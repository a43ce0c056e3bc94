//! Viewport-Input-Handling: Maus-Klicks, Tastatur, Größe → AppIntent.

use super::keyboard;
use crate::app::AppIntent;

/// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
///
/// Jeder Primärklick wird als Pixelposition relativ zur linken oberen Ecke
/// des Viewports gemeldet; die Umrechnung in Weltkoordinaten passiert erst
/// im Frame-Schritt.
#[derive(Default)]
pub struct InputState;

impl InputState {
    /// Erstellt einen neuen Input-Zustand.
    pub fn new() -> Self {
        Self
    }

    /// Sammelt alle Viewport-Intents dieses Frames.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let local = pointer_pos - response.rect.min;
                events.push(AppIntent::ViewportClicked {
                    pixel: glam::Vec2::new(local.x, local.y),
                });
            }
        }

        events
    }
}
