//! Debug-Fenster: Farbwähler für den Hintergrund, Clean-Button, Test-Fenster.

use crate::app::{AppIntent, AppState};
use crate::core::SessionPhase;
use crate::render::fallback::to_color32;

/// Zeigt das Debug-Fenster und gibt erzeugte Events zurück.
pub fn show_debug_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Window::new("Hello World!")
        .resizable(false)
        .default_pos([10.0, 10.0])
        .show(ctx, |ui| {
            let mut color = to_color32(state.view.clear_color);
            ui.horizontal(|ui| {
                if ui.color_edit_button_srgba(&mut color).changed() {
                    events.push(AppIntent::ClearColorChanged {
                        color: [
                            color.r() as f32 / 255.0,
                            color.g() as f32 / 255.0,
                            color.b() as f32 / 255.0,
                            state.view.clear_color[3],
                        ],
                    });
                }
                ui.label("clear color");
            });

            ui.horizontal(|ui| {
                if ui.button("Clean").clicked() {
                    events.push(AppIntent::CleanRequested);
                }

                let mut show_test_window = state.ui.show_test_window;
                if ui.checkbox(&mut show_test_window, "Click me!").changed() {
                    events.push(AppIntent::TestWindowToggled {
                        visible: show_test_window,
                    });
                }
            });

            ui.separator();

            let phase = match state.session.phase() {
                SessionPhase::Idle => "leer",
                SessionPhase::Accumulating => "sammelt Punkte",
                SessionPhase::Ready => "bereit",
                SessionPhase::Displaying => "Kurven",
            };
            ui.label(format!(
                "Objekte: {} / {} ({})",
                state.session.len(),
                crate::core::CurveSession::CAPACITY,
                phase
            ));

            if ui.button("Save settings").clicked() {
                events.push(AppIntent::OptionsSaveRequested);
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
        });

    events
}

/// Zeigt das zweite Test-Fenster, solange es aktiviert ist.
pub fn show_test_window(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_test_window {
        return events;
    }

    let mut open = true;
    egui::Window::new("Another Window")
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label("This is an example popup window.");
            if ui.button("Close Me").clicked() {
                events.push(AppIntent::TestWindowToggled { visible: false });
            }
        });

    // Schließen über das Fenster-Kreuz
    if !open {
        events.push(AppIntent::TestWindowToggled { visible: false });
    }

    events
}
