//! UI-Komponenten: Debug-Fenster, Test-Fenster, Input-Handling.

pub mod debug_panel;
pub mod input;
mod keyboard;

pub use debug_panel::{show_debug_panel, show_test_window};
pub use input::InputState;
