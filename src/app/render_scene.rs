//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;
use glam::Mat4;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        objects: state.session.shared_objects(),
        transform: Mat4::IDENTITY,
        view: *state.session.transform(),
        viewport_size: state.view.viewport_size,
        clear_color: state.view.clear_color,
        point_size_px: state.options.point_size_px,
        line_width_px: state.options.line_width_px,
    }
}
