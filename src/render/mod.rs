//! GPU-Rendering mit wgpu.

mod callback;
pub mod fallback;
mod line_renderer;
mod mesh;
mod point_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use line_renderer::LineRenderer;
pub(crate) use point_renderer::PointRenderer;
use types::RenderContext;

use eframe::egui_wgpu;

/// Haupt-Renderer für die Objekte einer Sitzung.
///
/// Verwaltet GPU-Buffer und Pipelines selbst; API: `new()` + `render_scene()`.
pub struct Renderer {
    line_renderer: LineRenderer,
    point_renderer: PointRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        // Shader einmalig laden, beide Sub-Renderer teilen dasselbe ShaderModule
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Curve Sandbox Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        Self {
            line_renderer: LineRenderer::new(render_state, &shader),
            point_renderer: PointRenderer::new(render_state, &shader),
        }
    }

    /// Rendert die komplette Szene
    ///
    /// Kurven zuerst, Punkte darüber. Die Hintergrundfarbe setzt der Viewport-Frame.
    pub fn render_scene(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        let [width, height] = scene.viewport_size;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }
        if !scene.has_objects() {
            return;
        }

        let ctx = RenderContext {
            device,
            queue,
            view_proj: types::build_view_projection(&scene.view, scene.transform),
            world_per_pixel: scene.world_per_pixel(),
        };

        self.line_renderer
            .render(&ctx, render_pass, &scene.objects, scene.line_width_px);
        self.point_renderer
            .render(&ctx, render_pass, &scene.objects, scene.point_size_px);
    }
}
