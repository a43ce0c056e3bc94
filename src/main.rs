//! Curve Sandbox.
//!
//! Klicks setzen Punkte in ein 20×20-Welt-Quadrat; nach drei Punkten werden
//! eine quadratische Kurve, ihre verschobene Kopie und die verschobenen
//! Kontrollpunkte gezeichnet. Rendering mit egui + wgpu.

use curve_sandbox::{render, ui, AppController, AppIntent, AppState, SandboxOptions};
use eframe::egui;
use eframe::egui_wgpu;
use std::sync::{Arc, Mutex};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run().inspect_err(|e| log::error!("Fenster konnte nicht erstellt werden: {e}"))
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Curve Sandbox v{} startet...", env!("CARGO_PKG_VERSION"));

        let config_path = SandboxOptions::config_path();
        let sandbox_options = SandboxOptions::load_from_file(&config_path);
        let edge = sandbox_options.window_edge_px;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([edge, edge])
                .with_resizable(false)
                .with_title("Curve Sandbox"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            vsync: true,
            ..Default::default()
        };

        eframe::run_native(
            "Curve Sandbox",
            options,
            Box::new(move |cc| {
                let state = AppState::with_options(sandbox_options, config_path);
                Ok(Box::new(SandboxApp::new(cc.wgpu_render_state.as_ref(), state)))
            }),
        )
    }
}

/// GPU-Ressourcen für den wgpu-Pfad
struct GpuTarget {
    renderer: Arc<Mutex<render::Renderer>>,
    device: eframe::wgpu::Device,
    queue: eframe::wgpu::Queue,
}

/// Haupt-Anwendungsstruktur
struct SandboxApp {
    state: AppState,
    controller: AppController,
    gpu: Option<GpuTarget>,
    input: ui::InputState,
}

impl SandboxApp {
    fn new(render_state: Option<&egui_wgpu::RenderState>, state: AppState) -> Self {
        let gpu = match render_state {
            Some(render_state) => Some(GpuTarget {
                renderer: Arc::new(Mutex::new(render::Renderer::new(render_state))),
                device: render_state.device.clone(),
                queue: render_state.queue.clone(),
            }),
            None => {
                log::error!(
                    "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden, zeichne mit egui-Painter"
                );
                None
            }
        };

        Self {
            state,
            controller: AppController::new(),
            gpu,
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SandboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_window_events(ctx);

        let fill = render::fallback::to_color32(self.state.view.clear_color);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(fill))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                let viewport_size = [rect.width(), rect.height()];
                events.extend(
                    self.input
                        .collect_viewport_events(ui, &response, viewport_size),
                );

                // Ausstehende Klicks werden erst nach allen UI-Events verarbeitet
                events.push(AppIntent::FrameStarted);
                self.process_events(std::mem::take(&mut events));

                self.paint_viewport(ui, rect);
            });

        ctx.request_repaint();
    }
}

impl SandboxApp {
    fn collect_window_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::show_debug_panel(ctx, &self.state));
        events.extend(ui::show_test_window(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn paint_viewport(&self, ui: &egui::Ui, rect: egui::Rect) {
        let scene = self.controller.build_render_scene(&self.state);

        match &self.gpu {
            Some(gpu) => {
                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: gpu.renderer.clone(),
                        render_data: render::WgpuRenderData { scene },
                        device: gpu.device.clone(),
                        queue: gpu.queue.clone(),
                    },
                );
                ui.painter().add(callback);
            }
            None => render::fallback::paint_scene(ui.painter(), rect, &scene),
        }
    }
}
