//! Zeichnen der Szene mit dem egui-Painter, wenn kein wgpu-Zustand verfügbar ist.

use crate::core::{Color, SceneObject};
use crate::shared::RenderScene;
use eframe::egui;

/// Konvertiert eine RGBA-Farbe (0.0–1.0) in `egui::Color32`.
pub fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

/// Zeichnet alle Objekte der Szene in `rect`.
///
/// Das Welt-Quadrat wird wie beim GPU-Renderer auf das ganze Rechteck gestreckt.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let edge = scene.view.window_edge_px.max(1.0);
    let scale = egui::vec2(rect.width() / edge, rect.height() / edge);
    let to_screen = |world: glam::Vec2| {
        let model = scene.transform.transform_point3(world.extend(0.0));
        let pixel = scene.view.to_pixel(model.truncate());
        egui::pos2(rect.min.x + pixel.x * scale.x, rect.min.y + pixel.y * scale.y)
    };

    for object in scene.objects.iter() {
        let color = to_color32(object.color());
        match object {
            SceneObject::Curve(curve) => {
                let points: Vec<egui::Pos2> = curve.samples.iter().map(|&p| to_screen(p)).collect();
                painter.add(egui::Shape::line(
                    points,
                    egui::Stroke::new(scene.line_width_px, color),
                ));
            }
            SceneObject::Point(point) => {
                painter.circle_filled(to_screen(point.position), scene.point_size_px * 0.5, color);
            }
        }
    }
}
