//! Vertex-Generierung für Linienzüge und Punkt-Instanzen.

use super::types::{LineVertex, PointInstance};
use crate::core::{Color, SceneObject};
use glam::Vec2;

/// Erzeugt ein Quad (2 Dreiecke) für ein Liniensegment mit gegebener Breite.
pub(super) fn push_line_quad(
    vertices: &mut Vec<LineVertex>,
    start: Vec2,
    end: Vec2,
    thickness: f32,
    color: Color,
) {
    let delta = end - start;
    if delta.length_squared() < f32::EPSILON * f32::EPSILON {
        return;
    }
    let dir = delta.normalize();
    let perp = Vec2::new(-dir.y, dir.x) * (thickness * 0.5);

    let a = start + perp;
    let b = start - perp;
    let c = end + perp;
    let d = end - perp;

    vertices.push(LineVertex::new(a.to_array(), color));
    vertices.push(LineVertex::new(b.to_array(), color));
    vertices.push(LineVertex::new(c.to_array(), color));
    vertices.push(LineVertex::new(b.to_array(), color));
    vertices.push(LineVertex::new(d.to_array(), color));
    vertices.push(LineVertex::new(c.to_array(), color));
}

/// Hängt alle Segmente eines Linienzugs an.
pub(super) fn push_line_strip(
    vertices: &mut Vec<LineVertex>,
    samples: &[Vec2],
    thickness: f32,
    color: Color,
) {
    for segment in samples.windows(2) {
        push_line_quad(vertices, segment[0], segment[1], thickness, color);
    }
}

/// Sammelt Linien-Vertices aller Kurven der Szene.
pub(super) fn collect_line_vertices(
    vertices: &mut Vec<LineVertex>,
    objects: &[SceneObject],
    thickness: f32,
) {
    for curve in objects.iter().filter_map(SceneObject::as_curve) {
        push_line_strip(vertices, &curve.samples, thickness, curve.color);
    }
}

/// Sammelt Punkt-Instanzen aller Punkte der Szene.
pub(super) fn collect_point_instances(
    instances: &mut Vec<PointInstance>,
    objects: &[SceneObject],
    radius: f32,
) {
    for point in objects.iter().filter_map(SceneObject::as_point) {
        instances.push(PointInstance::new(
            point.position.to_array(),
            point.color,
            radius,
        ));
    }
}
