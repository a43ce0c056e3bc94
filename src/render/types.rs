//! Rendering-Typen und Konfiguration.

use crate::core::ViewTransform;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt die GPU-Ressourcen und View-Parameter, die jeder
/// Sub-Renderer bei jedem Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
    /// View-Projection inkl. Modell-Transformation
    pub view_proj: Mat4,
    /// Welteinheiten pro Bildschirm-Pixel
    pub world_per_pixel: f32,
}

/// Vertex für ein Quad (2D-Rechteck)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position im lokalen Quad-Raum [-1, 1]
    pub position: [f32; 2],
}

impl Vertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Vertex für Linienzug-Geometrie (Segment-Quads).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position im 2D-Raum
    pub position: [f32; 2],
    /// RGBA-Farbe der Linie
    pub color: [f32; 4],
}

impl LineVertex {
    /// Erstellt einen neuen LineVertex.
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Instanz-Daten für einen Punkt
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct PointInstance {
    /// Position im 2D-Raum (Weltkoordinaten)
    pub position: [f32; 2],
    /// Füllfarbe
    pub color: [f32; 4],
    /// Radius in Welteinheiten
    pub radius: f32,
    _padding: [f32; 1],
}

impl PointInstance {
    /// Erstellt eine neue Punkt-Instanz.
    pub fn new(position: [f32; 2], color: [f32; 4], radius: f32) -> Self {
        Self {
            position,
            color,
            radius,
            _padding: [0.0; 1],
        }
    }

    /// Beschreibt das Instanz-Layout für wgpu (PointInstance).
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Instance,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 2,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as eframe::wgpu::BufferAddress,
                    shader_location: 3,
                    format: eframe::wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Uniform-Buffer für View-Projektion
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
    /// x = Welteinheiten pro Pixel (Kantenglättung), Rest ungenutzt
    pub params: [f32; 4],
}

/// Berechnet die View-Projection-Matrix für das Welt-Quadrat.
///
/// Das Quadrat [-h, h]² füllt den gesamten Viewport (wie ein GL-Viewport über
/// den vollen Framebuffer); `model` wird vorangestellt.
pub(crate) fn build_view_projection(view: &ViewTransform, model: Mat4) -> Mat4 {
    let half = view.world_half_extent;
    let projection = Mat4::orthographic_rh(-half, half, -half, half, -1.0, 1.0);
    projection * model
}
