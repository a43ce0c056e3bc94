//! Zeichenbare Objekte der Sitzung: Punkte und Kurven.

use glam::Vec2;

/// RGBA-Farbe im Bereich 0.0–1.0.
pub type Color = [f32; 4];

/// Primitiv-Art, mit der ein Objekt gezeichnet wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Einzelne Punkte
    Points,
    /// Zusammenhängender Linienzug
    LineStrip,
}

/// Ein per Klick (oder Verschiebung) erzeugter Punkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Position in Weltkoordinaten (z = 0)
    pub position: Vec2,
    /// Anzeigefarbe
    pub color: Color,
}

impl Point {
    /// Erstellt einen neuen Punkt.
    pub fn new(position: Vec2, color: Color) -> Self {
        Self { position, color }
    }
}

/// Abgetastete Kurve als Linienzug.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Samples in Reihenfolge steigender Parameter
    pub samples: Vec<Vec2>,
    /// Anzeigefarbe
    pub color: Color,
}

impl Curve {
    /// Erstellt eine Kurve aus fertigen Samples.
    pub fn new(samples: Vec<Vec2>, color: Color) -> Self {
        Self { samples, color }
    }
}

/// Eintrag der Objektliste einer Sitzung.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    /// Einzelner Punkt
    Point(Point),
    /// Abgetastete Kurve
    Curve(Curve),
}

impl SceneObject {
    /// Primitiv-Art für den Renderer.
    pub fn primitive(&self) -> PrimitiveKind {
        match self {
            SceneObject::Point(_) => PrimitiveKind::Points,
            SceneObject::Curve(_) => PrimitiveKind::LineStrip,
        }
    }

    /// Anzeigefarbe des Objekts.
    pub fn color(&self) -> Color {
        match self {
            SceneObject::Point(point) => point.color,
            SceneObject::Curve(curve) => curve.color,
        }
    }

    /// Alle Positionen des Objekts (ein Eintrag bei Punkten).
    pub fn positions(&self) -> &[Vec2] {
        match self {
            SceneObject::Point(point) => std::slice::from_ref(&point.position),
            SceneObject::Curve(curve) => &curve.samples,
        }
    }

    /// Gibt den Punkt zurück, falls das Objekt ein Punkt ist.
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            SceneObject::Point(point) => Some(point),
            SceneObject::Curve(_) => None,
        }
    }

    /// Gibt die Kurve zurück, falls das Objekt eine Kurve ist.
    pub fn as_curve(&self) -> Option<&Curve> {
        match self {
            SceneObject::Curve(curve) => Some(curve),
            SceneObject::Point(_) => None,
        }
    }
}
