//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::{Color, SceneObject, ViewTransform};
use glam::Mat4;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Zeichenbare Objekte in Einfügereihenfolge (Arc für O(1)-Clone pro Frame)
    pub objects: Arc<Vec<SceneObject>>,
    /// Modell-Transformation (in der Sandbox die Einheitsmatrix)
    pub transform: Mat4,
    /// Pixel→Welt-Abbildung, bestimmt die Projektion
    pub view: ViewTransform,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Hintergrundfarbe, mit der vor dem Zeichnen gelöscht wird
    pub clear_color: Color,
    /// Punktgröße in Pixeln
    pub point_size_px: f32,
    /// Linienstärke in Pixeln
    pub line_width_px: f32,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_objects(&self) -> bool {
        !self.objects.is_empty()
    }

    /// Welteinheiten pro Bildschirm-Pixel bei der aktuellen Viewport-Höhe.
    pub fn world_per_pixel(&self) -> f32 {
        let height = self.viewport_size[1].max(1.0);
        2.0 * self.view.world_half_extent / height
    }
}
