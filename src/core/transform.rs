//! Umrechnung Fenster-Pixel → Weltkoordinaten.

use glam::Vec2;

/// Abbildung des quadratischen Fensters auf ein um den Ursprung zentriertes Welt-Quadrat.
///
/// Pixel (0, 0) liegt oben links, die Welt-Y-Achse zeigt nach oben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Kantenlänge des Fensters in Pixeln (`W`)
    pub window_edge_px: f32,
    /// Halbe Kantenlänge des Welt-Quadrats
    pub world_half_extent: f32,
}

impl ViewTransform {
    /// Standard-Kantenlänge des Fensters in Pixeln.
    pub const DEFAULT_WINDOW_EDGE_PX: f32 = 749.0;
    /// Standard-Halbbreite der Welt (Welt spannt [-10, 10] auf).
    pub const DEFAULT_WORLD_HALF_EXTENT: f32 = 10.0;

    /// Erstellt eine Transformation für die gegebene Fensterkante.
    pub fn new(window_edge_px: f32, world_half_extent: f32) -> Self {
        Self {
            window_edge_px,
            world_half_extent,
        }
    }

    /// Welteinheiten pro Pixel (`20 / W` bei Standardwerten).
    pub fn world_per_pixel(&self) -> f64 {
        2.0 * f64::from(self.world_half_extent) / f64::from(self.window_edge_px)
    }

    /// Konvertiert eine Pixelposition in Weltkoordinaten.
    ///
    /// `x = px * (20/W) - 10`, `y = 10 - py * (20/W)`. Gerechnet wird in f64,
    /// gespeichert in f32.
    pub fn to_world(&self, pixel: Vec2) -> Vec2 {
        let factor = self.world_per_pixel();
        let half = f64::from(self.world_half_extent);
        let x = f64::from(pixel.x) * factor - half;
        let y = half - f64::from(pixel.y) * factor;
        Vec2::new(x as f32, y as f32)
    }

    /// Umkehrung von [`Self::to_world`], genutzt vom Fallback-Painter.
    pub fn to_pixel(&self, world: Vec2) -> Vec2 {
        let factor = self.world_per_pixel();
        let half = f64::from(self.world_half_extent);
        let x = (f64::from(world.x) + half) / factor;
        let y = (half - f64::from(world.y)) / factor;
        Vec2::new(x as f32, y as f32)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW_EDGE_PX, Self::DEFAULT_WORLD_HALF_EXTENT)
    }
}
