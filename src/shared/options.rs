//! Zentrale Konfiguration der Curve-Sandbox.
//!
//! `SandboxOptions` enthält alle über die TOML-Datei änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Color, SessionStyle, ViewTransform};
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Fenster & Welt ──────────────────────────────────────────────────

/// Kantenlänge des quadratischen Fensters in Pixeln (`W`).
pub const WINDOW_EDGE_PX: f32 = 749.0;
/// Halbe Kantenlänge des sichtbaren Welt-Quadrats.
pub const WORLD_HALF_EXTENT: f32 = 10.0;
/// Verschiebung der Kurvenkopie in Welteinheiten.
pub const TRANSLATION_OFFSET: [f32; 2] = [3.0, -3.0];

// ── Darstellung ─────────────────────────────────────────────────────

/// Punktgröße in Pixeln.
pub const POINT_SIZE_PX: f32 = 5.0;
/// Linienstärke der Kurven in Pixeln.
pub const LINE_WIDTH_PX: f32 = 1.5;
/// Farbe geklickter Punkte (RGBA: Rot).
pub const POINT_COLOR: Color = [1.0, 0.0, 0.0, 1.0];
/// Farbe der Kurve (RGBA: Grün).
pub const CURVE_COLOR: Color = [0.0, 1.0, 0.0, 1.0];
/// Farbe verschobener Punkte (RGBA: Gelb).
pub const TRANSLATED_POINT_COLOR: Color = [1.0, 1.0, 0.0, 1.0];
/// Farbe der verschobenen Kurve (RGBA: Cyan).
pub const TRANSLATED_CURVE_COLOR: Color = [0.0, 1.0, 1.0, 1.0];
/// Hintergrundfarbe (RGBA: Graublau).
pub const CLEAR_COLOR: Color = [0.45, 0.55, 0.60, 1.0];

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "curve_sandbox.toml";

/// Alle konfigurierbaren Sandbox-Optionen.
/// Fehlende Felder in der TOML-Datei fallen auf die Standardwerte zurück.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxOptions {
    // ── Fenster & Welt ──────────────────────────────────────────
    /// Fensterkante in Pixeln, Basis der Pixel→Welt-Umrechnung
    pub window_edge_px: f32,
    /// Halbe Kantenlänge des Welt-Quadrats
    pub world_half_extent: f32,
    /// Verschiebung der Kurvenkopie (x, y)
    pub translation_offset: [f32; 2],

    // ── Darstellung ─────────────────────────────────────────────
    /// Punktgröße in Pixeln
    pub point_size_px: f32,
    /// Linienstärke in Pixeln
    pub line_width_px: f32,
    /// Farbe geklickter Punkte
    pub point_color: Color,
    /// Farbe der Kurve
    pub curve_color: Color,
    /// Farbe verschobener Punkte
    pub translated_point_color: Color,
    /// Farbe der verschobenen Kurve
    pub translated_curve_color: Color,
    /// Hintergrundfarbe beim Start
    pub clear_color: Color,
}

impl Default for SandboxOptions {
    fn default() -> Self {
        Self {
            window_edge_px: WINDOW_EDGE_PX,
            world_half_extent: WORLD_HALF_EXTENT,
            translation_offset: TRANSLATION_OFFSET,

            point_size_px: POINT_SIZE_PX,
            line_width_px: LINE_WIDTH_PX,
            point_color: POINT_COLOR,
            curve_color: CURVE_COLOR,
            translated_point_color: TRANSLATED_POINT_COLOR,
            translated_curve_color: TRANSLATED_CURVE_COLOR,
            clear_color: CLEAR_COLOR,
        }
    }
}

impl SandboxOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Lädt Optionen strikt: Lese- und Parse-Fehler werden propagiert.
    pub fn try_load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen-Datei nicht lesbar: {}", path.display()))?;
        let opts = toml::from_str(&content)
            .with_context(|| format!("Optionen-Datei fehlerhaft: {}", path.display()))?;
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen konnten nicht gespeichert werden: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_sandbox"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Pixel→Welt-Transformation aus den Fensteroptionen.
    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform::new(self.window_edge_px, self.world_half_extent)
    }

    /// Stil für neu erzeugte Punkte und Kurven.
    pub fn session_style(&self) -> SessionStyle {
        SessionStyle {
            point_color: self.point_color,
            curve_color: self.curve_color,
            translated_point_color: self.translated_point_color,
            translated_curve_color: self.translated_curve_color,
            translation_offset: glam::Vec2::from(self.translation_offset),
        }
    }
}
