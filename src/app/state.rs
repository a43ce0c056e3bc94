//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{ClickStack, Color, CurveSession};
use crate::shared::SandboxOptions;
use std::path::PathBuf;

/// View-bezogener Zustand (Viewport, Hintergrund)
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
    /// Hintergrundfarbe, mit der jeder Frame gelöscht wird
    pub clear_color: Color,
}

impl ViewState {
    /// Erstellt den View-Zustand aus den Optionen.
    pub fn from_options(options: &SandboxOptions) -> Self {
        Self {
            viewport_size: [options.window_edge_px, options.window_edge_px],
            clear_color: options.clear_color,
        }
    }
}

/// UI-bezogener Zustand (Fenster, Statusmeldungen)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob das zweite Test-Fenster ("Another Window") sichtbar ist
    pub show_test_window: bool,
    /// Letzte Statusmeldung (z.B. Fehler beim Laden der Optionen)
    pub status_message: Option<String>,
}

/// Gesamter Anwendungszustand
pub struct AppState {
    /// Objektliste mit Klick- und Kurvenlogik
    pub session: CurveSession,
    /// Ausstehende Klicks, zuletzt geklickt zuerst
    pub pending_clicks: ClickStack,
    /// View-Zustand
    pub view: ViewState,
    /// UI-Zustand
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: SandboxOptions,
    /// Pfad der Optionen-Datei
    pub config_path: PathBuf,
    /// Log aller ausgeführten Commands
    pub command_log: CommandLog,
    /// Anwendung soll im nächsten Frame beendet werden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen Zustand mit Standardoptionen.
    pub fn new() -> Self {
        Self::with_options(SandboxOptions::default(), SandboxOptions::config_path())
    }

    /// Erstellt einen Zustand mit geladenen Optionen.
    pub fn with_options(options: SandboxOptions, config_path: PathBuf) -> Self {
        Self {
            session: CurveSession::new(options.view_transform(), options.session_style()),
            pending_clicks: ClickStack::new(),
            view: ViewState::from_options(&options),
            ui: UiState::default(),
            options,
            config_path,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Anzahl der Objekte in der Sitzung.
    pub fn object_count(&self) -> usize {
        self.session.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
