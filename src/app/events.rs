//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::Color;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Linksklick in den Viewport (Pixel relativ zur linken oberen Ecke)
    ViewportClicked { pixel: glam::Vec2 },
    /// Beginn des Frame-Schritts: ausstehende Klicks verarbeiten, Kurven prüfen
    FrameStarted,
    /// "Clean"-Button: alle Objekte entfernen
    CleanRequested,
    /// Hintergrundfarbe im Farbwähler geändert
    ClearColorChanged { color: Color },
    /// Test-Fenster ein-/ausblenden
    TestWindowToggled { visible: bool },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Anwendung beenden
    ExitRequested,
    /// Optionen-Datei neu laden
    OptionsReloadRequested,
    /// Aktuelle Optionen (inkl. Hintergrundfarbe) speichern
    OptionsSaveRequested,
}

/// Mutierende Commands, die der Controller auf den AppState anwendet.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Klickposition auf den Klick-Stapel legen
    PushPendingClick { pixel: glam::Vec2 },
    /// Klick-Stapel leeren und je einen Punkt einfügen (LIFO)
    ProcessPendingClicks,
    /// Bei exakt drei Einträgen Kurven erzeugen
    GenerateCurvesIfReady,
    /// Objektliste leeren
    ClearObjects,
    /// Hintergrundfarbe setzen
    SetClearColor { color: Color },
    /// Sichtbarkeit des Test-Fensters setzen
    SetTestWindowVisible { visible: bool },
    /// Viewport-Größe übernehmen
    SetViewportSize { size: [f32; 2] },
    /// Anwendung im nächsten Frame schließen
    RequestExit,
    /// Optionen aus der Konfigurationsdatei neu laden
    ReloadOptions,
    /// Optionen in die Konfigurationsdatei schreiben
    SaveOptions,
}
