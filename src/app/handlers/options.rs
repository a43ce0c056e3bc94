//! Handler für Laden und Speichern der Optionen-Datei.

use crate::app::AppState;
use crate::shared::SandboxOptions;

/// Lädt die Optionen-Datei neu und übernimmt Transformation, Stil und Hintergrund.
///
/// Bereits vorhandene Objekte behalten ihre Farben und Positionen.
pub fn reload(state: &mut AppState) -> anyhow::Result<()> {
    let options = match SandboxOptions::try_load_from_file(&state.config_path) {
        Ok(options) => options,
        Err(e) => {
            state.ui.status_message = Some(format!("{e:#}"));
            return Err(e);
        }
    };

    apply(state, options);
    state.ui.status_message = None;
    log::info!("Optionen neu geladen aus: {}", state.config_path.display());
    Ok(())
}

/// Schreibt die aktuellen Optionen inkl. Hintergrundfarbe in die Optionen-Datei.
pub fn save(state: &mut AppState) -> anyhow::Result<()> {
    state.options.clear_color = state.view.clear_color;
    state.options.save_to_file(&state.config_path)?;
    state.ui.status_message = None;
    Ok(())
}

/// Übernimmt Optionen in Sitzung und View.
pub fn apply(state: &mut AppState, options: SandboxOptions) {
    state.session.set_transform(options.view_transform());
    state.session.set_style(options.session_style());
    state.view.clear_color = options.clear_color;
    state.options = options;
}
