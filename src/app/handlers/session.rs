//! Handler für Klick-Stapel und Objektliste.

use crate::app::AppState;

/// Legt einen Klick auf den Stapel ausstehender Klicks.
pub fn push_click(state: &mut AppState, pixel: glam::Vec2) {
    state.pending_clicks.push(pixel);
}

/// Verarbeitet alle ausstehenden Klicks, zuletzt geklickt zuerst.
pub fn process_pending_clicks(state: &mut AppState) {
    let processed = state.session.process_clicks(&mut state.pending_clicks);
    if processed > 0 {
        log::debug!(
            "{} Klick(s) verarbeitet, {} Objekte",
            processed,
            state.session.len()
        );
    }
}

/// Frame-Check: erzeugt Kurven, wenn genau drei Einträge vorhanden sind.
pub fn generate_curves_if_ready(state: &mut AppState) {
    if state.session.generate_curves_if_ready() {
        log::info!("Kurve und verschobene Kopie erzeugt");
    }
}

/// Entfernt alle Objekte der Sitzung.
pub fn clear_objects(state: &mut AppState) {
    let removed = state.session.len();
    state.session.clear();
    log::info!("{} Objekt(e) entfernt", removed);
}
