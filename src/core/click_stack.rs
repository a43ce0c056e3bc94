//! Stapel ausstehender Klickpositionen (Pixel).

use glam::Vec2;

/// Ausstehende Klicks, zuletzt geklickt wird zuerst verarbeitet (LIFO).
///
/// Wird ausschließlich vom Input-Pfad befüllt und vom Frame-Schritt geleert.
#[derive(Debug, Clone, Default)]
pub struct ClickStack {
    pixels: Vec<Vec2>,
}

impl ClickStack {
    /// Erstellt einen leeren Stapel.
    pub fn new() -> Self {
        Self { pixels: Vec::new() }
    }

    /// Legt eine Klickposition oben auf den Stapel.
    pub fn push(&mut self, pixel: Vec2) {
        self.pixels.push(pixel);
    }

    /// Entnimmt die zuletzt abgelegte Klickposition.
    pub fn pop(&mut self) -> Option<Vec2> {
        self.pixels.pop()
    }

    /// Anzahl ausstehender Klicks.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Gibt `true` zurück, wenn keine Klicks ausstehen.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Leert den Stapel in LIFO-Reihenfolge.
    pub fn drain_lifo(&mut self) -> impl Iterator<Item = Vec2> + '_ {
        std::iter::from_fn(move || self.pixels.pop())
    }
}
