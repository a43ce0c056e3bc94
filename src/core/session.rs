//! Klick-Sitzung: Objektliste mit Kapazitätsgrenze und Kurven-Trigger.

use super::click_stack::ClickStack;
use super::curve::QuadraticCoefficients;
use super::geometry::{Color, Curve, Point, SceneObject};
use super::transform::ViewTransform;
use glam::Vec2;
use std::sync::Arc;

/// Farben und Verschiebung für neu erzeugte Objekte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStyle {
    /// Farbe geklickter Punkte
    pub point_color: Color,
    /// Farbe der Kurve durch die geklickten Punkte
    pub curve_color: Color,
    /// Farbe der verschobenen Punkte
    pub translated_point_color: Color,
    /// Farbe der Kurve durch die verschobenen Punkte
    pub translated_curve_color: Color,
    /// Verschiebung der Kopie in Welteinheiten
    pub translation_offset: Vec2,
}

impl Default for SessionStyle {
    fn default() -> Self {
        Self {
            point_color: [1.0, 0.0, 0.0, 1.0],
            curve_color: [0.0, 1.0, 0.0, 1.0],
            translated_point_color: [1.0, 1.0, 0.0, 1.0],
            translated_curve_color: [0.0, 1.0, 1.0, 1.0],
            translation_offset: Vec2::new(3.0, -3.0),
        }
    }
}

/// Phase der Sitzung, abgeleitet aus der Länge der Objektliste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Keine Objekte
    Idle,
    /// 1–2 Einträge, wartet auf weitere Klicks
    Accumulating,
    /// Genau 3 Einträge, der nächste Frame-Check erzeugt Kurven
    Ready,
    /// Mehr als 3 Einträge; erst ein Reset bei voller Liste beginnt neu
    Displaying,
}

/// Ergebnis eines verarbeiteten Klicks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickOutcome {
    /// Weltposition des neuen Punkts
    pub world_pos: Vec2,
    /// Die volle Liste wurde vor dem Einfügen geleert
    pub reset: bool,
}

/// Objektliste einer Sitzung mit Klick- und Kurvenlogik.
#[derive(Debug, Clone)]
pub struct CurveSession {
    objects: Arc<Vec<SceneObject>>,
    transform: ViewTransform,
    style: SessionStyle,
}

impl CurveSession {
    /// Maximale Anzahl an Objekten; bei Erreichen leert der nächste Klick die Liste.
    pub const CAPACITY: usize = 8;
    /// Exakte Listenlänge, bei der Kurven erzeugt werden.
    pub const CURVE_TRIGGER_LEN: usize = 3;

    /// Erstellt eine leere Sitzung.
    pub fn new(transform: ViewTransform, style: SessionStyle) -> Self {
        Self {
            objects: Arc::new(Vec::new()),
            transform,
            style,
        }
    }

    /// Read-only Sicht auf alle Objekte in Einfügereihenfolge.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Geteilte Objektliste (O(1)-Clone für die RenderScene).
    pub fn shared_objects(&self) -> Arc<Vec<SceneObject>> {
        Arc::clone(&self.objects)
    }

    /// Anzahl der Objekte.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Gibt `true` zurück, wenn die Liste leer ist.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Aktuelle Phase der Sitzung.
    pub fn phase(&self) -> SessionPhase {
        match self.objects.len() {
            0 => SessionPhase::Idle,
            1 | 2 => SessionPhase::Accumulating,
            Self::CURVE_TRIGGER_LEN => SessionPhase::Ready,
            _ => SessionPhase::Displaying,
        }
    }

    /// Aktive Pixel→Welt-Transformation.
    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    /// Aktiver Stil für neue Objekte.
    pub fn style(&self) -> &SessionStyle {
        &self.style
    }

    /// Ersetzt die Transformation (wirkt nur auf künftige Klicks).
    pub fn set_transform(&mut self, transform: ViewTransform) {
        self.transform = transform;
    }

    /// Ersetzt den Stil (wirkt nur auf künftige Objekte).
    pub fn set_style(&mut self, style: SessionStyle) {
        self.style = style;
    }

    /// Entfernt alle Objekte.
    pub fn clear(&mut self) {
        self.objects_mut().clear();
    }

    /// Verarbeitet einen Klick: volle Liste leeren, dann Punkt einfügen.
    ///
    /// Leeren und Einfügen passieren im selben Schritt, die Liste ist danach nie leer.
    pub fn insert_click(&mut self, pixel: Vec2) -> ClickOutcome {
        let reset = self.objects.len() == Self::CAPACITY;
        let world_pos = self.transform.to_world(pixel);
        let color = self.style.point_color;

        let objects = self.objects_mut();
        if reset {
            objects.clear();
        }
        objects.push(SceneObject::Point(Point::new(world_pos, color)));

        ClickOutcome { world_pos, reset }
    }

    /// Leert den Klick-Stapel (zuletzt geklickt zuerst) und fügt je einen Punkt ein.
    ///
    /// Gibt die Anzahl verarbeiteter Klicks zurück.
    pub fn process_clicks(&mut self, clicks: &mut ClickStack) -> usize {
        let mut processed = 0;
        for pixel in clicks.drain_lifo() {
            let outcome = self.insert_click(pixel);
            if outcome.reset {
                log::info!("Objektliste voll ({}), Sitzung neu gestartet", Self::CAPACITY);
            }
            log::debug!(
                "Klick ({:.1}, {:.1}) px → Punkt ({:.3}, {:.3})",
                pixel.x,
                pixel.y,
                outcome.world_pos.x,
                outcome.world_pos.y
            );
            processed += 1;
        }
        processed
    }

    /// Frame-Check: Bei exakt drei Punkten Kurve, verschobene Punkte und
    /// verschobene Kurve anhängen.
    ///
    /// Reihenfolge der neuen Einträge: Kurve, drei verschobene Punkte,
    /// verschobene Kurve. Gibt `true` zurück, wenn Einträge angehängt wurden.
    pub fn generate_curves_if_ready(&mut self) -> bool {
        if self.objects.len() != Self::CURVE_TRIGGER_LEN {
            return false;
        }

        let Some(coefficients) = self.trigger_coefficients() else {
            log::debug!("Drei Einträge, aber nicht alle sind Punkte – keine Kurve");
            return false;
        };

        let style = self.style;
        let translated = coefficients.translated(style.translation_offset);

        let raw_curve = Curve::new(coefficients.sample(), style.curve_color);
        let translated_curve = Curve::new(translated.sample(), style.translated_curve_color);

        let objects = self.objects_mut();
        objects.push(SceneObject::Curve(raw_curve));
        for position in [translated.p0, translated.p1, translated.p2] {
            objects.push(SceneObject::Point(Point::new(
                position,
                style.translated_point_color,
            )));
        }
        objects.push(SceneObject::Curve(translated_curve));

        log::debug!("Kurven erzeugt, {} Objekte", self.objects.len());
        true
    }

    fn trigger_coefficients(&self) -> Option<QuadraticCoefficients> {
        match self.objects.as_slice() {
            [SceneObject::Point(p0), SceneObject::Point(p1), SceneObject::Point(p2)] => Some(
                QuadraticCoefficients::new(p0.position, p1.position, p2.position),
            ),
            _ => None,
        }
    }

    /// Mutable Objektliste (CoW: klont nur, wenn eine RenderScene noch referenziert).
    #[inline]
    fn objects_mut(&mut self) -> &mut Vec<SceneObject> {
        Arc::make_mut(&mut self.objects)
    }
}

impl Default for CurveSession {
    fn default() -> Self {
        Self::new(ViewTransform::default(), SessionStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curve::SAMPLE_STEP;
    use crate::core::geometry::PrimitiveKind;
    use approx::assert_abs_diff_eq;

    fn click(session: &mut CurveSession, x: f32, y: f32) -> ClickOutcome {
        session.insert_click(Vec2::new(x, y))
    }

    fn session_with_three_points() -> CurveSession {
        let mut session = CurveSession::default();
        click(&mut session, 374.0, 374.0);
        click(&mut session, 0.0, 0.0);
        click(&mut session, 749.0, 0.0);
        session
    }

    #[test]
    fn phases_follow_list_length() {
        let mut session = CurveSession::default();
        assert_eq!(session.phase(), SessionPhase::Idle);
        click(&mut session, 10.0, 10.0);
        assert_eq!(session.phase(), SessionPhase::Accumulating);
        click(&mut session, 20.0, 20.0);
        assert_eq!(session.phase(), SessionPhase::Accumulating);
        click(&mut session, 30.0, 30.0);
        assert_eq!(session.phase(), SessionPhase::Ready);
        session.generate_curves_if_ready();
        assert_eq!(session.phase(), SessionPhase::Displaying);
    }

    #[test]
    fn frame_check_with_three_points_appends_five_entries() {
        let mut session = session_with_three_points();

        assert!(session.generate_curves_if_ready());
        assert_eq!(session.len(), CurveSession::CAPACITY);

        let kinds: Vec<PrimitiveKind> = session.objects().iter().map(|o| o.primitive()).collect();
        assert_eq!(
            kinds,
            vec![
                PrimitiveKind::Points,
                PrimitiveKind::Points,
                PrimitiveKind::Points,
                PrimitiveKind::LineStrip,
                PrimitiveKind::Points,
                PrimitiveKind::Points,
                PrimitiveKind::Points,
                PrimitiveKind::LineStrip,
            ]
        );
    }

    #[test]
    fn second_frame_check_appends_nothing() {
        let mut session = session_with_three_points();
        assert!(session.generate_curves_if_ready());
        assert!(!session.generate_curves_if_ready());
        assert_eq!(session.len(), 8);
    }

    #[test]
    fn frame_check_requires_exactly_three_entries() {
        let mut session = CurveSession::default();
        for i in 0..4 {
            click(&mut session, i as f32 * 10.0, 0.0);
        }
        assert!(!session.generate_curves_if_ready());
        assert_eq!(session.len(), 4);

        let mut session = CurveSession::default();
        click(&mut session, 0.0, 0.0);
        click(&mut session, 1.0, 0.0);
        assert!(!session.generate_curves_if_ready());
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn click_on_full_list_clears_then_inserts_atomically() {
        let mut session = session_with_three_points();
        session.generate_curves_if_ready();
        assert_eq!(session.len(), 8);

        let outcome = click(&mut session, 100.0, 100.0);
        assert!(outcome.reset);
        assert_eq!(session.len(), 1);
        assert!(session.objects()[0].as_point().is_some());
    }

    #[test]
    fn capacity_reset_also_discards_curves_and_translated_points() {
        // Auffällig: der Reset wirft auch Kurven und verschobene Punkte weg.
        let mut session = session_with_three_points();
        session.generate_curves_if_ready();

        click(&mut session, 1.0, 1.0);
        assert!(session.objects().iter().all(|o| o.as_curve().is_none()));
    }

    #[test]
    fn list_length_never_exceeds_capacity() {
        let mut session = CurveSession::default();
        for i in 0..50 {
            click(&mut session, (i * 13 % 749) as f32, (i * 7 % 749) as f32);
            assert!(session.len() <= CurveSession::CAPACITY);
            session.generate_curves_if_ready();
            assert!(session.len() <= CurveSession::CAPACITY);
        }
    }

    #[test]
    fn click_then_frame_cycle_restarts_every_third_click_after_first_cycle() {
        let mut session = CurveSession::default();
        let mut curve_frames = Vec::new();
        for i in 0..11 {
            click(&mut session, i as f32, i as f32);
            if session.generate_curves_if_ready() {
                curve_frames.push(i);
            }
        }
        // Klick 4 leert die volle Liste und ist zugleich der erste Punkt der neuen Runde
        assert_eq!(curve_frames, vec![2, 5, 8]);
    }

    #[test]
    fn end_to_end_points_and_curve_values() {
        let mut session = session_with_three_points();
        session.generate_curves_if_ready();

        let points: Vec<Vec2> = session.objects()[..3]
            .iter()
            .filter_map(|o| o.as_point().map(|p| p.position))
            .collect();
        assert_abs_diff_eq!(points[0].x, 0.0, epsilon = 0.02);
        assert_abs_diff_eq!(points[0].y, 0.0, epsilon = 0.02);
        assert_abs_diff_eq!(points[1].x, -10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(points[1].y, 10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(points[2].x, 10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(points[2].y, 10.0, epsilon = 1e-5);

        let curve = session.objects()[3].as_curve().expect("Kurve an Index 3");
        assert_eq!(curve.samples[0], points[0]);

        let end = QuadraticCoefficients::new(points[0], points[1], points[2]).evaluate(1.0);
        assert_abs_diff_eq!(end.x, 0.0, epsilon = 0.05);
        assert_abs_diff_eq!(end.y, 20.0, epsilon = 0.05);
    }

    #[test]
    fn translated_entries_use_offset_and_distinct_colors() {
        let mut session = session_with_three_points();
        session.generate_curves_if_ready();
        let style = SessionStyle::default();
        let objects = session.objects();

        for i in 0..3 {
            let original = objects[i].as_point().expect("Punkt");
            let shifted = objects[4 + i].as_point().expect("verschobener Punkt");
            assert_eq!(
                shifted.position,
                original.position + style.translation_offset
            );
            assert_eq!(shifted.color, style.translated_point_color);
        }

        let raw = objects[3].as_curve().expect("Kurve");
        let translated = objects[7].as_curve().expect("verschobene Kurve");
        assert_eq!(raw.color, style.curve_color);
        assert_eq!(translated.color, style.translated_curve_color);
        assert_ne!(raw.color, translated.color);
    }

    #[test]
    fn translated_curve_is_not_a_rigid_shift_of_raw_curve() {
        let mut session = session_with_three_points();
        session.generate_curves_if_ready();
        let offset = SessionStyle::default().translation_offset;
        let raw = session.objects()[3].as_curve().expect("Kurve");
        let translated = session.objects()[7].as_curve().expect("verschobene Kurve");

        // Bei u = 0 exakt um den Offset verschoben
        assert_eq!(translated.samples[0], raw.samples[0] + offset);

        // Danach wächst die Abweichung mit (1 + u + u²)
        let u = 50.0 * SAMPLE_STEP;
        let basis = (1.0 + u + u * u) as f32;
        let delta = translated.samples[50] - raw.samples[50];
        assert_abs_diff_eq!(delta.x, offset.x * basis, epsilon = 1e-3);
        assert_abs_diff_eq!(delta.y, offset.y * basis, epsilon = 1e-3);
    }

    #[test]
    fn process_clicks_consumes_stack_lifo() {
        let mut session = CurveSession::default();
        let mut clicks = ClickStack::new();
        clicks.push(Vec2::new(0.0, 0.0));
        clicks.push(Vec2::new(749.0, 0.0));

        assert_eq!(session.process_clicks(&mut clicks), 2);
        assert!(clicks.is_empty());

        let first = session.objects()[0].as_point().expect("Punkt");
        assert_abs_diff_eq!(first.position.x, 10.0, epsilon = 1e-5);
    }

    #[test]
    fn clear_empties_list() {
        let mut session = session_with_three_points();
        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn shared_objects_snapshot_survives_mutation() {
        let mut session = session_with_three_points();
        let snapshot = session.shared_objects();
        session.clear();
        assert_eq!(snapshot.len(), 3);
        assert!(session.is_empty());
    }
}
