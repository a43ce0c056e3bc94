//! Quadratischer Kurven-Sampler.
//!
//! Die drei Eingabepunkte wirken als Polynom-Koeffizienten, nicht als
//! Bézier-Kontrollpunkte: `P(u) = p0 + p1·u + p2·u²`.

use glam::Vec2;

/// Schrittweite des Kurvenparameters `u`.
pub const SAMPLE_STEP: f64 = 0.01;

/// Koeffizienten `p0 + p1·u + p2·u²` einer quadratischen Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCoefficients {
    /// Konstanter Term (Kurvenstart bei `u = 0`)
    pub p0: Vec2,
    /// Linearer Term
    pub p1: Vec2,
    /// Quadratischer Term
    pub p2: Vec2,
}

impl QuadraticCoefficients {
    /// Erstellt die Koeffizienten aus drei Punkten.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2) -> Self {
        Self { p0, p1, p2 }
    }

    /// Verschiebt alle drei Koeffizienten um denselben Offset.
    ///
    /// Wirkt auf `p1`/`p2` genauso wie auf `p0`, daher ist die verschobene
    /// Kurve keine reine Translation der Originalkurve.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            p0: self.p0 + offset,
            p1: self.p1 + offset,
            p2: self.p2 + offset,
        }
    }

    /// Wertet das Polynom an `u` aus (Rechnung in f64).
    pub fn evaluate(&self, u: f64) -> Vec2 {
        let x = f64::from(self.p0.x) + f64::from(self.p1.x) * u + f64::from(self.p2.x) * u * u;
        let y = f64::from(self.p0.y) + f64::from(self.p1.y) * u + f64::from(self.p2.y) * u * u;
        Vec2::new(x as f32, y as f32)
    }

    /// Tastet die Kurve entlang [`SampleSteps`] ab.
    pub fn sample(&self) -> Vec<Vec2> {
        SampleSteps::new(SAMPLE_STEP).map(|u| self.evaluate(u)).collect()
    }
}

/// Parameterfolge `u = 0, step, 2·step, …` solange `u <= 1.0`.
///
/// `u` wird aufsummiert statt als `i·step` berechnet; die Rundungsdrift bestimmt,
/// ob der letzte Schritt 1.0 noch erreicht. Mit `0.01` liegt die Summe nach
/// 100 Schritten knapp über 1.0, es entstehen also 100 Samples.
#[derive(Debug, Clone)]
pub struct SampleSteps {
    next: f64,
    step: f64,
}

impl SampleSteps {
    /// Beginnt bei `u = 0.0` mit der gegebenen Schrittweite.
    pub fn new(step: f64) -> Self {
        Self { next: 0.0, step }
    }
}

impl Iterator for SampleSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next > 1.0 || self.step <= 0.0 {
            return None;
        }
        let u = self.next;
        self.next += self.step;
        Some(u)
    }
}

/// Tastet die Kurve zu `p0 + p1·u + p2·u²` ab.
pub fn sample_curve(p0: Vec2, p1: Vec2, p2: Vec2) -> Vec<Vec2> {
    QuadraticCoefficients::new(p0, p1, p2).sample()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn coefficients() -> QuadraticCoefficients {
        QuadraticCoefficients::new(
            Vec2::new(1.5, -2.0),
            Vec2::new(-4.0, 3.25),
            Vec2::new(2.0, 0.5),
        )
    }

    #[test]
    fn first_sample_is_exactly_p0() {
        let c = coefficients();
        let samples = c.sample();
        assert_eq!(samples[0], c.p0);
    }

    #[test]
    fn sample_count_is_about_one_hundred_and_one() {
        let samples = coefficients().sample();
        assert!(
            (100..=101).contains(&samples.len()),
            "unerwartete Sample-Anzahl: {}",
            samples.len()
        );
    }

    #[test]
    fn accumulated_steps_match_literal_loop() {
        let mut expected = Vec::new();
        let mut u = 0.0f64;
        while u <= 1.0 {
            expected.push(u);
            u += 0.01;
        }

        let steps: Vec<f64> = SampleSteps::new(SAMPLE_STEP).collect();
        assert_eq!(steps, expected);
        assert!(steps.iter().all(|&u| u <= 1.0));
    }

    #[test]
    fn evaluate_uses_polynomial_not_bezier_basis() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(-10.0, 10.0);
        let p2 = Vec2::new(10.0, 10.0);
        let c = QuadraticCoefficients::new(p0, p1, p2);

        // Polynom: p0 + p1 + p2 bei u = 1 (Bézier ergäbe p2)
        let end = c.evaluate(1.0);
        assert_abs_diff_eq!(end.x, 0.0);
        assert_abs_diff_eq!(end.y, 20.0);

        let mid = c.evaluate(0.5);
        assert_abs_diff_eq!(mid.x, -2.5);
        assert_abs_diff_eq!(mid.y, 7.5);
    }

    #[test]
    fn samples_follow_increasing_parameter() {
        let c = QuadraticCoefficients::new(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::ZERO);
        let samples = c.sample();
        assert!(samples.windows(2).all(|w| w[1].x > w[0].x));
    }

    #[test]
    fn translated_coefficients_shift_samples_by_offset_times_basis_sum() {
        let c = coefficients();
        let offset = Vec2::new(3.0, -3.0);
        let raw = c.sample();
        let shifted = c.translated(offset).sample();
        assert_eq!(raw.len(), shifted.len());

        for (u, (r, s)) in SampleSteps::new(SAMPLE_STEP).zip(raw.iter().zip(&shifted)) {
            let basis = (1.0 + u + u * u) as f32;
            assert_abs_diff_eq!(s.x, r.x + offset.x * basis, epsilon = 1e-4);
            assert_abs_diff_eq!(s.y, r.y + offset.y * basis, epsilon = 1e-4);
        }
    }

    #[test]
    fn sample_curve_matches_coefficient_sampling() {
        let c = coefficients();
        assert_eq!(sample_curve(c.p0, c.p1, c.p2), c.sample());
    }
}
