//! Core-Domänentypen: Transformation, Kurven-Sampler, Geometrie, Klick-Sitzung.

pub mod click_stack;
pub mod curve;
pub mod geometry;
pub mod session;
pub mod transform;

pub use click_stack::ClickStack;
pub use curve::{sample_curve, QuadraticCoefficients, SampleSteps, SAMPLE_STEP};
pub use geometry::{Color, Curve, Point, PrimitiveKind, SceneObject};
pub use session::{ClickOutcome, CurveSession, SessionPhase, SessionStyle};
pub use transform::ViewTransform;
