//! Curve Sandbox Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    sample_curve, ClickStack, Curve, CurveSession, Point, PrimitiveKind, QuadraticCoefficients,
    SceneObject, SessionPhase, SessionStyle, ViewTransform,
};
pub use shared::{RenderScene, SandboxOptions};
