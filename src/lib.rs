//! Bézier Spline Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, GrabState, ViewState};
pub use core::{
    BezierSegment, Handle, HandleKind, InsertionPolicy, Spline, SplineNode, SplineTarget,
};
pub use shared::{EditorOptions, HandleMarker, LaunchArgs, RenderScene};
