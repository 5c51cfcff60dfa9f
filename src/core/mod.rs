//! Core-Domänentypen: Geometrie-Kernel und Spline-Modell.
//!
//! Frei von UI- und Render-Abhängigkeiten, damit sich alles ohne Fenster testen lässt.

pub mod geometry;
pub mod spline;

pub use geometry::{
    clamp_to_viewport, colinear_mirror, cubic_bezier, cubic_bezier_point, euclid_distance,
    within_square,
};
pub use spline::{
    BezierSegment, Handle, HandleKind, InsertionPolicy, Spline, SplineNode, SplineTarget,
    DEFAULT_HANDLE_OFFSET,
};
