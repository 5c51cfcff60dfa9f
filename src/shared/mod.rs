//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `main` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod launch;
pub mod options;
mod render_scene;

pub use launch::LaunchArgs;
pub use options::EditorOptions;
pub use render_scene::{HandleMarker, RenderScene};
