//! Handler für Viewport und Darstellung.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe (Klemm-Grenzen für Drags).
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    if state.view.viewport_size != size {
        log::debug!("Viewport-Größe: {:.0}x{:.0}", size[0], size[1]);
        state.view.viewport_size = size;
    }
}

/// Schaltet die gestrichelten Konstruktionslinien um.
pub fn toggle_construction_lines(state: &mut AppState) {
    state.options.show_construction_lines = !state.options.show_construction_lines;
}
