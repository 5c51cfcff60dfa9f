//! Handler für Greifen, Ziehen und Loslassen von Nodes und Handles.

use crate::app::AppState;
use crate::core::{clamp_to_viewport, SplineTarget};
use glam::Vec2;

/// Greift einen Node oder ein Handle.
pub fn grab(state: &mut AppState, target: SplineTarget) {
    if state.spline.target_position(target).is_none() {
        log::warn!("Greifen ignoriert, Ziel existiert nicht: {:?}", target);
        return;
    }
    state.grab.target = Some(target);
}

/// Zieht das gegriffene Ziel auf die geklemmte Position.
///
/// Node: Handles wandern starr mit. Handle: Gegen-Handle wird gespiegelt.
pub fn drag_to(state: &mut AppState, position: Vec2) {
    let Some(target) = state.grab.target else {
        return;
    };
    let clamped = clamp_to_viewport(
        position,
        Vec2::from(state.view.viewport_size),
        state.options.clamp_inset,
    );
    if !state.spline.move_target(target, clamped) {
        log::warn!("Gegriffenes Ziel existiert nicht mehr: {:?}", target);
        state.grab.release();
    }
}

/// Löst den Griff. Bereits angewendete Verschiebungen bleiben bestehen.
pub fn release(state: &mut AppState) {
    state.grab.release();
}
