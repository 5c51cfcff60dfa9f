//! Handler für Spline-Editing: Nodes einfügen, Spline zurücksetzen.

use crate::app::AppState;
use crate::core::InsertionPolicy;

/// Fügt einen Node ein und hält einen aktiven Griff gültig.
pub fn add_node(state: &mut AppState, position: glam::Vec2) {
    let index = state.spline.add_node(position);

    // Einfügen an Index 0 verschiebt alle bisherigen Nodes um eins
    if index == 0 && state.spline.len() > 1 {
        state.grab.target = state.grab.target.map(|target| target.shifted(1));
    }

    log::debug!(
        "Node {} bei ({:.1}, {:.1}) eingefügt, {} Nodes gesamt",
        index,
        position.x,
        position.y,
        state.spline.len()
    );
}

/// Entfernt alle Nodes. Der Griff wird vorher gelöst.
pub fn reset(state: &mut AppState) {
    state.grab.release();
    let removed = state.spline.len();
    state.spline.clear();
    log::debug!("Spline zurückgesetzt ({} Nodes entfernt)", removed);
}

/// Setzt die Einfüge-Regel für Spline und Optionen.
pub fn set_insertion_policy(state: &mut AppState, policy: InsertionPolicy) {
    state.spline.policy = policy;
    state.options.insertion_policy = policy;
    log::info!("Einfüge-Regel: {:?}", policy);
}
