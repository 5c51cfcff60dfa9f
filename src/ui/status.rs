//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, SplineTarget};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Nodes: {} | Segmente: {}",
                state.node_count(),
                state.segment_count()
            ));

            ui.separator();

            ui.label(format!(
                "Viewport: {:.0}x{:.0}",
                state.view.viewport_size[0], state.view.viewport_size[1]
            ));

            ui.separator();

            match state.grab.target {
                Some(SplineTarget::Node(index)) => {
                    ui.label(format!("Gegriffen: Node {}", index));
                }
                Some(SplineTarget::Handle { node, kind }) => {
                    ui.label(format!("Gegriffen: {:?}-Handle von Node {}", kind, node));
                }
                None => {
                    ui.label("Klick: Node setzen | Ziehen: Node/Handle verschieben");
                }
            }
        });
    });
}
