//! Top-Menü (File, Edit, View).

use crate::app::{AppIntent, AppState, InsertionPolicy};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit (Ctrl+Q)").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(!state.spline.is_empty(), egui::Button::new("Reset (R)"))
                    .clicked()
                {
                    events.push(AppIntent::ResetRequested);
                    ui.close();
                }

                ui.separator();

                let mut policy = state.spline.policy;
                let nearest = ui.radio_value(
                    &mut policy,
                    InsertionPolicy::NearestEnd,
                    "Insert at nearest end",
                );
                let back =
                    ui.radio_value(&mut policy, InsertionPolicy::AppendBack, "Always append");
                if nearest.changed() || back.changed() {
                    events.push(AppIntent::InsertionPolicyChanged { policy });
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                let mut show = state.options.show_construction_lines;
                if ui.checkbox(&mut show, "Construction lines (H)").changed() {
                    events.push(AppIntent::ToggleConstructionLinesRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
