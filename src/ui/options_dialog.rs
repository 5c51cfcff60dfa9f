//! Optionen-Dialog für Spline-Regeln, Interaktion und Darstellung.

use crate::app::{AppIntent, AppState, InsertionPolicy};
use crate::shared::options::{
    CLAMP_INSET_RANGE, CURVE_SEGMENTS_RANGE, CURVE_WIDTH_RANGE, GRAB_HALF_WIDTH_RANGE,
    HANDLE_OFFSET_RANGE, POINT_SIZE_RANGE,
};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.collapsing("Spline", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Handle-Versatz:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.handle_offset)
                                .range(HANDLE_OFFSET_RANGE)
                                .speed(1.0),
                        )
                        .changed();
                });
                ui.label("Neue Nodes:");
                changed |= ui
                    .radio_value(
                        &mut opts.insertion_policy,
                        InsertionPolicy::NearestEnd,
                        "am näheren Ende",
                    )
                    .changed();
                changed |= ui
                    .radio_value(
                        &mut opts.insertion_policy,
                        InsertionPolicy::AppendBack,
                        "immer hinten",
                    )
                    .changed();
            });

            ui.collapsing("Interaktion", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Greif-Halbbreite:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.grab_half_width)
                                .range(GRAB_HALF_WIDTH_RANGE)
                                .speed(0.5),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Randabstand:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.clamp_inset)
                                .range(CLAMP_INSET_RANGE)
                                .speed(0.5),
                        )
                        .changed();
                });
            });

            ui.collapsing("Darstellung", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Abtastschritte:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.curve_segments)
                                .range(CURVE_SEGMENTS_RANGE),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Kurvenbreite:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.curve_width_px)
                                .range(CURVE_WIDTH_RANGE)
                                .speed(0.1),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Punktgröße:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.point_size_px)
                                .range(POINT_SIZE_RANGE)
                                .speed(0.5),
                        )
                        .changed();
                });
                changed |= ui
                    .checkbox(&mut opts.show_construction_lines, "Konstruktionslinien")
                    .changed();
                changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                changed |= color_edit(ui, "Kurve:", &mut opts.curve_color);
                changed |= color_edit(ui, "Nodes:", &mut opts.node_color);
                changed |= color_edit(ui, "Handles:", &mut opts.handle_color);
                changed |= color_edit(ui, "Hilfslinien:", &mut opts.construction_line_color);
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = crate::render::color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = crate::render::rgba_from_color32(c);
            changed = true;
        }
    });
    changed
}
