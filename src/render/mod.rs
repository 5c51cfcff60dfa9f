//! Zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Reiner Präsentations-Klebstoff: keine Mutation, keine Logik außer
//! Koordinaten-Umrechnung (Viewport-Raum unten links → Screen oben links).

pub use crate::shared::RenderScene;

use crate::core::HandleKind;
use eframe::egui;
use glam::Vec2;

/// Rechnet eine Viewport-Position (Ursprung unten links) in Screen-Koordinaten um.
pub fn viewport_to_screen(pos: Vec2, rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(rect.min.x + pos.x, rect.max.y - pos.y)
}

/// Konvertiert eine RGBA-Farbe [0, 1] nach `Color32`.
pub fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Konvertiert eine `Color32` zurück nach RGBA [0, 1] (nicht vormultipliziert).
pub fn rgba_from_color32(color: egui::Color32) -> [f32; 4] {
    color.to_srgba_unmultiplied().map(|c| c as f32 / 255.0)
}

/// Zeichnet Hintergrund, Konstruktionslinien, Kurve, Handles und Nodes.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let options = &scene.options;
    painter.rect_filled(rect, 0.0, color32(options.background_color));

    let to_screen = |p: Vec2| viewport_to_screen(p, rect);

    // Konstruktionslinien (gestrichelt) zuerst, damit die Kurve darüber liegt
    let dash_stroke = egui::Stroke::new(1.0, color32(options.construction_line_color));
    for &[from, to] in &scene.construction_lines {
        painter.extend(egui::Shape::dashed_line(
            &[to_screen(from), to_screen(to)],
            dash_stroke,
            options.dash_length_px,
            options.dash_gap_px,
        ));
    }

    let curve_stroke = egui::Stroke::new(options.curve_width_px, color32(options.curve_color));
    for polyline in &scene.curves {
        let points: Vec<egui::Pos2> = polyline.iter().map(|&p| to_screen(p)).collect();
        painter.add(egui::Shape::line(points, curve_stroke));
    }

    let point_size = egui::vec2(options.point_size_px, options.point_size_px);
    let handle_color = color32(options.handle_color);
    for handle in &scene.handles {
        let marker = egui::Rect::from_center_size(to_screen(handle.position), point_size);
        match handle.kind {
            HandleKind::Primary => {
                painter.rect_filled(marker, 0.0, handle_color);
            }
            // Secondary hohl, damit die Seiten unterscheidbar bleiben
            HandleKind::Secondary => {
                painter.rect_stroke(
                    marker,
                    0.0,
                    egui::Stroke::new(2.0, handle_color),
                    egui::StrokeKind::Inside,
                );
            }
        }
    }

    let node_color = color32(options.node_color);
    for &node in &scene.nodes {
        painter.rect_filled(
            egui::Rect::from_center_size(to_screen(node), point_size),
            0.0,
            node_color,
        );
    }

    if let Some(grabbed) = scene.grabbed {
        painter.rect_stroke(
            egui::Rect::from_center_size(to_screen(grabbed), point_size),
            0.0,
            egui::Stroke::new(2.0, color32(options.grabbed_color)),
            egui::StrokeKind::Outside,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};
    use approx::assert_relative_eq;

    #[test]
    fn test_viewport_to_screen_flips_y() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(800.0, 600.0));

        assert_eq!(viewport_to_screen(Vec2::ZERO, rect), egui::pos2(10.0, 620.0));
        assert_eq!(
            viewport_to_screen(Vec2::new(800.0, 600.0), rect),
            egui::pos2(810.0, 20.0)
        );
    }

    #[test]
    fn test_color32_conversion() {
        assert_eq!(color32([1.0, 0.0, 0.0, 1.0]), egui::Color32::RED);
        assert_eq!(color32([2.0, -1.0, 0.0, 1.0]), egui::Color32::RED);
    }

    #[test]
    fn test_translucent_color_survives_conversion_back() {
        let rgba = [1.0, 0.3, 0.0, 0.5];
        let back = rgba_from_color32(color32(rgba));

        for (expected, actual) in rgba.iter().zip(back.iter()) {
            assert_relative_eq!(*expected, *actual, epsilon = 0.02);
        }
    }

    #[test]
    fn test_paint_scene_emits_shapes_for_all_points() {
        let mut state = AppState::new();
        for position in [
            Vec2::new(100.0, 100.0),
            Vec2::new(300.0, 100.0),
            Vec2::new(500.0, 100.0),
        ] {
            state.spline.add_node(position);
        }
        let scene = build_render_scene(&state);
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));

        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            paint_scene(&painter, rect, &scene);
        });

        // Hintergrund + Kurven + Handles + Nodes, dazu die gestrichelten Linien
        let minimum = 1 + scene.curves.len() + scene.handles.len() + scene.nodes.len();
        assert!(output.shapes.len() > minimum);
    }
}
