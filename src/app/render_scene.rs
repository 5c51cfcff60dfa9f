//! Baut die Render-Szene für einen Frame aus dem AppState.

use super::AppState;
use crate::shared::{HandleMarker, RenderScene};

/// Erzeugt eine `RenderScene` (Polylines, Nodes, Handles, Konstruktionslinien).
pub fn build(state: &AppState) -> RenderScene {
    let options = &state.options;
    let spline = &state.spline;

    let curves = spline
        .segments()
        .map(|segment| segment.polyline(options.curve_segments))
        .collect();

    let nodes = spline.nodes().iter().map(|n| n.position).collect();

    let handles = spline
        .nodes()
        .iter()
        .flat_map(|n| n.handles())
        .map(|h| HandleMarker {
            position: h.position,
            kind: h.kind,
        })
        .collect();

    let construction_lines = if options.show_construction_lines {
        spline
            .nodes()
            .iter()
            .flat_map(|n| n.handles().map(move |h| [n.position, h.position]))
            .collect()
    } else {
        Vec::new()
    };

    let grabbed = state
        .grab
        .target
        .and_then(|target| spline.target_position(target));

    RenderScene {
        curves,
        nodes,
        handles,
        construction_lines,
        grabbed,
        viewport_size: state.view.viewport_size,
        options: options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HandleKind, SplineTarget};
    use glam::Vec2;

    #[test]
    fn test_empty_state_builds_empty_scene() {
        let scene = build(&AppState::new());
        assert!(scene.is_empty());
        assert!(scene.curves.is_empty());
        assert!(scene.handles.is_empty());
        assert!(scene.grabbed.is_none());
    }

    #[test]
    fn test_scene_contains_one_polyline_per_segment() {
        let mut state = AppState::new();
        state.options.curve_segments = 16;
        state.spline.add_node(Vec2::new(100.0, 100.0));
        state.spline.add_node(Vec2::new(300.0, 100.0));
        state.spline.add_node(Vec2::new(500.0, 100.0));

        let scene = build(&state);

        assert_eq!(scene.nodes.len(), 3);
        assert_eq!(scene.curves.len(), 2);
        assert!(scene.curves.iter().all(|c| c.len() == 17));
        assert_eq!(scene.curves[0].first(), Some(&Vec2::new(100.0, 100.0)));
        assert_eq!(scene.curves[1].last(), Some(&Vec2::new(500.0, 100.0)));
        // Endknoten je ein Handle, Mitte zwei
        assert_eq!(scene.handles.len(), 4);
        assert_eq!(scene.construction_lines.len(), 4);
        assert!(scene
            .construction_lines
            .contains(&[Vec2::new(300.0, 100.0), Vec2::new(300.0, 50.0)]));
    }

    #[test]
    fn test_construction_lines_can_be_hidden() {
        let mut state = AppState::new();
        state.options.show_construction_lines = false;
        state.spline.add_node(Vec2::new(100.0, 100.0));

        let scene = build(&state);

        assert!(scene.construction_lines.is_empty());
        assert_eq!(scene.handles.len(), 1);
        assert_eq!(scene.handles[0].kind, HandleKind::Primary);
    }

    #[test]
    fn test_grabbed_position_is_reported() {
        let mut state = AppState::new();
        state.spline.add_node(Vec2::new(100.0, 100.0));
        state.grab.target = Some(SplineTarget::Handle {
            node: 0,
            kind: HandleKind::Primary,
        });

        let scene = build(&state);

        assert_eq!(scene.grabbed, Some(Vec2::new(100.0, 150.0)));
    }
}
