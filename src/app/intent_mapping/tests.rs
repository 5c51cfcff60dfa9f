use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{HandleKind, SplineTarget};
use glam::Vec2;

use super::map_intent_to_commands;

fn state_with_two_nodes() -> AppState {
    let mut state = AppState::new();
    state.spline.add_node(Vec2::new(100.0, 100.0));
    state.spline.add_node(Vec2::new(300.0, 100.0));
    state
}

#[test]
fn press_on_empty_area_maps_to_add_node() {
    let state = state_with_two_nodes();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            position: Vec2::new(200.0, 400.0),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::AddNode {
            position: Vec2::new(200.0, 400.0)
        }]
    );
}

#[test]
fn press_on_node_maps_to_grab() {
    let state = state_with_two_nodes();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            position: Vec2::new(295.0, 108.0),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::Grab {
            target: SplineTarget::Node(1)
        }]
    );
}

#[test]
fn press_on_handle_maps_to_grab_handle() {
    let state = state_with_two_nodes();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            position: Vec2::new(100.0, 150.0),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::Grab {
            target: SplineTarget::Handle {
                node: 0,
                kind: HandleKind::Primary
            }
        }]
    );
}

#[test]
fn grab_radius_follows_options() {
    let mut state = state_with_two_nodes();
    state.options.grab_half_width = 2.0;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            position: Vec2::new(105.0, 100.0),
        },
    );

    assert!(matches!(commands[..], [AppCommand::AddNode { .. }]));
}

#[test]
fn move_without_grab_maps_to_nothing() {
    let state = state_with_two_nodes();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            position: Vec2::new(10.0, 10.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn move_with_grab_maps_to_drag() {
    let mut state = state_with_two_nodes();
    state.grab.target = Some(SplineTarget::Node(0));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            position: Vec2::new(10.0, 10.0),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::DragGrabbed {
            position: Vec2::new(10.0, 10.0)
        }]
    );
}

#[test]
fn reset_releases_grab_before_clearing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ResetRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ReleaseGrab));
    assert!(matches!(commands[1], AppCommand::ResetSpline));
}

#[test]
fn release_always_maps_to_release_grab() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::PointerReleased);

    assert_eq!(commands, vec![AppCommand::ReleaseGrab]);
}

#[test]
fn resize_to_same_size_maps_to_nothing() {
    let state = AppState::new();
    let size = state.view.viewport_size;

    assert!(map_intent_to_commands(&state, AppIntent::ViewportResized { size }).is_empty());
    assert_eq!(
        map_intent_to_commands(
            &state,
            AppIntent::ViewportResized {
                size: [640.0, 480.0]
            }
        ),
        vec![AppCommand::SetViewportSize {
            size: [640.0, 480.0]
        }]
    );
}
