//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt die Interaktions-Regel: Klick auf Node/Handle greift,
//! Klick ins Leere fügt einen Node ein, Bewegung zieht nur bei aktivem Griff.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::EditorOptions;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { position } => {
            match state
                .spline
                .hit_test(position, state.options.grab_half_width)
            {
                Some(target) => vec![AppCommand::Grab { target }],
                None => vec![AppCommand::AddNode { position }],
            }
        }
        AppIntent::PointerMoved { position } => {
            if state.grab.is_active() {
                vec![AppCommand::DragGrabbed { position }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::ReleaseGrab],
        AppIntent::ViewportResized { size } => {
            if state.view.viewport_size == size {
                vec![]
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }
        // Griff zuerst lösen, damit kein Index auf gelöschte Nodes zeigt
        AppIntent::ResetRequested => vec![AppCommand::ReleaseGrab, AppCommand::ResetSpline],
        AppIntent::InsertionPolicyChanged { policy } => {
            vec![AppCommand::SetInsertionPolicy { policy }]
        }
        AppIntent::ToggleConstructionLinesRequested => vec![AppCommand::ToggleConstructionLines],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ApplyOptions {
            options: EditorOptions::default(),
        }],
        AppIntent::OpenOptionsDialogRequested => {
            vec![AppCommand::SetOptionsDialogVisible { visible: true }]
        }
        AppIntent::CloseOptionsDialogRequested => {
            vec![AppCommand::SetOptionsDialogVisible { visible: false }]
        }
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
