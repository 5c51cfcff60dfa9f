//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// - `R` / `Delete`: Spline zurücksetzen
/// - `H`: Konstruktionslinien umschalten
/// - `Ctrl+Q`: Beenden
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    // Eingaben in Textfeldern (Options-Dialog) nicht als Shortcut werten
    if ui.ctx().wants_keyboard_input() {
        return Vec::new();
    }

    let (modifiers, key_r, key_delete, key_h, key_q) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::Delete),
            i.key_pressed(egui::Key::H),
            i.key_pressed(egui::Key::Q),
        )
    });

    shortcut_intents(modifiers.command, key_r || key_delete, key_h, key_q)
}

/// Reine Zuordnung Tastenzustand → Intents (ohne egui-Kontext testbar).
fn shortcut_intents(command: bool, reset: bool, toggle: bool, quit: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if command && quit {
        events.push(AppIntent::ExitRequested);
        return events;
    }
    if command {
        // Andere Ctrl-Kombinationen gehören dem Menü
        return events;
    }
    if reset {
        events.push(AppIntent::ResetRequested);
    }
    if toggle {
        events.push(AppIntent::ToggleConstructionLinesRequested);
    }

    events
}
