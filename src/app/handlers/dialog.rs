//! Handler für Optionen und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen (begrenzt); Spline-Regeln werden sofort angewendet.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let options = options.sanitized();
    state.spline.policy = options.insertion_policy;
    state.spline.handle_offset = options.handle_offset;
    state.options = options;
}

/// Blendet den Options-Dialog ein oder aus.
pub fn set_options_dialog_visible(state: &mut AppState, visible: bool) {
    state.show_options_dialog = visible;
}

/// Speichert die aktuellen Optionen in die Optionen-Datei.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&state.options_path)
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
