//! UI-Layer mit egui: Menü, Status-Bar, Optionen, Input-Handling.
//!
//! Keyboard-Shortcuts und Zeiger-Events sind in eigene Dateien extrahiert.

pub mod input;
mod keyboard;
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
