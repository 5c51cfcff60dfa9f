//! Viewport-Input-Handling: Maus-Events und Tastatur → AppIntent.
//!
//! Aufgeteilt in:
//! - `pointer`: Drücken, Bewegen, Loslassen der primären Maustaste

mod pointer;

use super::keyboard;
use crate::app::AppIntent;
use glam::Vec2;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
}

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Default)]
pub struct InputState {
    /// Letzte gemeldete Zeigerposition (Viewport-Raum)
    pub(crate) last_pointer: Option<Vec2>,
    /// Maustaste wurde im Viewport gedrückt und ist noch unten
    pub(crate) pointer_captured: bool,
    /// Zuletzt gemeldete Viewport-Größe
    pub(crate) last_viewport_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_pointer: None,
            pointer_captured: false,
            last_viewport_size: None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge pro Frame: Resize, Tastatur, Drücken, Bewegen, Loslassen.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext { ui, response };
        let rect = response.rect;

        let mut events = Vec::new();
        if let Some(resized) = self.viewport_resized([rect.width(), rect.height()]) {
            events.push(resized);
        }

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_press(&ctx, &mut events);
        self.handle_move(&ctx, &mut events);
        self.handle_release(&ctx, &mut events);

        events
    }

    /// Meldet `ViewportResized` nur, wenn sich die Größe geändert hat.
    fn viewport_resized(&mut self, size: [f32; 2]) -> Option<AppIntent> {
        if self.last_viewport_size == Some(size) {
            return None;
        }
        self.last_viewport_size = Some(size);
        Some(AppIntent::ViewportResized { size })
    }
}

/// Rechnet eine Screen-Position (Ursprung oben links) in den Viewport-Raum
/// (Ursprung unten links) um.
pub fn screen_pos_to_viewport(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, rect.max.y - pos.y)
}
