//! Zeiger-Events: Drücken (Greifen/Einfügen), Bewegen (Ziehen), Loslassen.

use super::{screen_pos_to_viewport, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Primäre Taste im Viewport gedrückt → `PointerPressed`.
    pub(crate) fn handle_press(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let (pressed, press_pos) = ctx
            .ui
            .input(|i| (i.pointer.primary_pressed(), i.pointer.press_origin()));
        if !pressed || !ctx.response.contains_pointer() {
            return;
        }
        let Some(pos) = press_pos else {
            return;
        };

        let position = screen_pos_to_viewport(pos, ctx.response.rect);
        self.pointer_captured = true;
        self.last_pointer = Some(position);
        events.push(AppIntent::PointerPressed { position });
    }

    /// Zeiger bewegt → `PointerMoved` (auch außerhalb, solange gedrückt).
    pub(crate) fn handle_move(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let Some(pos) = ctx.ui.input(|i| i.pointer.latest_pos()) else {
            return;
        };
        if !self.pointer_captured && !ctx.response.rect.contains(pos) {
            return;
        }

        let position = screen_pos_to_viewport(pos, ctx.response.rect);
        if self.last_pointer == Some(position) {
            return;
        }
        self.last_pointer = Some(position);
        events.push(AppIntent::PointerMoved { position });
    }

    /// Primäre Taste losgelassen → `PointerReleased`.
    pub(crate) fn handle_release(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !self.pointer_captured {
            return;
        }
        if ctx.ui.input(|i| i.pointer.primary_released()) {
            self.pointer_captured = false;
            events.push(AppIntent::PointerReleased);
        }
    }
}
