//! Mouse up event handling - ends the cursor drag.

use crate::app::{RulerApp, RulerState};
use crate::cursor::CursorId;
use gpui::*;

impl RulerState {
    /// Release the dragged cursor, if any.
    pub fn release(&mut self) -> Option<CursorId> {
        self.drag.finish()
    }
}

impl RulerApp {
    pub fn handle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(cursor) = self.ruler.release() {
            tracing::debug!(
                ?cursor,
                position = self.ruler.cursors.get(cursor),
                distance = self.ruler.distance(),
                "Cursor drag finished"
            );
            cx.notify();
        }
    }
}
