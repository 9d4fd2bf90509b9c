//! Drag operations - moving the grabbed cursor with the pointer.
//!
//! ## Performance Notes
//!
//! Mouse move fires 60+ times per second during a drag. Moves outside a
//! drag return immediately, and a redraw is only requested when the
//! controller accepted the new position.

use crate::app::{RulerApp, RulerState};
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use gpui::*;

impl RulerState {
    /// Feed a pointer position to the dragged cursor.
    ///
    /// Returns whether a cursor moved. Positions that would break the
    /// cursor ordering or leave the ruler are dropped.
    pub fn drag_to(&mut self, window_pos: Point<Pixels>) -> bool {
        let Some(cursor) = self.drag.dragging_cursor() else {
            return false;
        };
        let local = CoordinateConverter::window_to_ruler(window_pos);
        self.cursors.drag(cursor, f32::from(local.x), &self.metrics)
    }
}

impl RulerApp {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_move");

        if self.ruler.drag_to(event.position) {
            cx.notify();
        }
    }
}
