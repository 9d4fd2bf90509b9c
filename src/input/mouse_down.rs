//! Mouse down event handling - cursor hit testing and drag start.

use crate::app::{RulerApp, RulerState};
use crate::constants::CURSOR_HIT_RADIUS;
use crate::cursor::{CursorId, Cursors};
use crate::geometry::RulerMetrics;
use crate::input::coords::CoordinateConverter;
use gpui::*;

/// Find the cursor under a ruler-local position.
///
/// A press grabs a cursor when it lands inside the cursor's vertical span
/// and within `CURSOR_HIT_RADIUS` points of it horizontally. When both
/// cursors are in reach the nearer one wins.
pub fn hit_test_cursor(
    local: Point<Pixels>,
    cursors: &Cursors,
    metrics: &RulerMetrics,
) -> Option<CursorId> {
    let (top, bottom) = CoordinateConverter::cursor_vertical_span();
    let y = f32::from(local.y);
    if y < top || y > bottom {
        return None;
    }
    let cm = metrics.points_to_cm(f32::from(local.x));
    cursors.nearest(cm, metrics.points_to_cm(CURSOR_HIT_RADIUS))
}

impl RulerState {
    /// Begin dragging the cursor under `window_pos`, if any.
    pub fn press(&mut self, window_pos: Point<Pixels>) -> Option<CursorId> {
        let local = CoordinateConverter::window_to_ruler(window_pos);
        let cursor = hit_test_cursor(local, &self.cursors, &self.metrics)?;
        self.drag.begin(cursor);
        Some(cursor)
    }
}

impl RulerApp {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(cursor) = self.ruler.press(event.position) {
            tracing::debug!(?cursor, position = self.ruler.cursors.get(cursor), "Cursor drag started");
            cx.notify();
        }
    }
}
