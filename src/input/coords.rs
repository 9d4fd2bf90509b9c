//! Coordinate conversion utilities for ruler interactions.
//!
//! Mouse events arrive in window space. The ruler is laid out at a fixed
//! offset inside the padded window content, so converting to ruler-local
//! space is a constant translation.

use crate::constants::{
    CURSOR_BAR_HEIGHT, CURSOR_KNOB_SIZE, CURSOR_LABEL_FONT_SIZE, RULER_TOP_INSET, WINDOW_PADDING,
};
use gpui::{Pixels, Point, point, px};

/// Window-space position of the ruler origin (the 0 cm mark on the top edge)
pub const RULER_ORIGIN: (f32, f32) = (WINDOW_PADDING, WINDOW_PADDING + RULER_TOP_INSET);

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert window position to ruler-local position
    #[inline]
    pub fn window_to_ruler(window_pos: Point<Pixels>) -> Point<Pixels> {
        point(
            px(f32::from(window_pos.x) - RULER_ORIGIN.0),
            px(f32::from(window_pos.y) - RULER_ORIGIN.1),
        )
    }

    /// Convert ruler-local position to window position
    #[inline]
    pub fn ruler_to_window(ruler_pos: Point<Pixels>) -> Point<Pixels> {
        point(
            px(f32::from(ruler_pos.x) + RULER_ORIGIN.0),
            px(f32::from(ruler_pos.y) + RULER_ORIGIN.1),
        )
    }

    /// Vertical range, in ruler-local space, covered by a cursor overlay
    pub fn cursor_vertical_span() -> (f32, f32) {
        let top = -RULER_TOP_INSET;
        let bottom = top + CURSOR_BAR_HEIGHT + CURSOR_KNOB_SIZE + CURSOR_LABEL_FONT_SIZE * 1.5;
        (top, bottom)
    }
}
