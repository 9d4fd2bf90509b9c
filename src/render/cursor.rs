//! Cursor overlay rendering - the draggable bar, its knob and value label.

use crate::constants::{
    CURSOR_BAR_HEIGHT, CURSOR_BAR_WIDTH, CURSOR_KNOB_SIZE, CURSOR_LABEL_FONT_SIZE,
    CURSOR_OVERLAY_WIDTH, RULER_TOP_INSET,
};
use crate::cursor::CursorId;
use crate::render::canvas::ruler_blue;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::v_flex;

/// Value label shown under a cursor
pub fn format_position(cm: f32) -> String {
    format!("{:.1}", cm)
}

/// Render one cursor overlay centered on `x` points from the ruler origin.
///
/// The bar starts `RULER_TOP_INSET` above the ruler panel so it reads as
/// sitting on top of the ticks.
pub fn render_cursor(id: CursorId, x: f32, cm: f32, show_label: bool) -> Stateful<Div> {
    let blue = ruler_blue();

    v_flex()
        .id(match id {
            CursorId::Left => "cursor-left",
            CursorId::Right => "cursor-right",
        })
        .absolute()
        .left(px(x - CURSOR_OVERLAY_WIDTH / 2.0))
        .top(px(-RULER_TOP_INSET))
        .w(px(CURSOR_OVERLAY_WIDTH))
        .items_center()
        .cursor(CursorStyle::ResizeLeftRight)
        .child(
            div()
                .w(px(CURSOR_BAR_WIDTH))
                .h(px(CURSOR_BAR_HEIGHT))
                .bg(linear_gradient(
                    180.0,
                    linear_color_stop(blue.opacity(0.8), 0.0),
                    linear_color_stop(blue.opacity(0.6), 1.0),
                )),
        )
        .child(
            div()
                .size(px(CURSOR_KNOB_SIZE))
                .mt(px(-CURSOR_KNOB_SIZE / 2.0))
                .rounded_full()
                .bg(blue),
        )
        .when(show_label, |el| {
            el.child(
                div()
                    .mt(px(4.0))
                    .text_size(px(CURSOR_LABEL_FONT_SIZE))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(blue)
                    .child(format_position(cm)),
            )
        })
}
