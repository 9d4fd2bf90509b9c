//! Ruler view rendering - lays out the ruler, both cursors and the distance readout.

use super::RulerApp;
use crate::constants::{CONTENT_GAP, DISTANCE_FONT_SIZE, RULER_TOP_INSET, WINDOW_PADDING};
use crate::cursor::CursorId;
use crate::geometry::{DisplayMetrics, RulerMetrics};
use crate::profile_scope;
use crate::render::{build_ruler, render_cursor, render_ruler};
use gpui::*;
use gpui_component::{ActiveTheme as _, v_flex};

/// Distance readout text
pub fn format_distance(cm: f32) -> String {
    format!("{:.1} cm", cm)
}

impl Render for RulerApp {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render");
        self.system.perf.begin_frame();

        let display = DisplayMetrics::from_viewport(window.viewport_size(), window.scale_factor());
        let metrics = RulerMetrics::from_display(&display, self.settings.data.units_per_inch);
        self.ruler.update_metrics(metrics);

        let show_labels = self.settings.data.show_cursor_labels;
        let cursors = self.ruler.cursors;
        let ruler = render_ruler(build_ruler(&metrics), metrics.width())
            .child(render_cursor(
                CursorId::Left,
                self.ruler.cursor_x(CursorId::Left),
                cursors.left(),
                show_labels,
            ))
            .child(render_cursor(
                CursorId::Right,
                self.ruler.cursor_x(CursorId::Right),
                cursors.right(),
                show_labels,
            ));

        let background = cx.theme().background;
        let foreground = cx.theme().foreground;

        let root = v_flex()
            .id("ruler-root")
            .size_full()
            .p(px(WINDOW_PADDING))
            .gap(px(CONTENT_GAP))
            .bg(background)
            .text_color(foreground)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_mouse_up_out(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .child(div().pt(px(RULER_TOP_INSET)).child(ruler))
            .child(
                div()
                    .text_size(px(DISTANCE_FONT_SIZE))
                    .font_weight(FontWeight::BOLD)
                    .child(format_distance(cursors.distance())),
            );

        self.system.perf.end_frame();
        root
    }
}
