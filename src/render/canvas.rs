//! Ruler painting - maps draw commands onto gpui primitives.
//!
//! Panel, ticks and baseline are painted straight to the GPU from a
//! `canvas` element. Labels need text layout, so they are emitted as
//! absolutely positioned children laid over the canvas instead.
//!
//! ## Performance Notes
//!
//! Painting happens every frame while a cursor is dragged. The command list
//! is built once per render and moved into the paint closure.

use crate::constants::{
    BASELINE_WIDTH, LABEL_BOX_WIDTH, LABEL_FONT_SIZE, PANEL_BORDER_WIDTH, RULER_FRAME_HEIGHT,
};
use crate::profile_scope;
use crate::render::ruler::{DrawCommand, TickKind};
use gpui::{PathBuilder, *};

/// Accent color shared by ticks, labels and cursors
pub fn ruler_blue() -> Hsla {
    hsla(211.0 / 360.0, 1.0, 0.5, 1.0)
}

fn panel_background() -> Background {
    linear_gradient(
        180.0,
        linear_color_stop(hsla(0.0, 0.0, 0.95, 1.0), 0.0),
        linear_color_stop(hsla(0.0, 0.0, 0.98, 1.0), 1.0),
    )
}

fn tick_background(kind: TickKind) -> Background {
    let (top, bottom) = kind.opacity();
    let blue = ruler_blue();
    linear_gradient(
        180.0,
        linear_color_stop(blue.opacity(top), 0.0),
        linear_color_stop(blue.opacity(bottom), 1.0),
    )
}

fn baseline_background() -> Background {
    let blue = ruler_blue();
    linear_gradient(
        90.0,
        linear_color_stop(blue.opacity(0.8), 0.0),
        linear_color_stop(blue.opacity(0.6), 1.0),
    )
}

/// Render the ruler: a painted canvas plus one text element per label.
///
/// `width` is the drawn ruler width; commands may extend past it (panel
/// overhang), which is fine since the canvas does not clip. Cursor overlays
/// are added to the returned container by the caller.
pub fn render_ruler(commands: Vec<DrawCommand>, width: f32) -> Div {
    let labels: Vec<(f32, f32, SharedString)> = commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Label { x, y, text } => Some((*x, *y, SharedString::from(text.clone()))),
            _ => None,
        })
        .collect();

    div()
        .relative()
        .w(px(width))
        .h(px(RULER_FRAME_HEIGHT))
        .child(
            canvas(
                move |_bounds, _window, _cx| (),
                move |bounds, _data, window, _cx| {
                    paint_commands(bounds, window, &commands);
                },
            )
            .absolute()
            .size_full(),
        )
        .children(labels.into_iter().map(|(x, y, text)| render_label(x, y, text)))
}

fn render_label(x: f32, y: f32, text: SharedString) -> Div {
    div()
        .absolute()
        .left(px(x - LABEL_BOX_WIDTH / 2.0))
        .top(px(y - LABEL_FONT_SIZE * 0.6))
        .w(px(LABEL_BOX_WIDTH))
        .flex()
        .justify_center()
        .text_size(px(LABEL_FONT_SIZE))
        .font_weight(FontWeight::MEDIUM)
        .text_color(ruler_blue().opacity(0.8))
        .child(text)
}

fn paint_commands(bounds: Bounds<Pixels>, window: &mut Window, commands: &[DrawCommand]) {
    profile_scope!("paint_ruler");

    let origin_x = f32::from(bounds.origin.x);
    let origin_y = f32::from(bounds.origin.y);

    for command in commands {
        match command {
            DrawCommand::Panel {
                x,
                y,
                width,
                height,
            } => {
                let panel_bounds = Bounds {
                    origin: point(px(origin_x + x), px(origin_y + y)),
                    size: size(px(*width), px(*height)),
                };
                window.paint_quad(quad(
                    panel_bounds,
                    px(0.0),
                    panel_background(),
                    px(PANEL_BORDER_WIDTH),
                    hsla(0.0, 0.0, 0.5, 0.3),
                    Default::default(),
                ));
            }
            DrawCommand::Tick { x, height, kind } => {
                let mut path = PathBuilder::stroke(px(kind.line_width()));
                path.move_to(point(px(origin_x + x), px(origin_y)));
                path.line_to(point(px(origin_x + x), px(origin_y + height)));
                if let Ok(built) = path.build() {
                    window.paint_path(built, tick_background(*kind));
                }
            }
            DrawCommand::Baseline { from_x, to_x } => {
                let mut path = PathBuilder::stroke(px(BASELINE_WIDTH));
                path.move_to(point(px(origin_x + from_x), px(origin_y)));
                path.line_to(point(px(origin_x + to_x), px(origin_y)));
                if let Ok(built) = path.build() {
                    window.paint_path(built, baseline_background());
                }
            }
            // Laid out as elements by `render_ruler`
            DrawCommand::Label { .. } => {}
        }
    }
}
