//! Ruler drawing - turns ruler metrics into a list of draw commands.
//!
//! Nothing here touches gpui: the output is plain data so it can be tested
//! directly and painted by `render::canvas`. Coordinates are relative to the
//! ruler origin (top-left of the 0 cm mark), y grows downward.

use crate::constants::{
    EVEN_TICK_HEIGHT, HALF_TICK_HEIGHT, LABEL_CENTER_Y, MAJOR_TICK_HEIGHT, MINOR_TICK_COUNT,
    ODD_TICK_HEIGHT, PANEL_HEIGHT, PANEL_OVERHANG,
};
use crate::geometry::RulerMetrics;

/// Visual weight of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickKind {
    /// Whole centimeter
    Major,
    /// Fifth millimeter
    Half,
    /// Even millimeter
    Even,
    /// Odd millimeter
    Odd,
}

impl TickKind {
    /// Weight of the minor tick at `index` (1..MINOR_TICK_COUNT) within a centimeter
    pub fn for_subdivision(index: u32) -> Self {
        if index == MINOR_TICK_COUNT / 2 {
            TickKind::Half
        } else if index % 2 == 0 {
            TickKind::Even
        } else {
            TickKind::Odd
        }
    }

    pub fn height(self) -> f32 {
        match self {
            TickKind::Major => MAJOR_TICK_HEIGHT,
            TickKind::Half => HALF_TICK_HEIGHT,
            TickKind::Even => EVEN_TICK_HEIGHT,
            TickKind::Odd => ODD_TICK_HEIGHT,
        }
    }

    pub fn line_width(self) -> f32 {
        match self {
            TickKind::Major => 1.5,
            TickKind::Half => 1.0,
            TickKind::Even => 0.9,
            TickKind::Odd => 0.8,
        }
    }

    /// Opacity at the top and bottom of the tick gradient
    pub fn opacity(self) -> (f32, f32) {
        match self {
            TickKind::Major => (0.8, 0.4),
            TickKind::Half => (0.6, 0.3),
            TickKind::Even => (0.5, 0.2),
            TickKind::Odd => (0.4, 0.1),
        }
    }
}

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Background panel behind the ticks
    Panel {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Vertical tick hanging from the top edge
    Tick { x: f32, height: f32, kind: TickKind },
    /// Centimeter number centered on `(x, y)`
    Label { x: f32, y: f32, text: String },
    /// Horizontal stroke along the top edge
    Baseline { from_x: f32, to_x: f32 },
}

/// Build the full ruler drawing for the given metrics.
///
/// Emits one panel, a major tick and label for every centimeter in
/// `0..=length`, nine minor ticks inside every centimeter interval and one
/// baseline, in that paint order.
pub fn build_ruler(metrics: &RulerMetrics) -> Vec<DrawCommand> {
    let length = metrics.ruler_length;
    let width = metrics.width();
    let step = metrics.points_per_cm / MINOR_TICK_COUNT as f32;

    let per_cm = 2 + (MINOR_TICK_COUNT as usize - 1);
    let mut commands = Vec::with_capacity(2 + per_cm * (length as usize + 1));

    commands.push(DrawCommand::Panel {
        x: -PANEL_OVERHANG,
        y: 0.0,
        width: width + 2.0 * PANEL_OVERHANG,
        height: PANEL_HEIGHT,
    });

    for cm in 0..=length {
        let x = metrics.cm_to_points(cm as f32);
        commands.push(DrawCommand::Tick {
            x,
            height: TickKind::Major.height(),
            kind: TickKind::Major,
        });
        commands.push(DrawCommand::Label {
            x,
            y: LABEL_CENTER_Y,
            text: cm.to_string(),
        });

        if cm == length {
            continue;
        }
        for minor in 1..MINOR_TICK_COUNT {
            let kind = TickKind::for_subdivision(minor);
            commands.push(DrawCommand::Tick {
                x: x + minor as f32 * step,
                height: kind.height(),
                kind,
            });
        }
    }

    commands.push(DrawCommand::Baseline {
        from_x: -PANEL_OVERHANG,
        to_x: width + PANEL_OVERHANG,
    });

    commands
}
