//! Rendering - the ruler drawing, its gpui painter and the cursor overlays.
//!
//! - `ruler` - pure draw-command builder
//! - `canvas` - paints draw commands with gpui
//! - `cursor` - cursor bar, knob and value label elements

pub mod canvas;
pub mod cursor;
pub mod ruler;

pub use canvas::render_ruler;
pub use cursor::{format_position, render_cursor};
pub use ruler::{DrawCommand, TickKind, build_ruler};
