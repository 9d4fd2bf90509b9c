//! Mouse input handling for the ruler.
//!
//! Dragging is driven by an explicit state machine (`DragState`): a press
//! on a cursor starts a drag, moves update that cursor through the cursor
//! controller, and a release ends it.
//!
//! ## Modules
//!
//! - `coords` - window to ruler-local coordinate conversion
//! - `state` - drag state machine
//! - `mouse_down` - cursor hit testing and drag start
//! - `drag` - mouse move handling
//! - `mouse_up` - drag end

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;

pub use mouse_down::hit_test_cursor;
pub use state::DragState;
