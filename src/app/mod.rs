//! Application module - the ruler view entity and its state.
//!
//! - `state` - the `RulerApp` struct and its sub-structs
//! - `lifecycle` - initialization and settings reload
//! - `view` - the `Render` implementation

mod lifecycle;
mod state;
mod view;

pub use state::{RulerApp, RulerState, SettingsState, SystemState};
pub use view::format_distance;
