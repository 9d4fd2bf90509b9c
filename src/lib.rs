//! On-screen ruler with two draggable cursors.
//!
//! The window shows a centimeter ruler sized to the viewport. Two cursors
//! can be dragged along it and the distance between them is shown below.
//!
//! ## Modules
//!
//! - `geometry` - display metrics to points-per-cm and ruler length
//! - `cursor` - the bounded cursor pair
//! - `render` - ruler draw commands, their painter, cursor overlays
//! - `input` - mouse drag state machine and coordinate conversion
//! - `app` - the gpui view tying it together
//! - `settings`, `settings_watcher` - optional config file with hot reload

pub mod app;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod render;
pub mod settings;
pub mod settings_watcher;
