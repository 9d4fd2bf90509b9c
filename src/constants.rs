//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values for the ruler, its ticks and
//! the cursor overlays.

// ============================================================================
// Units
// ============================================================================

/// Centimeters per inch
pub const CM_PER_INCH: f32 = 2.54;

/// Logical units per inch assumed for the host display
pub const DEFAULT_UNITS_PER_INCH: f32 = 96.0;

// ============================================================================
// Layout Constants
// ============================================================================

/// Padding around the window content in pixels
pub const WINDOW_PADDING: f32 = 16.0;

/// Vertical gap between the ruler frame and the distance readout
pub const CONTENT_GAP: f32 = 20.0;

/// Space above the ruler panel reserved for the top of the cursor bars
pub const RULER_TOP_INSET: f32 = 24.0;

/// Height of the ruler frame (panel plus cursor overlays)
pub const RULER_FRAME_HEIGHT: f32 = 200.0;

/// Height of the ruler background panel
pub const PANEL_HEIGHT: f32 = 60.0;

/// How far the background panel extends past each end of the ruler
pub const PANEL_OVERHANG: f32 = 10.0;

/// Border width of the background panel
pub const PANEL_BORDER_WIDTH: f32 = 1.0;

/// Stroke width of the baseline along the top edge
pub const BASELINE_WIDTH: f32 = 2.0;

// ============================================================================
// Ticks
// ============================================================================

/// Subdivisions per centimeter (one minor tick per millimeter)
pub const MINOR_TICK_COUNT: u32 = 10;

/// Major tick height
pub const MAJOR_TICK_HEIGHT: f32 = 35.0;

/// Height of the tick at the half-centimeter mark
pub const HALF_TICK_HEIGHT: f32 = 25.0;

/// Height of even millimeter ticks
pub const EVEN_TICK_HEIGHT: f32 = 20.0;

/// Height of odd millimeter ticks
pub const ODD_TICK_HEIGHT: f32 = 15.0;

/// Vertical center of the centimeter labels
pub const LABEL_CENTER_Y: f32 = 45.0;

/// Width of the box a centimeter label is centered in
pub const LABEL_BOX_WIDTH: f32 = 24.0;

/// Label font size
pub const LABEL_FONT_SIZE: f32 = 14.0;

// ============================================================================
// Cursors
// ============================================================================

/// Default left cursor position in centimeters
pub const DEFAULT_LEFT_CM: f32 = 3.0;

/// Default right cursor position in centimeters
pub const DEFAULT_RIGHT_CM: f32 = 5.0;

/// Width of the cursor bar
pub const CURSOR_BAR_WIDTH: f32 = 4.0;

/// Height of the cursor bar
pub const CURSOR_BAR_HEIGHT: f32 = 140.0;

/// Diameter of the knob at the bottom of the cursor bar
pub const CURSOR_KNOB_SIZE: f32 = 12.0;

/// Font size of the cursor value label
pub const CURSOR_LABEL_FONT_SIZE: f32 = 12.0;

/// Width of the cursor overlay box (bar centered, label below)
pub const CURSOR_OVERLAY_WIDTH: f32 = 40.0;

/// Horizontal distance from a cursor within which a press grabs it
pub const CURSOR_HIT_RADIUS: f32 = 14.0;

/// Distance readout font size
pub const DISTANCE_FONT_SIZE: f32 = 28.0;

// ============================================================================
// Settings
// ============================================================================

/// Interval between settings file watcher polls in milliseconds
pub const SETTINGS_POLL_MS: u64 = 500;
