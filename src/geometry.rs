//! Ruler geometry - display metrics to points-per-centimeter and ruler length.
//!
//! All values here are in gpui logical pixels ("points"). The host tells us
//! how large the viewport is and how many device pixels back each point;
//! the ruler itself only ever reasons in points and centimeters.

use crate::constants::{CM_PER_INCH, DEFAULT_UNITS_PER_INCH, WINDOW_PADDING};
use gpui::{Pixels, Size};

/// Viewport metrics supplied by the host window at render time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Logical width of the viewport
    pub width: f32,
    /// Logical height of the viewport
    pub height: f32,
    /// Device pixels per logical pixel
    pub scale_factor: f32,
}

impl DisplayMetrics {
    pub fn new(width: f32, height: f32, scale_factor: f32) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }

    /// Build from a gpui viewport size and scale factor
    pub fn from_viewport(size: Size<Pixels>, scale_factor: f32) -> Self {
        Self::new(f32::from(size.width), f32::from(size.height), scale_factor)
    }

    /// Horizontal extent left for the ruler once the window padding is removed.
    pub fn usable_extent(&self) -> f32 {
        let extent = self.width - 2.0 * WINDOW_PADDING;
        if extent.is_finite() { extent.max(0.0) } else { 0.0 }
    }
}

/// Derived scale and length of the ruler. Recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerMetrics {
    pub points_per_cm: f32,
    /// Whole centimeters that fit in the usable extent
    pub ruler_length: u32,
}

impl Default for RulerMetrics {
    fn default() -> Self {
        Self {
            points_per_cm: points_per_cm(DEFAULT_UNITS_PER_INCH),
            ruler_length: 0,
        }
    }
}

impl RulerMetrics {
    pub fn from_display(display: &DisplayMetrics, units_per_inch: f32) -> Self {
        let points_per_cm = points_per_cm(units_per_inch);
        // `as` saturates, so a NaN quotient lands on 0
        let ruler_length = (display.usable_extent() / points_per_cm).floor() as u32;
        Self {
            points_per_cm,
            ruler_length,
        }
    }

    /// Ruler length as a float, for comparisons against cursor positions
    #[inline]
    pub fn length_cm(&self) -> f32 {
        self.ruler_length as f32
    }

    /// Drawn width of the ruler in points
    #[inline]
    pub fn width(&self) -> f32 {
        self.cm_to_points(self.length_cm())
    }

    #[inline]
    pub fn cm_to_points(&self, cm: f32) -> f32 {
        cm * self.points_per_cm
    }

    #[inline]
    pub fn points_to_cm(&self, points: f32) -> f32 {
        points / self.points_per_cm
    }

    /// Device pixels covering one centimeter on a display with the given density
    pub fn device_pixels_per_cm(&self, display: &DisplayMetrics) -> f32 {
        self.points_per_cm * display.scale_factor
    }
}

/// Points per centimeter for a given logical units-per-inch constant.
///
/// Non-finite or non-positive inputs fall back to the default density.
pub fn points_per_cm(units_per_inch: f32) -> f32 {
    let units_per_inch = if units_per_inch.is_finite() && units_per_inch > 0.0 {
        units_per_inch
    } else {
        DEFAULT_UNITS_PER_INCH
    };
    units_per_inch / CM_PER_INCH
}
