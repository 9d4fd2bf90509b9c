//! Unit tests for geometry module.

use ruler::constants::{DEFAULT_UNITS_PER_INCH, WINDOW_PADDING};
use ruler::geometry::{DisplayMetrics, RulerMetrics, points_per_cm};

#[test]
fn test_points_per_cm_default() {
    let ppcm = points_per_cm(DEFAULT_UNITS_PER_INCH);
    assert!((ppcm - 37.795_275).abs() < 1e-3);
}

#[test]
fn test_points_per_cm_rejects_bad_density() {
    let default = points_per_cm(DEFAULT_UNITS_PER_INCH);
    assert_eq!(points_per_cm(0.0), default);
    assert_eq!(points_per_cm(-96.0), default);
    assert_eq!(points_per_cm(f32::NAN), default);
    assert_eq!(points_per_cm(f32::INFINITY), default);
}

#[test]
fn test_usable_extent_removes_padding() {
    let display = DisplayMetrics::new(1024.0, 600.0, 1.0);
    assert_eq!(display.usable_extent(), 1024.0 - 2.0 * WINDOW_PADDING);
}

#[test]
fn test_usable_extent_never_negative() {
    assert_eq!(DisplayMetrics::new(10.0, 10.0, 1.0).usable_extent(), 0.0);
    assert_eq!(DisplayMetrics::new(f32::NAN, 10.0, 1.0).usable_extent(), 0.0);
}

#[test]
fn test_ruler_length_floors() {
    // 1888 usable points / 37.795 points per cm = 49.95
    let display = DisplayMetrics::new(1920.0, 1080.0, 2.0);
    let metrics = RulerMetrics::from_display(&display, DEFAULT_UNITS_PER_INCH);
    assert_eq!(metrics.ruler_length, 49);

    // 992 / 37.795 = 26.25
    let display = DisplayMetrics::new(1024.0, 360.0, 1.0);
    let metrics = RulerMetrics::from_display(&display, DEFAULT_UNITS_PER_INCH);
    assert_eq!(metrics.ruler_length, 26);
}

#[test]
fn test_ruler_length_zero_for_tiny_window() {
    let display = DisplayMetrics::new(40.0, 40.0, 1.0);
    let metrics = RulerMetrics::from_display(&display, DEFAULT_UNITS_PER_INCH);
    assert_eq!(metrics.ruler_length, 0);
    assert_eq!(metrics.width(), 0.0);
}

#[test]
fn test_custom_density_changes_length() {
    // 132 units per inch -> ~51.97 points per cm; 992 / 51.97 = 19.09
    let display = DisplayMetrics::new(1024.0, 360.0, 1.0);
    let metrics = RulerMetrics::from_display(&display, 132.0);
    assert_eq!(metrics.ruler_length, 19);
}

#[test]
fn test_width_and_conversions() {
    let metrics = RulerMetrics {
        points_per_cm: 40.0,
        ruler_length: 12,
    };
    assert_eq!(metrics.length_cm(), 12.0);
    assert_eq!(metrics.width(), 480.0);
    assert_eq!(metrics.cm_to_points(2.5), 100.0);
    assert_eq!(metrics.points_to_cm(100.0), 2.5);
}

#[test]
fn test_device_pixels_per_cm_uses_scale_factor() {
    let display = DisplayMetrics::new(1024.0, 600.0, 2.0);
    let metrics = RulerMetrics {
        points_per_cm: 40.0,
        ruler_length: 10,
    };
    assert_eq!(metrics.device_pixels_per_cm(&display), 80.0);
}

#[test]
fn test_from_viewport() {
    let size = gpui::size(gpui::px(800.0), gpui::px(300.0));
    let display = DisplayMetrics::from_viewport(size, 1.5);
    assert_eq!(display, DisplayMetrics::new(800.0, 300.0, 1.5));
}
