//! Window resizes feeding new metrics into the ruler state.

use crate::helpers::{assert_cursor_invariants, ruler_state, test_metrics, window_point};
use ruler::app::RulerState;
use ruler::constants::DEFAULT_UNITS_PER_INCH;
use ruler::geometry::{DisplayMetrics, RulerMetrics};

#[test]
fn test_unchanged_metrics_are_ignored() {
    let mut state = ruler_state(3.0, 5.0, 30);
    assert!(!state.update_metrics(test_metrics(30)));
}

#[test]
fn test_shrinking_ruler_pulls_cursors_in() {
    let mut state = ruler_state(20.0, 25.0, 30);

    assert!(state.update_metrics(test_metrics(10)));
    assert_eq!(state.cursors.right(), 10.0);
    assert_eq!(state.cursors.left(), 5.0);
    assert_cursor_invariants(&state.cursors, 10.0);
}

#[test]
fn test_growing_ruler_leaves_cursors() {
    let mut state = ruler_state(3.0, 5.0, 10);

    assert!(state.update_metrics(test_metrics(40)));
    assert_eq!(state.cursors.left(), 3.0);
    assert_eq!(state.cursors.right(), 5.0);
}

#[test]
fn test_zero_length_ruler_rejects_drags() {
    let mut state = ruler_state(3.0, 5.0, 30);
    state.update_metrics(test_metrics(0));
    assert_eq!(state.cursors.left(), 3.0);
    assert_eq!(state.cursors.right(), 5.0);

    state.press(window_point(5.0, 10.0));
    assert!(!state.drag_to(window_point(5.5, 10.0)));
    assert!(!state.drag_to(window_point(0.0, 10.0)));
}

#[test]
fn test_from_real_display() {
    let mut state = RulerState::default();
    let display = DisplayMetrics::new(1024.0, 360.0, 2.0);
    state.update_metrics(RulerMetrics::from_display(&display, DEFAULT_UNITS_PER_INCH));

    assert_eq!(state.metrics.ruler_length, 26);
    let expected = state.metrics.cm_to_points(3.0);
    assert_eq!(state.cursor_x(ruler::cursor::CursorId::Left), expected);
}
