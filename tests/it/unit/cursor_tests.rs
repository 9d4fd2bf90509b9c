//! Unit tests for cursor module.

use crate::helpers::{assert_cursor_invariants, test_metrics};
use ruler::constants::{DEFAULT_LEFT_CM, DEFAULT_RIGHT_CM};
use ruler::cursor::{CursorId, Cursors};

fn cursors(left: f32, right: f32) -> Cursors {
    Cursors::new(left, right).unwrap()
}

#[test]
fn test_default_positions() {
    let c = Cursors::default();
    assert_eq!(c.left(), DEFAULT_LEFT_CM);
    assert_eq!(c.right(), DEFAULT_RIGHT_CM);
}

#[test]
fn test_new_rejects_invalid_pairs() {
    assert!(Cursors::new(5.0, 3.0).is_none());
    assert!(Cursors::new(3.0, 3.0).is_none());
    assert!(Cursors::new(-1.0, 3.0).is_none());
    assert!(Cursors::new(f32::NAN, 3.0).is_none());
    assert!(Cursors::new(0.0, f32::INFINITY).is_none());
    assert!(Cursors::new(0.0, 0.1).is_some());
}

#[test]
fn test_distance() {
    let c = cursors(3.0, 5.0);
    assert_eq!(c.distance(), 2.0);
}

#[test]
fn test_left_past_right_rejected() {
    let mut c = cursors(3.0, 5.0);
    assert!(!c.set(CursorId::Left, 6.0, 30.0));
    assert_eq!(c.left(), 3.0);
    // Equal to right is also rejected
    assert!(!c.set(CursorId::Left, 5.0, 30.0));
    assert_eq!(c.left(), 3.0);
}

#[test]
fn test_left_below_zero_rejected() {
    let mut c = cursors(3.0, 5.0);
    assert!(!c.set(CursorId::Left, -0.1, 30.0));
    assert_eq!(c.left(), 3.0);
    assert!(c.set(CursorId::Left, 0.0, 30.0));
    assert_eq!(c.left(), 0.0);
}

#[test]
fn test_right_below_left_rejected() {
    let mut c = cursors(3.0, 5.0);
    assert!(!c.set(CursorId::Right, 2.0, 30.0));
    assert_eq!(c.right(), 5.0);
    assert!(!c.set(CursorId::Right, 3.0, 30.0));
    assert_eq!(c.right(), 5.0);
}

#[test]
fn test_right_past_length_rejected() {
    let mut c = cursors(3.0, 5.0);
    assert!(!c.set(CursorId::Right, 30.5, 30.0));
    assert_eq!(c.right(), 5.0);
    assert!(c.set(CursorId::Right, 30.0, 30.0));
    assert_eq!(c.right(), 30.0);
}

#[test]
fn test_nan_candidate_rejected() {
    let mut c = cursors(3.0, 5.0);
    assert!(!c.set(CursorId::Left, f32::NAN, 30.0));
    assert!(!c.set(CursorId::Right, f32::NAN, 30.0));
    assert_eq!(c, cursors(3.0, 5.0));
}

#[test]
fn test_drag_divides_by_scale() {
    let metrics = test_metrics(30);
    let mut c = cursors(3.0, 5.0);
    // 160 points at 40 points per cm
    assert!(c.drag(CursorId::Left, 160.0, &metrics));
    assert_eq!(c.left(), 4.0);
    assert!(c.drag(CursorId::Right, 1200.0, &metrics));
    assert_eq!(c.right(), 30.0);
    assert!(!c.drag(CursorId::Right, 1201.0, &metrics));
    assert_eq!(c.right(), 30.0);
}

#[test]
fn test_invariants_hold_for_any_drag_sequence() {
    let length = 30.0;
    let mut c = cursors(3.0, 5.0);
    for i in 0..2000u32 {
        // Candidates sweep -1.0..32.9 in a scrambled order
        let candidate = ((i * 37) % 340) as f32 / 10.0 - 1.0;
        let id = if i % 3 == 0 { CursorId::Left } else { CursorId::Right };
        let before = c;
        let applied = c.set(id, candidate, length);
        if !applied {
            assert_eq!(c, before, "rejected update must leave state unchanged");
        }
        assert_cursor_invariants(&c, length);
    }
}

#[test]
fn test_fit_to_length_keeps_span() {
    let mut c = cursors(3.0, 5.0);
    assert!(c.fit_to_length(4.0));
    assert_eq!(c, cursors(2.0, 4.0));
}

#[test]
fn test_fit_to_length_clamps_at_zero() {
    let mut c = cursors(3.0, 5.0);
    assert!(c.fit_to_length(1.0));
    assert_eq!(c, cursors(0.0, 1.0));
}

#[test]
fn test_fit_to_length_noop_cases() {
    let mut c = cursors(3.0, 5.0);
    assert!(!c.fit_to_length(30.0));
    assert!(!c.fit_to_length(5.0));
    assert!(!c.fit_to_length(0.0));
    assert_eq!(c, cursors(3.0, 5.0));
}

#[test]
fn test_nearest() {
    let c = cursors(3.0, 5.0);
    assert_eq!(c.nearest(3.2, 0.5), Some(CursorId::Left));
    assert_eq!(c.nearest(4.9, 0.5), Some(CursorId::Right));
    assert_eq!(c.nearest(4.0, 0.5), None);
    assert_eq!(c.get(CursorId::Left), 3.0);
    assert_eq!(c.get(CursorId::Right), 5.0);
}
