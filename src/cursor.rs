//! Cursor controller - the two measuring cursors and their bounds.
//!
//! Every mutation is validated before it is committed, so the pair can never
//! leave the `0 <= left < right <= length` region. Rejected updates are not
//! errors: the last valid position simply stays in place.

use crate::constants::{DEFAULT_LEFT_CM, DEFAULT_RIGHT_CM};
use crate::geometry::RulerMetrics;

/// Which of the two cursors an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorId {
    Left,
    Right,
}

/// Left and right cursor positions in centimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursors {
    left: f32,
    right: f32,
}

impl Default for Cursors {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT_CM,
            right: DEFAULT_RIGHT_CM,
        }
    }
}

impl Cursors {
    /// Create a cursor pair, or `None` if the positions are not strictly
    /// ordered, finite and non-negative.
    pub fn new(left: f32, right: f32) -> Option<Self> {
        if left.is_finite() && right.is_finite() && left >= 0.0 && left < right {
            Some(Self { left, right })
        } else {
            None
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.left
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn get(&self, id: CursorId) -> f32 {
        match id {
            CursorId::Left => self.left,
            CursorId::Right => self.right,
        }
    }

    /// Distance between the cursors in centimeters
    pub fn distance(&self) -> f32 {
        (self.right - self.left).abs()
    }

    /// Move a cursor to `candidate` centimeters if the result stays valid.
    ///
    /// Returns whether the position was applied.
    pub fn set(&mut self, id: CursorId, candidate: f32, ruler_length: f32) -> bool {
        match id {
            CursorId::Left if candidate >= 0.0 && candidate < self.right => {
                self.left = candidate;
                true
            }
            CursorId::Right if candidate > self.left && candidate <= ruler_length => {
                self.right = candidate;
                true
            }
            // NaN fails every comparison above and ends up here too
            _ => false,
        }
    }

    /// Apply a drag update given the pointer offset from the ruler origin in points.
    pub fn drag(&mut self, id: CursorId, pointer_offset: f32, metrics: &RulerMetrics) -> bool {
        let candidate = metrics.points_to_cm(pointer_offset);
        self.set(id, candidate, metrics.length_cm())
    }

    /// Pull the pair back inside a ruler that got shorter, keeping its span
    /// when there is room. A zero-length ruler has no valid pair, so the
    /// cursors are left alone until it grows again.
    ///
    /// Returns whether anything moved.
    pub fn fit_to_length(&mut self, ruler_length: f32) -> bool {
        if !(ruler_length > 0.0) || self.right <= ruler_length {
            return false;
        }
        let span = self.right - self.left;
        self.right = ruler_length;
        self.left = (ruler_length - span).max(0.0);
        true
    }

    /// The cursor closest to `cm`, if it lies within `radius_cm`.
    pub fn nearest(&self, cm: f32, radius_cm: f32) -> Option<CursorId> {
        let to_left = (cm - self.left).abs();
        let to_right = (cm - self.right).abs();
        let (id, dist) = if to_right < to_left {
            (CursorId::Right, to_right)
        } else {
            (CursorId::Left, to_left)
        };
        (dist <= radius_cm).then_some(id)
    }
}
