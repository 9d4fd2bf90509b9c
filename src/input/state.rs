//! Drag state machine for the two cursors.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingCursor   (left mouse down on a cursor overlay)
//! DraggingCursor -> Idle   (left mouse up, anywhere)
//! ```

use crate::cursor::CursorId;

/// Current pointer interaction with the ruler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No active drag
    #[default]
    Idle,

    /// A cursor follows the pointer
    DraggingCursor {
        cursor: CursorId,
    },
}

impl DragState {
    /// Returns true if a cursor is being dragged
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingCursor { .. })
    }

    /// The cursor being dragged, if any
    pub fn dragging_cursor(&self) -> Option<CursorId> {
        match self {
            Self::DraggingCursor { cursor } => Some(*cursor),
            Self::Idle => None,
        }
    }

    /// Start dragging `cursor`
    pub fn begin(&mut self, cursor: CursorId) {
        *self = Self::DraggingCursor { cursor };
    }

    /// Finish any drag, returning the cursor that was released
    pub fn finish(&mut self) -> Option<CursorId> {
        let released = self.dragging_cursor();
        *self = Self::Idle;
        released
    }
}
