//! Pointer gesture state machine for the fixed-mode popup.
//!
//! A gesture starts on pointer-down over the popup and ends on the next
//! pointer-up anywhere in the document. Each active variant carries the
//! context needed to turn later pointer positions into a new popup position
//! or size.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::RESIZE_EDGE_PX;
use crate::geometry::{Point, Rect};

/// The active pointer gesture, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the popup by its body.
    Dragging {
        /// Offset from the popup's top-left corner to the grab point, so the
        /// popup doesn't jump under the pointer.
        grab: Point,
    },
    /// The user is resizing the popup from its bottom-right region.
    Resizing {
        /// The popup's top-left corner, fixed for the whole gesture.
        origin: Point,
    },
}

impl Gesture {
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Whether a pointer-down at `pointer` lands in the popup's resize band:
/// inside the popup and within [`RESIZE_EDGE_PX`] of its right or bottom edge.
#[must_use]
pub fn hits_resize_band(pointer: Point, popup: Rect) -> bool {
    popup.contains(pointer)
        && (pointer.x > popup.right() - RESIZE_EDGE_PX || pointer.y > popup.bottom() - RESIZE_EDGE_PX)
}

/// Classify a pointer-down on the popup into the gesture it starts.
#[must_use]
pub fn gesture_for_pointer_down(pointer: Point, popup: Rect) -> Gesture {
    if !popup.contains(pointer) {
        return Gesture::Idle;
    }
    if hits_resize_band(pointer, popup) {
        Gesture::Resizing { origin: popup.origin() }
    } else {
        Gesture::Dragging { grab: Point::new(pointer.x - popup.x, pointer.y - popup.y) }
    }
}
