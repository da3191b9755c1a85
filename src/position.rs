//! Overlay positioning: viewport clamping and follow-mode placement.
//!
//! All functions here are pure. Coordinates are viewport-relative CSS
//! pixels; `margin` is the minimum distance kept between the popup and the
//! viewport edges. When the viewport is too small to honor the margin on
//! both sides, the top-left margin wins.

#[cfg(test)]
#[path = "position_test.rs"]
mod position_test;

use crate::consts::{CURSOR_GAP_PX, MIN_POPUP_HEIGHT_PX, MIN_POPUP_WIDTH_PX};
use crate::geometry::{Point, Size};

/// Clamp a single axis into `[margin, viewport_len - len - margin]`.
///
/// Falls back to `margin` when the element (plus margins) does not fit.
#[must_use]
pub fn clamp_axis(pos: f64, len: f64, viewport_len: f64, margin: f64) -> f64 {
    let max = viewport_len - len - margin;
    if max < margin { margin } else { pos.clamp(margin, max) }
}

/// Clamp a desired top-left corner so the whole element stays inside the
/// viewport with `margin` slack on every side.
#[must_use]
pub fn clamp_to_viewport(pos: Point, size: Size, viewport: Size, margin: f64) -> Point {
    Point {
        x: clamp_axis(pos.x, size.width, viewport.width, margin),
        y: clamp_axis(pos.y, size.height, viewport.height, margin),
    }
}

/// Place the popup next to the pointer in follow mode.
///
/// Proposes the bottom-right quadrant (`pointer + gap`), flips an axis to
/// the opposite side of the pointer when the proposal would overflow the
/// right/bottom viewport edge, then clamps the result. The flip picks the
/// non-overflowing side whenever one exists.
#[must_use]
pub fn follow_position(pointer: Point, size: Size, viewport: Size, margin: f64) -> Point {
    let mut x = pointer.x + CURSOR_GAP_PX;
    if x + size.width > viewport.width - margin {
        x = pointer.x - size.width - CURSOR_GAP_PX;
    }

    let mut y = pointer.y + CURSOR_GAP_PX;
    if y + size.height > viewport.height - margin {
        y = pointer.y - size.height - CURSOR_GAP_PX;
    }

    clamp_to_viewport(Point::new(x, y), size, viewport, margin)
}

/// Cap a fixed-mode resize between the minimum popup size and the space
/// left between `origin` and the viewport edge (minus `margin`).
///
/// The minimum wins over the viewport cap, so a popup whose origin sits
/// near the edge never collapses below the minimum.
#[must_use]
pub fn clamp_resize(origin: Point, desired: Size, viewport: Size, margin: f64) -> Size {
    let max_width = viewport.width - origin.x - margin;
    let max_height = viewport.height - origin.y - margin;
    Size {
        width: desired.width.min(max_width).max(MIN_POPUP_WIDTH_PX),
        height: desired.height.min(max_height).max(MIN_POPUP_HEIGHT_PX),
    }
}
