#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::VIEWPORT_MARGIN_PX;

const VIEWPORT: Size = Size { width: 1280.0, height: 720.0 };
const POPUP: Size = Size { width: 250.0, height: 120.0 };

// =============================================================
// clamp_axis
// =============================================================

#[test]
fn clamp_axis_passes_through_in_range() {
    assert_eq!(clamp_axis(100.0, 250.0, 1280.0, 10.0), 100.0);
}

#[test]
fn clamp_axis_clamps_low() {
    assert_eq!(clamp_axis(-40.0, 250.0, 1280.0, 10.0), 10.0);
}

#[test]
fn clamp_axis_clamps_high() {
    // max = 1280 - 250 - 10 = 1020
    assert_eq!(clamp_axis(2000.0, 250.0, 1280.0, 10.0), 1020.0);
}

#[test]
fn clamp_axis_falls_back_to_margin_when_too_small() {
    // Element wider than the viewport: fall back to the leading margin.
    assert_eq!(clamp_axis(50.0, 500.0, 400.0, 10.0), 10.0);
}

#[test]
fn clamp_axis_exact_fit() {
    // Viewport exactly element + both margins: only one legal position.
    assert_eq!(clamp_axis(0.0, 380.0, 400.0, 10.0), 10.0);
    assert_eq!(clamp_axis(300.0, 380.0, 400.0, 10.0), 10.0);
}

// =============================================================
// clamp_to_viewport
// =============================================================

#[test]
fn clamp_to_viewport_in_range_unchanged() {
    let pos = clamp_to_viewport(Point::new(300.0, 200.0), POPUP, VIEWPORT, VIEWPORT_MARGIN_PX);
    assert_eq!(pos, Point::new(300.0, 200.0));
}

#[test]
fn clamp_to_viewport_result_always_within_bounds() {
    let candidates = [
        Point::new(-500.0, -500.0),
        Point::new(0.0, 0.0),
        Point::new(640.0, 360.0),
        Point::new(5000.0, 5000.0),
        Point::new(-1.0, 9999.0),
    ];
    for pos in candidates {
        let clamped = clamp_to_viewport(pos, POPUP, VIEWPORT, VIEWPORT_MARGIN_PX);
        assert!(clamped.x >= VIEWPORT_MARGIN_PX, "x too low for {pos:?}");
        assert!(clamped.y >= VIEWPORT_MARGIN_PX, "y too low for {pos:?}");
        assert!(
            clamped.x + POPUP.width <= VIEWPORT.width - VIEWPORT_MARGIN_PX,
            "x overflows for {pos:?}"
        );
        assert!(
            clamped.y + POPUP.height <= VIEWPORT.height - VIEWPORT_MARGIN_PX,
            "y overflows for {pos:?}"
        );
    }
}

#[test]
fn clamp_to_viewport_oversized_element_pins_to_margin() {
    let huge = Size::new(2000.0, 2000.0);
    let pos = clamp_to_viewport(Point::new(100.0, 100.0), huge, VIEWPORT, VIEWPORT_MARGIN_PX);
    assert_eq!(pos, Point::new(VIEWPORT_MARGIN_PX, VIEWPORT_MARGIN_PX));
}

// =============================================================
// follow_position
// =============================================================

#[test]
fn follow_prefers_bottom_right_quadrant() {
    let pos = follow_position(Point::new(100.0, 100.0), POPUP, VIEWPORT, VIEWPORT_MARGIN_PX);
    assert_eq!(pos, Point::new(110.0, 110.0));
}

#[test]
fn follow_flips_left_when_overflowing_right() {
    // Pointer near the right edge: popup must land on the pointer's left.
    let pointer = Point::new(1200.0, 100.0);
    let pos = follow_position(pointer, POPUP, VIEWPORT, VIEWPORT_MARGIN_PX);
    assert_eq!(pos.x, pointer.x - POPUP.width - 10.0);
    assert_eq!(pos.y, 110.0);
}

#[test]
fn follow_flips_up_when_overflowing_bottom() {
    let pointer = Point::new(100.0, 700.0);
    let pos = follow_position(pointer, POPUP, VIEWPORT, VIEWPORT_MARGIN_PX);
    assert_eq!(pos.x, 110.0);
    assert_eq!(pos.y, pointer.y - POPUP.height - 10.0);
}

#[test]
fn follow_flips_both_axes_in_bottom_right_corner() {
    let pointer = Point::new(1250.0, 700.0);
    let pos = follow_position(pointer, POPUP, VIEWPORT, VIEWPORT_MARGIN_PX);
    assert!(pos.x < pointer.x);
    assert!(pos.y < pointer.y);
    // And the flipped placement fits without clamping kicking in.
    assert_eq!(pos.x, pointer.x - POPUP.width - 10.0);
    assert_eq!(pos.y, pointer.y - POPUP.height - 10.0);
}

#[test]
fn follow_flip_avoids_overflow_when_one_side_fits() {
    // Anywhere the popup fits on at least one side of the pointer, the
    // chosen placement must not touch the clamp bounds.
    let pointer = Point::new(1000.0, 360.0);
    let pos = follow_position(pointer, POPUP, VIEWPORT, VIEWPORT_MARGIN_PX);
    assert!(pos.x + POPUP.width <= VIEWPORT.width - VIEWPORT_MARGIN_PX);
    assert!(pos.x >= VIEWPORT_MARGIN_PX);
}

#[test]
fn follow_result_always_clamped() {
    // Sweep pointer positions, including ones outside the viewport.
    let mut x = -100.0;
    while x < VIEWPORT.width + 100.0 {
        let mut y = -100.0;
        while y < VIEWPORT.height + 100.0 {
            let pos = follow_position(Point::new(x, y), POPUP, VIEWPORT, VIEWPORT_MARGIN_PX);
            assert!(pos.x >= VIEWPORT_MARGIN_PX);
            assert!(pos.y >= VIEWPORT_MARGIN_PX);
            assert!(pos.x + POPUP.width <= VIEWPORT.width - VIEWPORT_MARGIN_PX);
            assert!(pos.y + POPUP.height <= VIEWPORT.height - VIEWPORT_MARGIN_PX);
            y += 97.0;
        }
        x += 97.0;
    }
}

#[test]
fn follow_in_tiny_viewport_pins_to_margin() {
    let tiny = Size::new(200.0, 100.0);
    let pos = follow_position(Point::new(50.0, 50.0), POPUP, tiny, VIEWPORT_MARGIN_PX);
    assert_eq!(pos, Point::new(VIEWPORT_MARGIN_PX, VIEWPORT_MARGIN_PX));
}

// =============================================================
// clamp_resize
// =============================================================

#[test]
fn resize_passes_through_in_range() {
    let size = clamp_resize(Point::new(100.0, 100.0), Size::new(400.0, 300.0), VIEWPORT, VIEWPORT_MARGIN_PX);
    assert_eq!(size, Size::new(400.0, 300.0));
}

#[test]
fn resize_enforces_minimum() {
    let size = clamp_resize(Point::new(100.0, 100.0), Size::new(50.0, 20.0), VIEWPORT, VIEWPORT_MARGIN_PX);
    assert_eq!(size, Size::new(MIN_POPUP_WIDTH_PX, MIN_POPUP_HEIGHT_PX));
}

#[test]
fn resize_caps_at_viewport_margin() {
    let origin = Point::new(1000.0, 500.0);
    let size = clamp_resize(origin, Size::new(5000.0, 5000.0), VIEWPORT, VIEWPORT_MARGIN_PX);
    assert_eq!(size.width, VIEWPORT.width - origin.x - VIEWPORT_MARGIN_PX);
    assert_eq!(size.height, VIEWPORT.height - origin.y - VIEWPORT_MARGIN_PX);
}

#[test]
fn resize_minimum_wins_near_edge() {
    // Origin so close to the edge that the cap is below the minimum.
    let origin = Point::new(VIEWPORT.width - 50.0, VIEWPORT.height - 50.0);
    let size = clamp_resize(origin, Size::new(40.0, 40.0), VIEWPORT, VIEWPORT_MARGIN_PX);
    assert_eq!(size, Size::new(MIN_POPUP_WIDTH_PX, MIN_POPUP_HEIGHT_PX));
}
