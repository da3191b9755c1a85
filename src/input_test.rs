#![allow(clippy::float_cmp)]

use super::*;

const POPUP: Rect = Rect { x: 100.0, y: 100.0, width: 300.0, height: 200.0 };

// =============================================================
// Gesture
// =============================================================

#[test]
fn gesture_default_is_idle() {
    assert_eq!(Gesture::default(), Gesture::Idle);
}

#[test]
fn gesture_active_flags() {
    assert!(!Gesture::Idle.is_active());
    assert!(Gesture::Dragging { grab: Point::new(0.0, 0.0) }.is_active());
    assert!(Gesture::Resizing { origin: Point::new(0.0, 0.0) }.is_active());
}

// =============================================================
// hits_resize_band
// =============================================================

#[test]
fn center_is_not_in_resize_band() {
    assert!(!hits_resize_band(Point::new(250.0, 200.0), POPUP));
}

#[test]
fn near_right_edge_is_resize() {
    assert!(hits_resize_band(Point::new(395.0, 150.0), POPUP));
}

#[test]
fn near_bottom_edge_is_resize() {
    assert!(hits_resize_band(Point::new(150.0, 295.0), POPUP));
}

#[test]
fn corner_is_resize() {
    assert!(hits_resize_band(Point::new(398.0, 298.0), POPUP));
}

#[test]
fn just_inside_band_boundary_is_not_resize() {
    // Exactly 10px from both edges: band is exclusive at its inner border.
    assert!(!hits_resize_band(Point::new(390.0, 290.0), POPUP));
}

#[test]
fn outside_popup_is_not_resize() {
    assert!(!hits_resize_band(Point::new(401.0, 301.0), POPUP));
    assert!(!hits_resize_band(Point::new(99.0, 295.0), POPUP));
}

// =============================================================
// gesture_for_pointer_down
// =============================================================

#[test]
fn down_on_body_starts_drag_with_grab_offset() {
    let gesture = gesture_for_pointer_down(Point::new(150.0, 180.0), POPUP);
    assert_eq!(gesture, Gesture::Dragging { grab: Point::new(50.0, 80.0) });
}

#[test]
fn down_in_band_starts_resize_with_popup_origin() {
    let gesture = gesture_for_pointer_down(Point::new(395.0, 295.0), POPUP);
    assert_eq!(gesture, Gesture::Resizing { origin: Point::new(100.0, 100.0) });
}

#[test]
fn down_outside_popup_stays_idle() {
    assert_eq!(gesture_for_pointer_down(Point::new(50.0, 50.0), POPUP), Gesture::Idle);
}
