#![allow(clippy::float_cmp)]

use super::*;

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    let p = Point::default();
    assert_eq!(p, Point::new(0.0, 0.0));
}

// --- Size ---

#[test]
fn size_new() {
    let s = Size::new(250.0, 150.0);
    assert_eq!(s.width, 250.0);
    assert_eq!(s.height, 150.0);
}

// --- Rect ---

#[test]
fn rect_from_origin_size() {
    let r = Rect::from_origin_size(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
    assert_eq!(r, Rect::new(10.0, 20.0, 30.0, 40.0));
}

#[test]
fn rect_origin_and_size_round_trip() {
    let r = Rect::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(r.origin(), Point::new(5.0, 6.0));
    assert_eq!(r.size(), Size::new(7.0, 8.0));
}

#[test]
fn rect_right_and_bottom() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(r.right(), 110.0);
    assert_eq!(r.bottom(), 70.0);
}

#[test]
fn rect_contains_interior_point() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(5.0, 5.0)));
}

#[test]
fn rect_contains_edges() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
}

#[test]
fn rect_excludes_outside_point() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!r.contains(Point::new(10.1, 5.0)));
    assert!(!r.contains(Point::new(5.0, -0.1)));
}
