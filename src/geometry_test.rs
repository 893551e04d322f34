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
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn point_delta_from_origin() {
    let d = Point::new(130.0, 90.0).delta_from(Point::new(100.0, 100.0));
    assert_eq!(d, Point::new(30.0, -10.0));
}

#[test]
fn point_delta_from_self_is_zero() {
    let p = Point::new(-7.5, 12.25);
    assert_eq!(p.delta_from(p), Point::new(0.0, 0.0));
}

// --- Geometry ---

#[test]
fn geometry_new_sets_fields() {
    let g = Geometry::new(10.0, 20.0, 300.0, 200.0);
    assert_eq!(g.position, Point::new(10.0, 20.0));
    assert_eq!(g.size, Size::new(300.0, 200.0));
}

#[test]
fn geometry_edges() {
    let e = Geometry::new(10.0, 20.0, 300.0, 200.0).edges();
    assert_eq!(e.left, 10.0);
    assert_eq!(e.top, 20.0);
    assert_eq!(e.right, 310.0);
    assert_eq!(e.bottom, 220.0);
}

#[test]
fn geometry_edges_with_negative_position() {
    let e = Geometry::new(-50.0, -25.0, 40.0, 10.0).edges();
    assert_eq!(e.left, -50.0);
    assert_eq!(e.right, -10.0);
    assert_eq!(e.top, -25.0);
    assert_eq!(e.bottom, -15.0);
}

#[test]
fn geometry_serializes_nested() {
    let g = Geometry::new(1.0, 2.0, 3.0, 4.0);
    let json = serde_json::to_value(g).unwrap();
    assert_eq!(json["position"]["x"], 1.0);
    assert_eq!(json["size"]["height"], 4.0);
}
