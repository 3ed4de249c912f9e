#![allow(clippy::float_cmp)]

use super::*;

// --- subtract ---

#[test]
fn subtract_is_component_wise() {
    let r = subtract(Point::new(10.0, 4.0), Point::new(3.0, 7.0));
    assert_eq!(r, Point::new(7.0, -3.0));
}

#[test]
fn subtract_self_is_zero() {
    for p in [Point::new(0.0, 0.0), Point::new(-12.5, 3.25), Point::new(1e6, -1e6)] {
        assert_eq!(subtract(p, p), Point::ZERO);
    }
}

#[test]
fn sub_operator_matches_subtract() {
    let a = Point::new(100.0, 50.0);
    let b = Point::new(20.0, 70.0);
    assert_eq!(a - b, subtract(a, b));
}

#[test]
fn point_default_is_zero() {
    assert_eq!(Point::default(), Point::ZERO);
}

// --- PartialPoint ---

#[test]
fn partial_point_complete_with_both_coords() {
    let p = PartialPoint::new(Some(5.0), Some(6.0));
    assert_eq!(p.complete(), Some(Point::new(5.0, 6.0)));
}

#[test]
fn partial_point_missing_x_is_incomplete() {
    assert_eq!(PartialPoint::new(None, Some(6.0)).complete(), None);
}

#[test]
fn partial_point_missing_y_is_incomplete() {
    assert_eq!(PartialPoint::new(Some(5.0), None).complete(), None);
}

#[test]
fn partial_point_nan_is_incomplete() {
    assert_eq!(PartialPoint::new(Some(f64::NAN), Some(1.0)).complete(), None);
    assert_eq!(PartialPoint::new(Some(1.0), Some(f64::INFINITY)).complete(), None);
}

#[test]
fn partial_point_from_point() {
    let p: PartialPoint = Point::new(1.0, 2.0).into();
    assert_eq!(p, PartialPoint::new(Some(1.0), Some(2.0)));
}

#[test]
fn partial_point_deserializes_missing_fields_as_none() {
    let p: PartialPoint = serde_json::from_str(r#"{"y": 4}"#).unwrap();
    assert_eq!(p.x, None);
    assert_eq!(p.y, Some(4.0));
}

#[test]
fn partial_point_deserializes_null_as_none() {
    let p: PartialPoint = serde_json::from_str(r#"{"x": null, "y": 4}"#).unwrap();
    assert_eq!(p.x, None);
}

// --- Size ---

#[test]
fn size_center_is_half_extent() {
    assert_eq!(Size::new(40.0, 20.0).center(), Point::new(20.0, 10.0));
}

#[test]
fn size_center_of_odd_extent_is_fractional() {
    assert_eq!(Size::new(33.0, 7.0).center(), Point::new(16.5, 3.5));
}
