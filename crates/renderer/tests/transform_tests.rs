//! Coordinate transform tests: corner mapping, aspect preservation, and
//! degenerate-extent guards.

use renderer::PixelTransform;
use test_utils::assert_coords_approx_eq;
use tile_common::{BoundingBox, Point};

const EPS: f64 = 1e-9;

#[test]
fn test_corners_map_to_canvas_extremes() {
    // Box aspect matches canvas aspect, so both axes fill completely.
    let bbox = BoundingBox::new(10.0, 20.0, 30.0, 60.0);
    let t = PixelTransform::compute(&bbox, 100, 200);
    assert_eq!(t.scale(), 5.0);

    let bottom_left = t.apply(Point::new(10.0, 20.0));
    assert_coords_approx_eq!((bottom_left.x, bottom_left.y), (0.0, 200.0), EPS);

    let top_right = t.apply(Point::new(30.0, 60.0));
    assert_coords_approx_eq!((top_right.x, top_right.y), (100.0, 0.0), EPS);
}

#[test]
fn test_min_scale_axis_leaves_slack_on_other_axis() {
    // 20 wide, 40 tall into a square canvas: Y limits the scale, X only
    // reaches half the canvas width.
    let bbox = BoundingBox::new(10.0, 20.0, 30.0, 60.0);
    let t = PixelTransform::compute(&bbox, 100, 100);
    assert_eq!(t.scale(), 2.5);

    let top_right = t.apply(Point::new(30.0, 60.0));
    assert_coords_approx_eq!((top_right.x, top_right.y), (50.0, 0.0), EPS);

    let bottom_left = t.apply(Point::new(10.0, 20.0));
    assert_coords_approx_eq!((bottom_left.x, bottom_left.y), (0.0, 100.0), EPS);
}

#[test]
fn test_interior_point_stays_inside_canvas() {
    let bbox = BoundingBox::new(0.0, 0.0, 50.0, 50.0);
    let t = PixelTransform::compute(&bbox, 256, 256);

    let p = t.apply(Point::new(25.0, 25.0));
    assert!(p.x > 0.0 && p.x < 256.0);
    assert!(p.y > 0.0 && p.y < 256.0);
}

#[test]
fn test_zero_width_box_uses_finite_scale() {
    // A vertical line: width is zero, height is not. The Y ratio still
    // produces a usable uniform scale.
    let bbox = BoundingBox::new(5.0, 0.0, 5.0, 10.0);
    let t = PixelTransform::compute(&bbox, 100, 100);
    assert_eq!(t.scale(), 10.0);

    let p = t.apply(Point::new(5.0, 10.0));
    assert!(p.x.is_finite() && p.y.is_finite());
}

#[test]
fn test_single_point_box_does_not_produce_infinity() {
    let bbox = BoundingBox::new(7.0, 7.0, 7.0, 7.0);
    let t = PixelTransform::compute(&bbox, 100, 100);
    assert_eq!(t.scale(), 1.0);

    let p = t.apply(Point::new(7.0, 7.0));
    assert_coords_approx_eq!((p.x, p.y), (0.0, 100.0), EPS);
}

#[test]
fn test_empty_box_is_safe() {
    let t = PixelTransform::compute(&BoundingBox::empty(), 64, 64);
    assert_eq!(t.scale(), 1.0);

    let p = t.apply(Point::new(1.0, 2.0));
    assert!(p.x.is_finite() && p.y.is_finite());
}
