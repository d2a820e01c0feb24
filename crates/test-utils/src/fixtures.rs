//! Canned map features for classification and rendering tests.

use tile_common::{GeometryType, MapFeature, Point};

/// Axis-aligned square footprint centered on `(cx, cy)`.
pub fn square(cx: f64, cy: f64, half_size: f64) -> Vec<Point> {
    vec![
        Point::new(cx - half_size, cy - half_size),
        Point::new(cx + half_size, cy - half_size),
        Point::new(cx + half_size, cy + half_size),
        Point::new(cx - half_size, cy + half_size),
    ]
}

/// A tagged building polygon.
pub fn building(cx: f64, cy: f64, half_size: f64) -> MapFeature {
    MapFeature::new(GeometryType::Polygon, square(cx, cy, half_size)).with_tag("building", "yes")
}

/// A residential road running between two coordinates.
pub fn road(from: Point, to: Point) -> MapFeature {
    MapFeature::new(GeometryType::Line, vec![from, to]).with_tag("highway", "residential")
}

/// A named town marker point.
pub fn town(x: f64, y: f64) -> MapFeature {
    MapFeature::new(GeometryType::Point, vec![Point::new(x, y)])
        .with_tag("place", "town")
        .with_tag("name", "Testville")
}

/// A natural-water lake polygon.
pub fn lake(cx: f64, cy: f64, half_size: f64) -> MapFeature {
    MapFeature::new(GeometryType::Polygon, square(cx, cy, half_size)).with_tag("natural", "water")
}

/// A national administrative border line.
pub fn national_border(points: Vec<Point>) -> MapFeature {
    MapFeature::new(GeometryType::Line, points)
        .with_tag("boundary", "administrative")
        .with_tag("admin_level", "2")
}

/// A feature with tags no category predicate matches.
pub fn unclassifiable() -> MapFeature {
    MapFeature::new(GeometryType::Point, vec![Point::new(0.0, 0.0)])
        .with_tag("tourism", "viewpoint")
}
