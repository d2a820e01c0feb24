//! Synthetic feature batches for integration tests and benchmarks.

use tile_common::{GeometryType, MapFeature, Point};

use crate::fixtures::square;

/// Generate a `cols` x `rows` grid of mixed features resembling a small
/// town: building blocks, grass patches, ponds, and a road every fourth
/// row. Deterministic for a fixed grid size.
pub fn town_grid(cols: usize, rows: usize) -> Vec<MapFeature> {
    let mut features = Vec::with_capacity(cols * rows + rows / 4 + 1);

    for row in 0..rows {
        for col in 0..cols {
            let cx = col as f64 * 10.0 + 5.0;
            let cy = row as f64 * 10.0 + 5.0;
            let cell = MapFeature::new(GeometryType::Polygon, square(cx, cy, 4.0));

            features.push(match (col + row) % 4 {
                0 => cell.with_tag("building", "yes"),
                1 => cell.with_tag("landuse", "grass"),
                2 => cell.with_tag("natural", "water"),
                _ => cell.with_tag("landuse", "residential"),
            });
        }
    }

    for row in (0..rows).step_by(4) {
        let y = row as f64 * 10.0;
        features.push(
            MapFeature::new(
                GeometryType::Line,
                vec![Point::new(0.0, y), Point::new(cols as f64 * 10.0, y)],
            )
            .with_tag("highway", "residential"),
        );
    }

    // One town marker in the middle.
    features.push(
        MapFeature::new(
            GeometryType::Point,
            vec![Point::new(cols as f64 * 5.0, rows as f64 * 5.0)],
        )
        .with_tag("place", "town"),
    );

    features
}
