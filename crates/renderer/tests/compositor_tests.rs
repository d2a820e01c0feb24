//! End-to-end compositing tests: background fill, paint order, and the
//! degenerate cases that must not fail.

use renderer::{render, render_to_png, tessellate_all, Palette, ShapeQueue};
use test_utils::fixtures;
use tile_common::{BoundingBox, Color, Point, TileError};
use tiny_skia::Pixmap;

fn pixel_rgb(canvas: &Pixmap, x: u32, y: u32) -> (u8, u8, u8) {
    let px = canvas.pixel(x, y).unwrap().demultiply();
    (px.red(), px.green(), px.blue())
}

fn rgb(color: Color) -> (u8, u8, u8) {
    (color.r, color.g, color.b)
}

// ============================================================================
// Empty input renders a background-only canvas
// ============================================================================

#[test]
fn test_empty_feature_set_renders_background_only() {
    let (queue, bbox) = tessellate_all(&[]);
    let palette = Palette::default();

    let canvas = render(queue, &bbox, 50, 50, &palette).unwrap();

    assert_eq!(canvas.width(), 50);
    assert_eq!(canvas.height(), 50);
    for y in 0..50 {
        for x in 0..50 {
            assert_eq!(pixel_rgb(&canvas, x, y), rgb(palette.background));
        }
    }
}

#[test]
fn test_all_features_unclassifiable_renders_background_only() {
    let features = vec![fixtures::unclassifiable(), fixtures::unclassifiable()];
    let (queue, bbox) = tessellate_all(&features);
    assert!(bbox.is_empty());

    let palette = Palette::default();
    let canvas = render(queue, &bbox, 32, 32, &palette).unwrap();
    assert_eq!(pixel_rgb(&canvas, 16, 16), rgb(palette.background));
}

// ============================================================================
// Single building tile
// ============================================================================

#[test]
fn test_single_building_fills_its_footprint() {
    let features = vec![fixtures::building(5.0, 5.0, 5.0)];
    let (queue, bbox) = tessellate_all(&features);

    // The bounding box is exactly the polygon's extent.
    assert_eq!(bbox, BoundingBox::new(0.0, 0.0, 10.0, 10.0));

    let palette = Palette::default();
    let canvas = render(queue, &bbox, 100, 100, &palette).unwrap();

    // The footprint spans the whole box, so the canvas center is painted.
    assert_eq!(pixel_rgb(&canvas, 50, 50), rgb(palette.residential));
}

#[test]
fn test_background_shows_between_shapes() {
    let features = vec![
        fixtures::building(1.0, 1.0, 1.0),
        fixtures::building(9.0, 9.0, 1.0),
    ];
    let (queue, bbox) = tessellate_all(&features);
    let palette = Palette::default();

    let canvas = render(queue, &bbox, 100, 100, &palette).unwrap();

    // Inside the south-west building (geographic (1,1) is near the bottom).
    assert_eq!(pixel_rgb(&canvas, 10, 90), rgb(palette.residential));
    // The gap between the buildings stays background.
    assert_eq!(pixel_rgb(&canvas, 50, 50), rgb(palette.background));
}

// ============================================================================
// Paint order
// ============================================================================

#[test]
fn test_place_paints_over_road() {
    let features = vec![
        fixtures::town(5.0, 5.0),
        fixtures::road(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
    ];
    let (queue, bbox) = tessellate_all(&features);
    let palette = Palette::default();

    let canvas = render(queue, &bbox, 100, 100, &palette).unwrap();

    // The road crosses the town marker, but the marker has the higher
    // z-index and is painted last: its center pixel is pure place color.
    assert_eq!(pixel_rgb(&canvas, 50, 50), rgb(palette.place));

    // Away from the marker the road is visible.
    assert_ne!(pixel_rgb(&canvas, 20, 80), rgb(palette.background));
}

#[test]
fn test_road_paints_over_water_area() {
    let features = vec![
        fixtures::road(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
        fixtures::lake(5.0, 5.0, 5.0),
    ];
    let (queue, bbox) = tessellate_all(&features);
    let palette = Palette::default();

    let canvas = render(queue, &bbox, 100, 100, &palette).unwrap();

    // The lake fills the tile; along the road's centerline the pixel no
    // longer reads as pure water.
    assert_ne!(pixel_rgb(&canvas, 50, 50), rgb(palette.water));
    // Off the road it does.
    assert_eq!(pixel_rgb(&canvas, 20, 20), rgb(palette.water));
}

// ============================================================================
// Degenerate extents
// ============================================================================

#[test]
fn test_single_point_extent_renders_without_panic() {
    let features = vec![fixtures::town(42.0, 42.0)];
    let (queue, bbox) = tessellate_all(&features);
    assert_eq!(bbox.width(), 0.0);

    let palette = Palette::default();
    let canvas = render(queue, &bbox, 64, 64, &palette).unwrap();

    // Identity-scale fallback puts the marker at the bottom-left corner.
    assert_eq!(pixel_rgb(&canvas, 1, 62), rgb(palette.place));
}

#[test]
fn test_zero_canvas_dimension_is_an_error() {
    let palette = Palette::default();
    let result = render(ShapeQueue::new(), &BoundingBox::empty(), 0, 50, &palette);

    assert!(matches!(
        result,
        Err(TileError::InvalidDimensions { width: 0, height: 50 })
    ));
}

// ============================================================================
// PNG output
// ============================================================================

#[test]
fn test_render_to_png_produces_valid_signature() {
    let features = test_utils::town_grid(4, 4);
    let (queue, bbox) = tessellate_all(&features);

    let png = render_to_png(queue, &bbox, 64, 64, &Palette::default()).unwrap();
    assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}
