//! Drawable shape variants and their rasterization.
//!
//! Shapes come out of classification carrying geographic coordinates, are
//! mutated in place exactly once by [`PixelTransform`], then paint themselves
//! onto a `tiny_skia` pixmap. Painting order is governed by [`Shape::z_index`].

use tile_common::{Color, Point};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, StrokeDash, Transform,
};

use crate::style::Palette;
use crate::transform::PixelTransform;

/// Sub-kind for the umbrella area shape covering natural land, land use,
/// buildings and amenities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaKind {
    Plain,
    Forest,
    Mountains,
    Desert,
    Water,
    Residential,
    Unknown,
}

impl AreaKind {
    /// Map an OSM-style `natural` tag value to an area kind.
    ///
    /// Unrecognized values fall back to [`AreaKind::Unknown`] rather than
    /// being rejected, so a tile still renders something sensible for tag
    /// vocabularies newer than this table.
    pub fn from_natural_tag(value: &str) -> AreaKind {
        match value {
            "fell" | "grassland" | "heath" | "moor" | "scrub" | "wetland" => AreaKind::Plain,
            "wood" | "tree_row" => AreaKind::Forest,
            "bare_rock" | "rock" | "scree" => AreaKind::Mountains,
            "beach" | "sand" => AreaKind::Desert,
            "water" => AreaKind::Water,
            _ => AreaKind::Unknown,
        }
    }

    fn z_index(self) -> i32 {
        match self {
            AreaKind::Unknown => 8,
            AreaKind::Desert => 9,
            AreaKind::Plain => 10,
            AreaKind::Forest => 11,
            AreaKind::Mountains => 13,
            AreaKind::Water => 40,
            AreaKind::Residential => 41,
        }
    }
}

/// A classified, renderable shape for one tile.
///
/// Draw priorities (lower paints first):
///
/// | shape                  | z-index |
/// |------------------------|---------|
/// | `Area` (by kind)       | 8–41    |
/// | `Border`               | 30      |
/// | `Waterway`             | 40      |
/// | `Railway`              | 45      |
/// | `Road`                 | 50      |
/// | `Place`                | 60      |
///
/// Base land-use polygons sit at the bottom, linear infrastructure above
/// them, and populated-place markers on top of everything.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled polygon for natural areas, land use, buildings and amenities.
    /// `polygon` records whether the source geometry was closed; line
    /// variants are stroked instead of filled.
    Area {
        kind: AreaKind,
        polygon: bool,
        coords: Vec<Point>,
    },
    Railway { coords: Vec<Point> },
    Road { coords: Vec<Point> },
    /// Water bodies and watercourses. The polygon variant fills, the line
    /// variant strokes a channel.
    Waterway { polygon: bool, coords: Vec<Point> },
    Border { coords: Vec<Point> },
    /// Populated-place marker, painted last as the foreground layer.
    Place { coords: Vec<Point> },
}

impl Shape {
    /// Integer draw priority; fixed per variant at construction time.
    pub fn z_index(&self) -> i32 {
        match self {
            Shape::Area { kind, .. } => kind.z_index(),
            Shape::Border { .. } => 30,
            Shape::Waterway { .. } => 40,
            Shape::Railway { .. } => 45,
            Shape::Road { .. } => 50,
            Shape::Place { .. } => 60,
        }
    }

    /// The shape's footprint coordinates.
    pub fn coordinates(&self) -> &[Point] {
        match self {
            Shape::Area { coords, .. }
            | Shape::Railway { coords }
            | Shape::Road { coords }
            | Shape::Waterway { coords, .. }
            | Shape::Border { coords }
            | Shape::Place { coords } => coords,
        }
    }

    fn coordinates_mut(&mut self) -> &mut [Point] {
        match self {
            Shape::Area { coords, .. }
            | Shape::Railway { coords }
            | Shape::Road { coords }
            | Shape::Waterway { coords, .. }
            | Shape::Border { coords }
            | Shape::Place { coords } => coords,
        }
    }

    /// Map the stored coordinates from geographic to pixel space, in place.
    ///
    /// Called exactly once per shape, by the compositor, before [`Shape::draw`].
    pub fn translate_and_scale(&mut self, transform: &PixelTransform) {
        for p in self.coordinates_mut() {
            *p = transform.apply(*p);
        }
    }

    /// Paint this shape onto the canvas using the palette's colors.
    ///
    /// Expects pixel-space coordinates; degenerate footprints (too few
    /// points for the primitive) are skipped with a warning.
    pub fn draw(&self, canvas: &mut Pixmap, palette: &Palette) {
        match self {
            Shape::Area {
                kind,
                polygon,
                coords,
            } => {
                let color = palette.area_color(*kind);
                if *polygon {
                    fill_polygon(canvas, coords, color);
                } else {
                    stroke_polyline(canvas, coords, color, 1.0, None);
                }
            }
            Shape::Railway { coords } => {
                // Two-tone track: dark bed with a dashed light overlay.
                stroke_polyline(canvas, coords, palette.railway, palette.railway_width, None);
                stroke_polyline(
                    canvas,
                    coords,
                    palette.railway_hatch,
                    palette.railway_width * 0.5,
                    Some(&[4.0, 4.0]),
                );
            }
            Shape::Road { coords } => {
                stroke_polyline(canvas, coords, palette.road, palette.road_width, None);
            }
            Shape::Waterway { polygon, coords } => {
                if *polygon {
                    fill_polygon(canvas, coords, palette.water);
                } else {
                    stroke_polyline(canvas, coords, palette.waterway, palette.waterway_width, None);
                }
            }
            Shape::Border { coords } => {
                stroke_polyline(
                    canvas,
                    coords,
                    palette.border,
                    palette.border_width,
                    Some(&[6.0, 4.0]),
                );
            }
            Shape::Place { coords } => {
                if let Some(center) = coords.first() {
                    fill_circle(canvas, *center, palette.place_radius, palette.place);
                }
            }
        }
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn build_path(coords: &[Point], close: bool) -> Option<Path> {
    let first = coords.first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in &coords[1..] {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

fn fill_polygon(canvas: &mut Pixmap, coords: &[Point], color: Color) {
    if coords.len() < 3 {
        tracing::warn!(points = coords.len(), "skipping polygon with too few points");
        return;
    }
    if let Some(path) = build_path(coords, true) {
        canvas.fill_path(
            &path,
            &paint_for(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

fn stroke_polyline(
    canvas: &mut Pixmap,
    coords: &[Point],
    color: Color,
    width: f32,
    dash: Option<&[f32]>,
) {
    if coords.len() < 2 {
        tracing::warn!(points = coords.len(), "skipping polyline with too few points");
        return;
    }

    let mut stroke = Stroke::default();
    stroke.width = width;
    stroke.line_cap = LineCap::Round;
    stroke.line_join = LineJoin::Round;
    if let Some(pattern) = dash {
        stroke.dash = StrokeDash::new(pattern.to_vec(), 0.0);
    }

    if let Some(path) = build_path(coords, false) {
        canvas.stroke_path(&path, &paint_for(color), &stroke, Transform::identity(), None);
    }
}

fn fill_circle(canvas: &mut Pixmap, center: Point, radius: f32, color: Color) {
    if let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius) {
        canvas.fill_path(
            &path,
            &paint_for(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}
