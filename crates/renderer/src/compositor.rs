//! Canvas allocation and priority-ordered compositing.

use tile_common::{BoundingBox, TileError, TileResult};
use tiny_skia::Pixmap;

use crate::png;
use crate::queue::ShapeQueue;
use crate::style::Palette;
use crate::transform::PixelTransform;

/// Rasterize a queue of classified shapes onto a fresh canvas.
///
/// Fills the background, computes the coordinate transform once from the
/// accumulated bounding box, then drains the queue lowest-z-index-first,
/// mapping each shape into pixel space and letting it paint itself. The
/// drain is destructive: the queue and its shapes are consumed. An empty
/// queue is well-defined and yields a background-only canvas.
///
/// The only error path is a zero-sized canvas; every geometric degeneracy
/// has a non-failing fallback.
pub fn render(
    mut shapes: ShapeQueue,
    bounding_box: &BoundingBox,
    width: u32,
    height: u32,
    palette: &Palette,
) -> TileResult<Pixmap> {
    let mut canvas =
        Pixmap::new(width, height).ok_or(TileError::InvalidDimensions { width, height })?;

    let bg = palette.background;
    canvas.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));

    let transform = PixelTransform::compute(bounding_box, width, height);
    tracing::debug!(
        shapes = shapes.len(),
        scale = transform.scale(),
        width,
        height,
        "rendering tile"
    );

    while let Some(mut shape) = shapes.pop() {
        shape.translate_and_scale(&transform);
        shape.draw(&mut canvas, palette);
    }

    Ok(canvas)
}

/// Render a tile and encode it as PNG in one step.
pub fn render_to_png(
    shapes: ShapeQueue,
    bounding_box: &BoundingBox,
    width: u32,
    height: u32,
    palette: &Palette,
) -> TileResult<Vec<u8>> {
    let canvas = render(shapes, bounding_box, width, height, palette)?;
    png::encode_auto(canvas.data(), width as usize, height as usize)
}
