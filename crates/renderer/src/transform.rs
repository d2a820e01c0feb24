//! Geographic-to-pixel coordinate mapping for one tile.

use tile_common::{BoundingBox, Point};

/// Uniform scale and translation derived once per tile from the accumulated
/// bounding box and the target canvas size.
///
/// A single scale factor (the smaller of the per-axis ratios) preserves
/// aspect ratio and guarantees the full extent fits on the canvas. The Y
/// axis is flipped: geographic Y grows northward, pixel Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelTransform {
    scale: f64,
    min_x: f64,
    min_y: f64,
    canvas_height: f64,
}

impl PixelTransform {
    /// Derive the transform for a canvas of `width` x `height` pixels.
    ///
    /// Degenerate extents are guarded rather than propagated: an empty box
    /// (no renderable features) or a zero-extent box (all coordinates
    /// coincident) falls back to a 1:1 scale so no infinity or NaN ever
    /// reaches pixel coordinates.
    pub fn compute(bbox: &BoundingBox, width: u32, height: u32) -> Self {
        if bbox.is_empty() {
            return Self {
                scale: 1.0,
                min_x: 0.0,
                min_y: 0.0,
                canvas_height: height as f64,
            };
        }

        let scale_x = width as f64 / bbox.width();
        let scale_y = height as f64 / bbox.height();
        let scale = scale_x.min(scale_y);
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };

        Self {
            scale,
            min_x: bbox.min_x,
            min_y: bbox.min_y,
            canvas_height: height as f64,
        }
    }

    /// The uniform scale factor, in pixels per coordinate unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map one geographic coordinate into pixel space.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.min_x) * self.scale,
            self.canvas_height - (p.y - self.min_y) * self.scale,
        )
    }
}
