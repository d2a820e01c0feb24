//! Rasterization of classified vector map features into image tiles.
//!
//! The pipeline for one tile:
//! 1. [`classify::tessellate`] each feature into a drawable [`shapes::Shape`],
//!    expanding a shared [`tile_common::BoundingBox`] and filling a
//!    z-ordered [`queue::ShapeQueue`].
//! 2. [`compositor::render`] drains the queue lowest-z-first onto a canvas,
//!    applying a single [`transform::PixelTransform`] derived from the box.

pub mod classify;
pub mod compositor;
pub mod png;
pub mod queue;
pub mod shapes;
pub mod style;
pub mod transform;

pub use classify::{classify, tessellate, tessellate_all, tessellate_parallel, ShapeCategory};
pub use compositor::{render, render_to_png};
pub use queue::ShapeQueue;
pub use shapes::{AreaKind, Shape};
pub use style::Palette;
pub use transform::PixelTransform;
