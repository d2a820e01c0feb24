//! Common types shared across the vector-tiler workspace.

pub mod bbox;
pub mod color;
pub mod error;
pub mod feature;

pub use bbox::BoundingBox;
pub use color::{Color, ColorParseError};
pub use error::{TileError, TileResult};
pub use feature::{GeometryType, MapFeature, Point};
