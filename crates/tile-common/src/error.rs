//! Error types for tile rendering.

use thiserror::Error;

/// Result type alias using TileError.
pub type TileResult<T> = Result<T, TileError>;

/// Primary error type for tile rendering operations.
///
/// Classification outcomes are deliberately not represented here: a feature
/// that matches no category, or carries no coordinates, is dropped rather
/// than surfaced as an error.
#[derive(Debug, Error)]
pub enum TileError {
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encoding(String),
}
