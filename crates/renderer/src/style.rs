//! Palette configuration for tile rendering.
//!
//! A palette maps every drawable kind to a color plus a handful of stroke
//! widths. The built-in defaults render a conventional street-map look;
//! a JSON file with any subset of the fields overrides them.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tile_common::Color;

use crate::shapes::AreaKind;

/// Colors and stroke widths for every drawable kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Canvas fill where no shape covers a pixel.
    pub background: Color,

    // Area fills
    pub plain: Color,
    pub forest: Color,
    pub mountains: Color,
    pub desert: Color,
    pub water: Color,
    pub residential: Color,
    pub unknown_area: Color,

    // Linear features
    pub road: Color,
    pub railway: Color,
    pub railway_hatch: Color,
    pub border: Color,
    pub waterway: Color,

    // Markers
    pub place: Color,

    // Stroke geometry, in pixels
    pub road_width: f32,
    pub railway_width: f32,
    pub border_width: f32,
    pub waterway_width: f32,
    pub place_radius: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(255, 255, 255),
            plain: Color::rgb(191, 222, 162),
            forest: Color::rgb(106, 161, 98),
            mountains: Color::rgb(139, 126, 102),
            desert: Color::rgb(237, 218, 180),
            water: Color::rgb(170, 211, 223),
            residential: Color::rgb(216, 212, 204),
            unknown_area: Color::rgb(230, 230, 230),
            road: Color::rgb(255, 127, 80),
            railway: Color::rgb(80, 80, 80),
            railway_hatch: Color::rgb(255, 255, 255),
            border: Color::rgb(120, 120, 120),
            waterway: Color::rgb(170, 211, 223),
            place: Color::rgb(178, 34, 34),
            road_width: 2.0,
            railway_width: 3.0,
            border_width: 1.5,
            waterway_width: 2.5,
            place_radius: 5.0,
        }
    }
}

impl Palette {
    /// Load a palette from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| StyleError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse a palette from a JSON string. Missing fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        serde_json::from_str(json).map_err(|e| StyleError::Parse(e.to_string()))
    }

    /// Check that stroke geometry is usable.
    pub fn validate(&self) -> Result<(), StyleError> {
        for (name, value) in [
            ("road_width", self.road_width),
            ("railway_width", self.railway_width),
            ("border_width", self.border_width),
            ("waterway_width", self.waterway_width),
            ("place_radius", self.place_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(StyleError::InvalidValue(format!("{name} must be positive, got {value}")));
            }
        }
        Ok(())
    }

    /// Fill color for an area shape of the given kind.
    pub fn area_color(&self, kind: AreaKind) -> Color {
        match kind {
            AreaKind::Plain => self.plain,
            AreaKind::Forest => self.forest,
            AreaKind::Mountains => self.mountains,
            AreaKind::Desert => self.desert,
            AreaKind::Water => self.water,
            AreaKind::Residential => self.residential,
            AreaKind::Unknown => self.unknown_area,
        }
    }
}

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Failed to read style file: {0}")]
    Io(String),

    #[error("Failed to parse style JSON: {0}")]
    Parse(String),

    #[error("Invalid style value: {0}")]
    InvalidValue(String),
}
