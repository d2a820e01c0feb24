//! Input feature records as produced by an external vector-data loader.

use std::collections::HashMap;

/// A projected 2D coordinate. X grows eastward, Y grows northward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometry kind of a map feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    Point,
    Line,
    Polygon,
}

/// One geographic entity: a geometry plus a semantic tag map.
///
/// Features are owned by the caller and read-only to the rendering core;
/// classification borrows them and copies out what it needs.
#[derive(Debug, Clone)]
pub struct MapFeature {
    pub geometry: GeometryType,
    pub coordinates: Vec<Point>,
    pub tags: HashMap<String, String>,
}

impl MapFeature {
    /// Create a feature with no tags.
    pub fn new(geometry: GeometryType, coordinates: Vec<Point>) -> Self {
        Self {
            geometry,
            coordinates,
            tags: HashMap::new(),
        }
    }

    /// Builder-style tag attachment, mainly for tests and fixtures.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Look up a tag value by key.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Check for the presence of a tag key, regardless of value.
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }
}
