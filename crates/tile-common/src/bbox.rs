//! Bounding box types and operations.

use crate::feature::Point;

/// Minimal enclosing rectangle over the footprint coordinates of one tile's
/// shapes, in projected (pre-pixel) coordinates.
///
/// A box starts in an empty sentinel state (`+inf` minimums, `-inf`
/// maximums) and grows monotonically as footprints are folded in. Expansion
/// is associative and commutative, so partial boxes accumulated by
/// independent workers can be merged in any order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The empty sentinel: contains no points and absorbs any expansion.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// True until at least one point has been folded in.
    ///
    /// An empty box must not be used as a valid extent; the coordinate
    /// transform treats it as degenerate.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Grow the box to include a single coordinate.
    pub fn expand_point(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Grow the box to include every coordinate of a shape footprint.
    pub fn expand(&mut self, points: &[Point]) {
        for p in points {
            self.expand_point(p.x, p.y);
        }
    }

    /// Combine two boxes into the smallest box containing both.
    ///
    /// Merging with an empty box is the identity.
    pub fn merge(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if a point is contained within this box.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinel() {
        let bbox = BoundingBox::empty();
        assert!(bbox.is_empty());

        let mut expanded = bbox;
        expanded.expand_point(3.0, 4.0);
        assert!(!expanded.is_empty());
        assert_eq!(expanded.min_x, 3.0);
        assert_eq!(expanded.max_x, 3.0);
        assert_eq!(expanded.min_y, 4.0);
        assert_eq!(expanded.max_y, 4.0);
    }

    #[test]
    fn test_expand_points() {
        let mut bbox = BoundingBox::empty();
        bbox.expand(&[Point::new(-1.0, 2.0), Point::new(5.0, -3.0)]);
        assert_eq!(bbox.min_x, -1.0);
        assert_eq!(bbox.max_x, 5.0);
        assert_eq!(bbox.min_y, -3.0);
        assert_eq!(bbox.max_y, 2.0);
    }

    #[test]
    fn test_merge_identity() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let merged = bbox.merge(&BoundingBox::empty());
        assert_eq!(merged, bbox);
    }
}
