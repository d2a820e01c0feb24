//! Feature classification: ordered predicates over geometry and tags.
//!
//! Each category has a named predicate. Every predicate is evaluated for
//! every feature so diagnostic output stays stable, but the winner is the
//! first match in a fixed precedence order (see [`PredicateMatches::first_match`]).
//! The order is load-bearing and covered by tests: a feature tagged as both
//! `natural=wood` and `building=yes` is a natural area, never a building.

use rayon::prelude::*;
use tile_common::{BoundingBox, GeometryType, MapFeature};

use crate::queue::ShapeQueue;
use crate::shapes::{AreaKind, Shape};

/// The renderable category assigned to a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    NaturalArea,
    Railway,
    Road,
    Waterway,
    AdministrativeBorder,
    PopulatedPlace,
    Building,
    Forest,
    PublicAmenity,
    PrivateAmenity,
    PlainLanduse,
    ResidentialLanduse,
}

/// `amenity` values treated as public services; everything else with an
/// `amenity` tag is a private amenity.
const PUBLIC_AMENITIES: &[&str] = &[
    "school",
    "university",
    "college",
    "library",
    "hospital",
    "clinic",
    "police",
    "fire_station",
    "townhall",
    "community_centre",
];

/// `landuse` values rendered as open plain.
const PLAIN_LANDUSE: &[&str] = &[
    "grass",
    "greenfield",
    "meadow",
    "farmland",
    "brownfield",
    "recreation_ground",
    "allotments",
    "quarry",
    "construction",
    "military",
];

/// `landuse` values rendered as built-up residential ground.
const RESIDENTIAL_LANDUSE: &[&str] = &[
    "residential",
    "cemetery",
    "industrial",
    "commercial",
    "retail",
    "square",
];

/// `place` values that get a populated-place marker.
const PLACE_KINDS: &[&str] = &["city", "town", "locality", "hamlet"];

fn is_natural(feature: &MapFeature) -> bool {
    feature.has_tag("natural")
}

fn is_railway(feature: &MapFeature) -> bool {
    feature.has_tag("railway")
}

fn is_road(feature: &MapFeature) -> bool {
    feature.has_tag("highway")
}

fn is_waterway(feature: &MapFeature) -> bool {
    feature.has_tag("water") && feature.geometry != GeometryType::Point
}

fn is_border(feature: &MapFeature) -> bool {
    feature.tag("boundary") == Some("administrative") && feature.tag("admin_level") == Some("2")
}

fn is_populated_place(feature: &MapFeature) -> bool {
    feature.geometry == GeometryType::Point
        && matches!(feature.tag("place"), Some(v) if PLACE_KINDS.contains(&v))
}

fn is_building(feature: &MapFeature) -> bool {
    feature.has_tag("building")
}

fn is_forest(feature: &MapFeature) -> bool {
    feature.tag("boundary") == Some("forest")
}

fn is_public_amenity(feature: &MapFeature) -> bool {
    matches!(feature.tag("amenity"), Some(v) if PUBLIC_AMENITIES.contains(&v))
}

fn is_private_amenity(feature: &MapFeature) -> bool {
    feature.has_tag("amenity") && !is_public_amenity(feature)
}

fn is_landuse_forest(feature: &MapFeature) -> bool {
    matches!(feature.tag("landuse"), Some("forest" | "orchard"))
}

fn is_landuse_plain(feature: &MapFeature) -> bool {
    matches!(feature.tag("landuse"), Some(v) if PLAIN_LANDUSE.contains(&v))
}

fn is_landuse_residential(feature: &MapFeature) -> bool {
    matches!(feature.tag("landuse"), Some(v) if RESIDENTIAL_LANDUSE.contains(&v))
}

/// Outcome of evaluating every category predicate against one feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredicateMatches {
    pub natural: bool,
    pub railway: bool,
    pub road: bool,
    pub waterway: bool,
    pub border: bool,
    pub place: bool,
    pub building: bool,
    pub forest: bool,
    pub public_amenity: bool,
    pub private_amenity: bool,
    pub landuse_forest: bool,
    pub landuse_plain: bool,
    pub landuse_residential: bool,
}

impl PredicateMatches {
    /// Evaluate all predicates, unconditionally.
    pub fn evaluate(feature: &MapFeature) -> Self {
        Self {
            natural: is_natural(feature),
            railway: is_railway(feature),
            road: is_road(feature),
            waterway: is_waterway(feature),
            border: is_border(feature),
            place: is_populated_place(feature),
            building: is_building(feature),
            forest: is_forest(feature),
            public_amenity: is_public_amenity(feature),
            private_amenity: is_private_amenity(feature),
            landuse_forest: is_landuse_forest(feature),
            landuse_plain: is_landuse_plain(feature),
            landuse_residential: is_landuse_residential(feature),
        }
    }

    /// Resolve the winning category by fixed precedence, highest first:
    /// natural, railway, road, waterway, border, populated place, building,
    /// forest boundary, public amenity, private amenity, forest/orchard
    /// landuse, plain landuse, residential landuse.
    pub fn first_match(&self) -> Option<ShapeCategory> {
        if self.natural {
            Some(ShapeCategory::NaturalArea)
        } else if self.railway {
            Some(ShapeCategory::Railway)
        } else if self.road {
            Some(ShapeCategory::Road)
        } else if self.waterway {
            Some(ShapeCategory::Waterway)
        } else if self.border {
            Some(ShapeCategory::AdministrativeBorder)
        } else if self.place {
            Some(ShapeCategory::PopulatedPlace)
        } else if self.building {
            Some(ShapeCategory::Building)
        } else if self.forest {
            Some(ShapeCategory::Forest)
        } else if self.public_amenity {
            Some(ShapeCategory::PublicAmenity)
        } else if self.private_amenity {
            Some(ShapeCategory::PrivateAmenity)
        } else if self.landuse_forest {
            Some(ShapeCategory::Forest)
        } else if self.landuse_plain {
            Some(ShapeCategory::PlainLanduse)
        } else if self.landuse_residential {
            Some(ShapeCategory::ResidentialLanduse)
        } else {
            None
        }
    }
}

/// Classify one feature into a drawable shape.
///
/// Pure: no bounding-box or queue side effects, and classifying the same
/// feature twice yields value-equivalent shapes. Returns `None` for
/// unmatched features and for malformed ones (empty coordinate sequence);
/// neither case is an error.
pub fn classify(feature: &MapFeature) -> Option<(ShapeCategory, Shape)> {
    if feature.coordinates.is_empty() {
        tracing::trace!("dropping feature with empty coordinate sequence");
        return None;
    }

    let matches = PredicateMatches::evaluate(feature);
    let Some(category) = matches.first_match() else {
        tracing::trace!(?matches, "feature matched no category, dropping");
        return None;
    };

    let polygon = feature.geometry == GeometryType::Polygon;
    let coords = feature.coordinates.clone();

    let shape = match category {
        ShapeCategory::NaturalArea => Shape::Area {
            kind: AreaKind::from_natural_tag(feature.tag("natural").unwrap_or_default()),
            polygon,
            coords,
        },
        ShapeCategory::Railway => Shape::Railway { coords },
        ShapeCategory::Road => Shape::Road { coords },
        ShapeCategory::Waterway => Shape::Waterway { polygon, coords },
        ShapeCategory::AdministrativeBorder => Shape::Border { coords },
        ShapeCategory::PopulatedPlace => Shape::Place { coords },
        ShapeCategory::Building | ShapeCategory::ResidentialLanduse => Shape::Area {
            kind: AreaKind::Residential,
            polygon,
            coords,
        },
        ShapeCategory::Forest => Shape::Area {
            kind: AreaKind::Forest,
            polygon,
            coords,
        },
        ShapeCategory::PublicAmenity | ShapeCategory::PrivateAmenity => Shape::Area {
            kind: AreaKind::Unknown,
            polygon,
            coords,
        },
        ShapeCategory::PlainLanduse => Shape::Area {
            kind: AreaKind::Plain,
            polygon,
            coords,
        },
    };

    Some((category, shape))
}

/// Classify one feature and, on success, fold its footprint into the shared
/// bounding box and enqueue the shape keyed by its z-index.
///
/// An unmatched feature performs no side effects at all.
pub fn tessellate(
    feature: &MapFeature,
    bounding_box: &mut BoundingBox,
    shapes: &mut ShapeQueue,
) -> Option<ShapeCategory> {
    let (category, shape) = classify(feature)?;
    bounding_box.expand(shape.coordinates());
    tracing::trace!(
        ?category,
        points = shape.coordinates().len(),
        "classified feature"
    );
    shapes.push(shape);
    Some(category)
}

/// Classify a whole batch sequentially.
pub fn tessellate_all(features: &[MapFeature]) -> (ShapeQueue, BoundingBox) {
    let mut shapes = ShapeQueue::new();
    let mut bounding_box = BoundingBox::empty();
    for feature in features {
        tessellate(feature, &mut bounding_box, &mut shapes);
    }
    (shapes, bounding_box)
}

/// Classify a whole batch with classification fanned out across threads.
///
/// Per-feature classification is independent, so it parallelizes freely;
/// the bounding box and queue are then built by a sequential merge in input
/// order, keeping the queue's insertion-order tie-break identical to
/// [`tessellate_all`].
pub fn tessellate_parallel(features: &[MapFeature]) -> (ShapeQueue, BoundingBox) {
    let classified: Vec<Option<(ShapeCategory, Shape)>> =
        features.par_iter().map(classify).collect();

    let mut shapes = ShapeQueue::new();
    let mut bounding_box = BoundingBox::empty();
    for (_, shape) in classified.into_iter().flatten() {
        bounding_box.expand(shape.coordinates());
        shapes.push(shape);
    }
    (shapes, bounding_box)
}
