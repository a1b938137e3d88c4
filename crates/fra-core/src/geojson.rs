//! GeoJSON feature types consumed by the map widget
//!
//! Only the geometry kinds the atlas draws are modelled: points, line
//! strings and single-ring polygons.

use crate::geo::{LatLng, Position, Ring};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Geometry of a feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Single position
    Point {
        /// `[lng, lat]`
        coordinates: Position,
    },
    /// Polyline (rivers, streams)
    LineString {
        /// Ordered positions
        coordinates: Vec<Position>,
    },
    /// Polygon with an outer ring and optional holes
    Polygon {
        /// Rings, outer first
        coordinates: Vec<Ring>,
    },
}

impl Geometry {
    /// Point geometry at a lat/lng
    #[inline]
    #[must_use]
    pub fn point(at: LatLng) -> Self {
        Self::Point {
            coordinates: at.to_position(),
        }
    }

    /// Polygon with a single outer ring
    #[inline]
    #[must_use]
    pub fn polygon(outer: Ring) -> Self {
        Self::Polygon {
            coordinates: vec![outer],
        }
    }

    /// Whether the geometry is a line string
    #[inline]
    #[must_use]
    pub fn is_line(&self) -> bool {
        matches!(self, Self::LineString { .. })
    }
}

/// `"type": "Feature"` tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureTag {
    /// The only value
    #[default]
    Feature,
}

/// `"type": "FeatureCollection"` tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionTag {
    /// The only value
    #[default]
    FeatureCollection,
}

/// Geometry plus free-form properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Type tag
    #[serde(rename = "type", default)]
    pub tag: FeatureTag,
    /// Display properties
    #[serde(default)]
    pub properties: Map<String, Value>,
    /// Geometry
    pub geometry: Geometry,
}

impl Feature {
    /// Create feature with no properties
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            tag: FeatureTag::Feature,
            properties: Map::new(),
            geometry,
        }
    }

    /// Add a property
    #[must_use]
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// String property lookup
    #[must_use]
    pub fn str_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

/// Collection of features
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Type tag
    #[serde(rename = "type", default)]
    pub tag: CollectionTag,
    /// Features
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Wrap features
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            tag: CollectionTag::FeatureCollection,
            features,
        }
    }

    /// Number of features
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn feature_collection_wire_shape() {
        let ring = Ring::rectangle([75.8, 22.7], [75.9, 22.8]);
        let fc: FeatureCollection = [Feature::new(Geometry::polygon(ring))
            .with_property("name", "Sample Village A")
            .with_property("population", 1250_u64)]
        .into_iter()
        .collect();

        let value = serde_json::to_value(&fc).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["type"], "Feature");
        assert_eq!(value["features"][0]["geometry"]["type"], "Polygon");
        assert_eq!(value["features"][0]["properties"]["population"], 1250);
        assert_eq!(value["features"][0]["geometry"]["coordinates"][0][2], json!([75.9, 22.8]));
    }

    #[test]
    fn parses_line_string() {
        let raw = json!({
            "type": "Feature",
            "properties": { "name": "Main River", "type": "river" },
            "geometry": { "type": "LineString", "coordinates": [[75.75, 22.65], [75.85, 22.75]] }
        });
        let feature: Feature = serde_json::from_value(raw).unwrap();
        assert!(feature.geometry.is_line());
        assert_eq!(feature.str_property("type"), Some("river"));
    }
}
