//! Minimal planar geometry for display purposes
//!
//! Positions follow GeoJSON order (`[lng, lat]`); [`LatLng`] is the map
//! widget order. No projection or spherical math is performed.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// GeoJSON position: `[longitude, latitude]`
pub type Position = [f64; 2];

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl LatLng {
    /// Create new point
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Convert to a GeoJSON position
    #[inline]
    #[must_use]
    pub fn to_position(self) -> Position {
        [self.lng, self.lat]
    }

    /// Build from a GeoJSON position
    #[inline]
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        Self::new(position[1], position[0])
    }
}

/// Axis-aligned bounds in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum latitude/longitude corner
    pub south_west: LatLng,
    /// Maximum latitude/longitude corner
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest bounds containing every point, grown by `padding` degrees
    ///
    /// Returns `None` for an empty iterator.
    pub fn enclosing(points: impl IntoIterator<Item = LatLng>, padding: f64) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_lat, mut max_lat) = (first.lat, first.lat);
        let (mut min_lng, mut max_lng) = (first.lng, first.lng);

        for p in iter {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
        }

        Some(Self {
            south_west: LatLng::new(min_lat - padding, min_lng - padding),
            north_east: LatLng::new(max_lat + padding, max_lng + padding),
        })
    }

    /// Whether the point lies inside (inclusive)
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}

/// Arithmetic mean of the points, `None` when empty
pub fn mean_center(points: impl IntoIterator<Item = LatLng>) -> Option<LatLng> {
    let (count, lat_sum, lng_sum) = points
        .into_iter()
        .fold((0usize, 0.0_f64, 0.0_f64), |(n, lat, lng), p| {
            (n + 1, lat + p.lat, lng + p.lng)
        });

    if count == 0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = count as f64;
    Some(LatLng::new(lat_sum / n, lng_sum / n))
}

/// Closed linear ring (first position equals last)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct Ring(Vec<Position>);

impl Ring {
    /// Validate and wrap positions
    ///
    /// # Errors
    /// `CoreError::InvalidGeometry` if fewer than four positions are given or
    /// the ring is not closed.
    pub fn new(positions: Vec<Position>) -> CoreResult<Self> {
        if positions.len() < 4 {
            return Err(CoreError::InvalidGeometry(format!(
                "ring needs at least 4 positions, got {}",
                positions.len()
            )));
        }
        if positions.first() != positions.last() {
            return Err(CoreError::InvalidGeometry("ring is not closed".to_string()));
        }
        Ok(Self(positions))
    }

    /// Axis-aligned rectangle from `[min_lng, min_lat]` to `[max_lng, max_lat]`
    #[must_use]
    pub fn rectangle(min: Position, max: Position) -> Self {
        Self(vec![
            [min[0], min[1]],
            [max[0], min[1]],
            [max[0], max[1]],
            [min[0], max[1]],
            [min[0], min[1]],
        ])
    }

    /// Positions of the ring
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Bounds spanned by the first and third vertex
    ///
    /// Claim boundaries are drawn as rectangles between these corners.
    #[must_use]
    pub fn corner_bounds(&self) -> Bounds {
        let a = LatLng::from_position(self.0[0]);
        let c = LatLng::from_position(self.0[2]);
        Bounds {
            south_west: LatLng::new(a.lat.min(c.lat), a.lng.min(c.lng)),
            north_east: LatLng::new(a.lat.max(c.lat), a.lng.max(c.lng)),
        }
    }
}

impl TryFrom<Vec<Position>> for Ring {
    type Error = CoreError;

    fn try_from(value: Vec<Position>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ring> for Vec<Position> {
    fn from(ring: Ring) -> Self {
        ring.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosing_bounds_with_padding() {
        let bounds = Bounds::enclosing(
            [LatLng::new(23.0, 78.0), LatLng::new(23.5, 78.5)],
            0.05,
        )
        .unwrap();
        assert!((bounds.south_west.lat - 22.95).abs() < 1e-9);
        assert!((bounds.north_east.lng - 78.55).abs() < 1e-9);
        assert!(bounds.contains(LatLng::new(23.2, 78.2)));
        assert!(!bounds.contains(LatLng::new(24.0, 78.2)));
    }

    #[test]
    fn enclosing_empty_is_none() {
        assert!(Bounds::enclosing(Vec::new(), 0.05).is_none());
        assert!(mean_center(Vec::new()).is_none());
    }

    #[test]
    fn mean_center_averages() {
        let c = mean_center([LatLng::new(20.0, 80.0), LatLng::new(22.0, 82.0)]).unwrap();
        assert_eq!(c, LatLng::new(21.0, 81.0));
    }

    #[test]
    fn ring_validation() {
        assert!(Ring::new(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]).is_err());
        assert!(Ring::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).is_err());
        assert!(Ring::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]).is_ok());
    }

    #[test]
    fn ring_deserialize_rejects_open_ring() {
        let bad: Result<Ring, _> = serde_json::from_str("[[0,0],[1,0],[1,1],[0,1]]");
        assert!(bad.is_err());
    }

    #[test]
    fn corner_bounds_swap_to_lat_lng() {
        let ring = Ring::rectangle([78.0, 23.0], [78.5, 23.5]);
        let b = ring.corner_bounds();
        assert_eq!(b.south_west, LatLng::new(23.0, 78.0));
        assert_eq!(b.north_east, LatLng::new(23.5, 78.5));
    }
}
