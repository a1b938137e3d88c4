//! Map layer toggles
//!
//! [`MapLayerState`] is a flat set of boolean flags, one per overlay. The
//! atlas pipeline reads it to decide which overlays to compose.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A togglable map overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MapLayer {
    /// Village boundary polygons
    VillageBoundaries,
    /// Individual Forest Rights claims
    IfrClaims,
    /// Community Forest Rights claims
    CfrClaims,
    /// Land use classification
    LandUse,
    /// Rivers, lakes and ponds
    WaterBodies,
    /// Reports submitted from the mobile app
    FieldReports,
    /// Potential CFR claims (advanced layer)
    PotentialClaims,
    /// Change detection over a time window (advanced layer)
    ChangeDetection,
}

impl MapLayer {
    /// Every layer in panel order
    pub const ALL: [MapLayer; 8] = [
        MapLayer::VillageBoundaries,
        MapLayer::IfrClaims,
        MapLayer::CfrClaims,
        MapLayer::LandUse,
        MapLayer::WaterBodies,
        MapLayer::FieldReports,
        MapLayer::PotentialClaims,
        MapLayer::ChangeDetection,
    ];

    /// Wire name (`villageBoundaries`, …)
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::VillageBoundaries => "villageBoundaries",
            Self::IfrClaims => "ifrClaims",
            Self::CfrClaims => "cfrClaims",
            Self::LandUse => "landUse",
            Self::WaterBodies => "waterBodies",
            Self::FieldReports => "fieldReports",
            Self::PotentialClaims => "potentialClaims",
            Self::ChangeDetection => "changeDetection",
        }
    }

    /// Translation key for the toggle label
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::VillageBoundaries => "village_boundaries",
            Self::IfrClaims => "ifr_claims",
            Self::CfrClaims => "cfr_claims",
            Self::LandUse => "land_use",
            Self::WaterBodies => "water_bodies",
            Self::FieldReports => "field_reports",
            Self::PotentialClaims => "potential_claims",
            Self::ChangeDetection => "change_detection",
        }
    }

    /// Whether the layer sits under "Advanced AI Layers"
    #[inline]
    #[must_use]
    pub fn is_advanced(self) -> bool {
        matches!(self, Self::PotentialClaims | Self::ChangeDetection)
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for MapLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MapLayer {
    type Err = CoreError;

    /// Accepts wire names, snake_case names and the toggle ids (`layer-ifr`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .trim_start_matches("layer-")
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match norm.as_str() {
            "villageboundaries" | "village" => Ok(Self::VillageBoundaries),
            "ifrclaims" | "ifr" => Ok(Self::IfrClaims),
            "cfrclaims" | "cfr" => Ok(Self::CfrClaims),
            "landuse" => Ok(Self::LandUse),
            "waterbodies" | "water" => Ok(Self::WaterBodies),
            "fieldreports" => Ok(Self::FieldReports),
            "potentialclaims" => Ok(Self::PotentialClaims),
            "changedetection" => Ok(Self::ChangeDetection),
            _ => Err(CoreError::UnknownLayer(s.to_string())),
        }
    }
}

/// Which overlays are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct MapLayerState {
    /// Village boundaries
    pub village_boundaries: bool,
    /// IFR claims
    pub ifr_claims: bool,
    /// CFR claims
    pub cfr_claims: bool,
    /// Land use
    pub land_use: bool,
    /// Water bodies
    pub water_bodies: bool,
    /// Field reports
    pub field_reports: bool,
    /// Potential claims
    pub potential_claims: bool,
    /// Change detection
    pub change_detection: bool,
}

impl Default for MapLayerState {
    /// Village boundaries and both claim layers on, everything else off
    fn default() -> Self {
        Self {
            village_boundaries: true,
            ifr_claims: true,
            cfr_claims: true,
            land_use: false,
            water_bodies: false,
            field_reports: false,
            potential_claims: false,
            change_detection: false,
        }
    }
}

impl MapLayerState {
    /// All layers off
    #[must_use]
    pub fn none() -> Self {
        Self::from_layers(std::iter::empty())
    }

    /// All layers on
    #[must_use]
    pub fn all() -> Self {
        Self::from_layers(MapLayer::ALL)
    }

    /// Exactly the given layers on
    #[must_use]
    pub fn from_layers(layers: impl IntoIterator<Item = MapLayer>) -> Self {
        let mut state = Self {
            village_boundaries: false,
            ifr_claims: false,
            cfr_claims: false,
            land_use: false,
            water_bodies: false,
            field_reports: false,
            potential_claims: false,
            change_detection: false,
        };
        for layer in layers {
            state.set(layer, true);
        }
        state
    }

    fn slot(&mut self, layer: MapLayer) -> &mut bool {
        match layer {
            MapLayer::VillageBoundaries => &mut self.village_boundaries,
            MapLayer::IfrClaims => &mut self.ifr_claims,
            MapLayer::CfrClaims => &mut self.cfr_claims,
            MapLayer::LandUse => &mut self.land_use,
            MapLayer::WaterBodies => &mut self.water_bodies,
            MapLayer::FieldReports => &mut self.field_reports,
            MapLayer::PotentialClaims => &mut self.potential_claims,
            MapLayer::ChangeDetection => &mut self.change_detection,
        }
    }

    /// Whether a layer is visible
    #[must_use]
    pub fn is_enabled(&self, layer: MapLayer) -> bool {
        match layer {
            MapLayer::VillageBoundaries => self.village_boundaries,
            MapLayer::IfrClaims => self.ifr_claims,
            MapLayer::CfrClaims => self.cfr_claims,
            MapLayer::LandUse => self.land_use,
            MapLayer::WaterBodies => self.water_bodies,
            MapLayer::FieldReports => self.field_reports,
            MapLayer::PotentialClaims => self.potential_claims,
            MapLayer::ChangeDetection => self.change_detection,
        }
    }

    /// Set one flag
    pub fn set(&mut self, layer: MapLayer, enabled: bool) {
        *self.slot(layer) = enabled;
    }

    /// Flip one flag, returning its new value
    pub fn toggle(&mut self, layer: MapLayer) -> bool {
        let slot = self.slot(layer);
        *slot = !*slot;
        *slot
    }

    /// Visible layers in panel order
    pub fn enabled(&self) -> impl Iterator<Item = MapLayer> + '_ {
        MapLayer::ALL.into_iter().filter(|l| self.is_enabled(*l))
    }

    /// Whether any claim layer is visible
    #[inline]
    #[must_use]
    pub fn any_claims(&self) -> bool {
        self.ifr_claims || self.cfr_claims
    }

    /// Compact bitset, stable across runs (used as a cache key)
    #[must_use]
    pub fn bits(&self) -> u8 {
        self.enabled().fold(0, |acc, l| acc | l.bit())
    }

    /// Parse a comma-separated list of layer names
    ///
    /// An empty string yields all layers off.
    ///
    /// # Errors
    /// `CoreError::UnknownLayer` on the first unknown name.
    pub fn parse_list(list: &str) -> Result<Self, CoreError> {
        let layers = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<MapLayer>, _>>()?;
        Ok(Self::from_layers(layers))
    }
}
