//! Inputs to the atlas pipeline
//!
//! A [`StateDataset`] holds the villages and claims of one state. The
//! [`OverlayCatalog`] holds the thematic overlays (land use, water, field
//! reports, potential claims, change detection), which are not partitioned by
//! state.

use chrono::NaiveDate;
use fra_core::{Claim, FeatureCollection, LatLng, TargetState, Village};
use serde::{Deserialize, Serialize};

/// Villages and claims of one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateDataset {
    /// State the data belongs to
    pub state: TargetState,
    /// Villages with boundaries
    #[serde(default)]
    pub villages: Vec<Village>,
    /// Claims filed in those villages
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl StateDataset {
    /// Empty dataset for a state
    #[must_use]
    pub fn empty(state: TargetState) -> Self {
        Self {
            state,
            villages: Vec::new(),
            claims: Vec::new(),
        }
    }

    /// Whether the state has any mapped village
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.villages.is_empty()
    }
}

/// A report submitted from the field app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReport {
    /// Sequence number
    pub id: u32,
    /// Report location
    pub coordinates: LatLng,
    /// Headline
    pub title: String,
    /// Details
    pub description: String,
    /// Date reported
    pub date: NaiveDate,
    /// Who reported it
    pub reporter: String,
    /// Review status label
    pub status: String,
}

/// A location flagged as eligible for a claim not yet filed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialClaim {
    /// Sequence number
    pub id: u32,
    /// Location
    pub coordinates: LatLng,
    /// Headline
    pub title: String,
    /// Why the location qualifies
    pub description: String,
    /// Confidence label (`High`, `Medium`, …)
    pub confidence: String,
    /// Estimated area label
    pub area: String,
}

/// Thematic overlays shown on top of villages and claims
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayCatalog {
    /// Land use polygons, `type` property selects the palette
    #[serde(default)]
    pub land_use: FeatureCollection,
    /// Rivers (lines) and lakes (polygons)
    #[serde(default)]
    pub water_bodies: FeatureCollection,
    /// Field app reports
    #[serde(default)]
    pub field_reports: Vec<FieldReport>,
    /// Potential claim sites
    #[serde(default)]
    pub potential_claims: Vec<PotentialClaim>,
    /// Detected changes, `changeDate` property is `YYYY-MM-DD`
    #[serde(default)]
    pub change_detection: FeatureCollection,
}
