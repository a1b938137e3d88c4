//! Villages with mapped boundaries

use crate::geo::{LatLng, Ring};
use crate::state::TargetState;
use serde::{Deserialize, Serialize};

/// A village in the atlas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Village {
    /// Numeric identifier
    pub id: u32,
    /// Village name
    pub name: String,
    /// District name
    pub district: String,
    /// State
    pub state: TargetState,
    /// Total population
    pub population: u32,
    /// Scheduled Tribe population
    pub tribal_population: u32,
    /// Forest area label, e.g. `"500 acres"`
    pub forest_area: String,
    /// Representative point used for centering
    pub center: LatLng,
    /// Village outline
    pub boundary: Ring,
}

impl Village {
    /// Share of the population that is tribal, in `[0, 1]`
    #[must_use]
    pub fn tribal_share(&self) -> f64 {
        if self.population == 0 {
            return 0.0;
        }
        (f64::from(self.tribal_population) / f64::from(self.population)).clamp(0.0, 1.0)
    }
}

/// Compact village listing returned by the villages endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillageSummary {
    /// Identifier
    pub id: u32,
    /// Name
    pub name: String,
    /// State
    pub state: TargetState,
}

impl From<&Village> for VillageSummary {
    fn from(v: &Village) -> Self {
        Self {
            id: v.id,
            name: v.name.clone(),
            state: v.state,
        }
    }
}
