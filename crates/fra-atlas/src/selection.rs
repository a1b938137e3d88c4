//! State and district selection

use crate::districts::find_district;
use crate::error::{AtlasError, AtlasResult};
use fra_core::TargetState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// District part of a selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DistrictFilter {
    /// Every district of the state
    #[default]
    All,
    /// One named district
    Named(String),
}

impl DistrictFilter {
    /// Whether `district` passes the filter
    #[must_use]
    pub fn matches(&self, district: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == district,
        }
    }

    /// The district name, if one is selected
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl From<String> for DistrictFilter {
    /// `"All"` and the empty string select every district
    fn from(s: String) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(trimmed.to_string())
        }
    }
}

impl From<&str> for DistrictFilter {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<DistrictFilter> for String {
    fn from(filter: DistrictFilter) -> Self {
        match filter {
            DistrictFilter::All => "All".to_string(),
            DistrictFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for DistrictFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("All"))
    }
}

/// The state and district the atlas is showing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtlasSelection {
    /// Selected state
    pub state: TargetState,
    /// Selected district, `All` by default
    #[serde(default)]
    pub district: DistrictFilter,
}

impl AtlasSelection {
    /// Whole-state selection
    #[must_use]
    pub fn new(state: TargetState) -> Self {
        Self {
            state,
            district: DistrictFilter::All,
        }
    }

    /// Narrow to a district without checking it belongs to the state
    #[must_use]
    pub fn with_district(mut self, district: impl Into<DistrictFilter>) -> Self {
        self.district = district.into();
        self
    }

    /// Narrow to a district of the state, normalising its spelling
    ///
    /// # Errors
    /// `AtlasError::UnknownDistrict` when the district is not in the state.
    pub fn checked_district(self, district: impl Into<DistrictFilter>) -> AtlasResult<Self> {
        match district.into() {
            DistrictFilter::All => Ok(self.with_district(DistrictFilter::All)),
            DistrictFilter::Named(name) => {
                let canonical =
                    find_district(self.state, &name).ok_or_else(|| AtlasError::UnknownDistrict {
                        state: self.state,
                        district: name.clone(),
                    })?;
                Ok(self.with_district(DistrictFilter::Named(canonical.to_string())))
            }
        }
    }

    /// Switch state; the district resets to `All`
    pub fn set_state(&mut self, state: TargetState) {
        if self.state != state {
            self.state = state;
            self.district = DistrictFilter::All;
        }
    }
}

impl Default for AtlasSelection {
    /// Tripura, all districts
    fn default() -> Self {
        Self::new(TargetState::Tripura)
    }
}
