//! FRA claims
//!
//! A claim is a display record: an identifier, the patta holder, where it
//! is, what kind of right is claimed and how far it has progressed.

use crate::error::CoreError;
use crate::geo::{LatLng, Ring};
use crate::state::TargetState;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static CLAIM_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(IFR|CFR)-[A-Z0-9]+(-[A-Z0-9]+)*$").expect("claim id pattern is valid")
});

/// Claim identifier such as `IFR-MP-0123` or `CFR-001`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimId(String);

impl ClaimId {
    /// Build an id from its parts: `{type}-{state code}-{sequence:04}`
    #[must_use]
    pub fn compose(claim_type: ClaimType, state: TargetState, sequence: u32) -> Self {
        Self(format!("{}-{}-{sequence:04}", claim_type.code(), state.code()))
    }

    /// The raw identifier
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Claim type encoded in the prefix
    #[must_use]
    pub fn claim_type(&self) -> ClaimType {
        if self.0.starts_with("CFR") {
            ClaimType::Community
        } else {
            ClaimType::Individual
        }
    }
}

impl FromStr for ClaimId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if CLAIM_ID_PATTERN.is_match(&upper) {
            Ok(Self(upper))
        } else {
            Err(CoreError::InvalidClaimId(s.to_string()))
        }
    }
}

impl TryFrom<String> for ClaimId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClaimId> for String {
    fn from(id: ClaimId) -> Self {
        id.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of forest right claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    /// Individual Forest Rights
    #[serde(rename = "IFR")]
    Individual,
    /// Community Forest Rights
    #[serde(rename = "CFR")]
    Community,
}

impl ClaimType {
    /// `IFR` or `CFR`
    #[inline]
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Individual => "IFR",
            Self::Community => "CFR",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ClaimType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ifr" | "individual" => Ok(Self::Individual),
            "cfr" | "community" => Ok(Self::Community),
            _ => Err(CoreError::UnknownClaimType(s.to_string())),
        }
    }
}

/// Where a claim stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Title granted
    Granted,
    /// Awaiting decision
    Pending,
    /// Rejected
    Rejected,
    /// Under review by the committee
    #[serde(rename = "Under Review")]
    UnderReview,
}

impl ClaimStatus {
    /// All statuses in overview order
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::Granted,
        ClaimStatus::Pending,
        ClaimStatus::UnderReview,
        ClaimStatus::Rejected,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Granted => "Granted",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
            Self::UnderReview => "Under Review",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClaimStatus {
    type Err = CoreError;

    /// Accepts `Under Review`, `under_review`, `UNDER REVIEW`, …
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', " ").as_str() {
            "granted" => Ok(Self::Granted),
            "pending" => Ok(Self::Pending),
            "rejected" => Ok(Self::Rejected),
            "under review" => Ok(Self::UnderReview),
            _ => Err(CoreError::UnknownStatus(s.to_string())),
        }
    }
}

/// A Forest Rights Act claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Identifier
    pub id: ClaimId,
    /// Patta holder (individual or community name)
    pub holder: String,
    /// Village name
    pub village: String,
    /// District name
    pub district: String,
    /// State
    pub state: TargetState,
    /// IFR or CFR
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    /// Current status
    pub status: ClaimStatus,
    /// Claimed area in acres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_acres: Option<f64>,
    /// Marker position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LatLng>,
    /// Claimed parcel outline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Ring>,
    /// Date the title was granted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_date: Option<NaiveDate>,
    /// Date the claim was filed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_date: Option<NaiveDate>,
    /// Date the claim was rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_date: Option<NaiveDate>,
    /// Stated reason for rejection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Gram sabha resolution reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl Claim {
    /// Minimal claim without geometry or dates
    #[must_use]
    pub fn new(
        id: ClaimId,
        holder: impl Into<String>,
        village: impl Into<String>,
        district: impl Into<String>,
        state: TargetState,
        status: ClaimStatus,
    ) -> Self {
        let claim_type = id.claim_type();
        Self {
            id,
            holder: holder.into(),
            village: village.into(),
            district: district.into(),
            state,
            claim_type,
            status,
            area_acres: None,
            coordinates: None,
            boundary: None,
            grant_date: None,
            application_date: None,
            rejection_date: None,
            rejection_reason: None,
            resolution: None,
        }
    }

    /// With parcel geometry
    #[must_use]
    pub fn with_geometry(mut self, coordinates: LatLng, boundary: Ring) -> Self {
        self.coordinates = Some(coordinates);
        self.boundary = Some(boundary);
        self
    }

    /// With area in acres
    #[must_use]
    pub fn with_area(mut self, acres: f64) -> Self {
        self.area_acres = Some(acres);
        self
    }

    /// `"Village, District"` as shown in the records table
    #[must_use]
    pub fn village_district(&self) -> String {
        format!("{}, {}", self.village, self.district)
    }
}

/// Request to file a new claim against a known village
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClaim {
    /// Name of the claimant
    pub claimant_name: String,
    /// IFR or CFR
    pub claim_type: ClaimType,
    /// Village the claim is filed in
    pub village_id: u32,
}
