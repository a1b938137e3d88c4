//! Records table: filtering and per-record summaries

use crate::error::DataResult;
use fra_core::{Claim, ClaimStatus, TargetState};
use serde::{Deserialize, Serialize};

/// Shown in place of the table when no record passes the filters
pub const NO_RECORDS_MESSAGE: &str = "No records match the current filters.";

/// State and status filters of the records table; `None` means `All`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Only claims in this state
    pub state: Option<TargetState>,
    /// Only claims with this status
    pub status: Option<ClaimStatus>,
}

fn is_all(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("all")
}

impl RecordFilter {
    /// No filtering
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a state
    #[inline]
    #[must_use]
    pub fn with_state(mut self, state: TargetState) -> Self {
        self.state = Some(state);
        self
    }

    /// Restrict to a status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Build from select values, where `All` or an empty string disables a filter
    ///
    /// # Errors
    ///
    /// Returns a core parse error for an unknown state or status.
    pub fn parse(state: Option<&str>, status: Option<&str>) -> DataResult<Self> {
        let state = match state {
            Some(s) if !is_all(s) => Some(s.parse()?),
            _ => None,
        };
        let status = match status {
            Some(s) if !is_all(s) => Some(s.parse()?),
            _ => None,
        };
        Ok(Self { state, status })
    }

    /// Whether a claim passes both filters
    #[must_use]
    pub fn matches(&self, claim: &Claim) -> bool {
        self.state.is_none_or(|s| s == claim.state) && self.status.is_none_or(|s| s == claim.status)
    }

    /// Claims passing the filters, order preserved
    #[must_use]
    pub fn apply<'a>(&self, claims: &'a [Claim]) -> Vec<&'a Claim> {
        claims.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Colour family of a status badge in the table
#[must_use]
pub fn badge_tone(status: ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Granted => "green",
        ClaimStatus::Pending => "yellow",
        ClaimStatus::Rejected => "red",
        ClaimStatus::UnderReview => "gray",
    }
}

/// Markdown summary of one record
#[must_use]
pub fn summary(claim: &Claim) -> String {
    format!(
        "**Summary for Claim ID: {}**\n\nThis is an **{}** claim for **{}** from **{}, {}**. \
         The current status of the claim is **{}**.",
        claim.id,
        claim.claim_type,
        claim.holder,
        claim.village_district(),
        claim.state,
        claim.status,
    )
}
