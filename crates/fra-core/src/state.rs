//! FRA targeted states
//!
//! The atlas covers exactly four states. Each carries a short code used in
//! claim identifiers, a default map center, and optionally a regional
//! interface language.

use crate::error::CoreError;
use crate::geo::LatLng;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the states targeted for FRA implementation and monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TargetState {
    /// Madhya Pradesh
    #[serde(rename = "Madhya Pradesh")]
    MadhyaPradesh,
    /// Tripura
    #[serde(rename = "Tripura")]
    Tripura,
    /// Odisha
    #[serde(rename = "Odisha")]
    Odisha,
    /// Telangana
    #[serde(rename = "Telangana")]
    Telangana,
}

impl TargetState {
    /// All targeted states in display order
    pub const ALL: [TargetState; 4] = [
        TargetState::MadhyaPradesh,
        TargetState::Tripura,
        TargetState::Odisha,
        TargetState::Telangana,
    ];

    /// Full display name
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MadhyaPradesh => "Madhya Pradesh",
            Self::Tripura => "Tripura",
            Self::Odisha => "Odisha",
            Self::Telangana => "Telangana",
        }
    }

    /// Two-letter code used inside claim ids (`IFR-MP-0123`)
    #[inline]
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::MadhyaPradesh => "MP",
            Self::Tripura => "TR",
            Self::Odisha => "OD",
            Self::Telangana => "TS",
        }
    }

    /// Default map center when no village data is available
    #[must_use]
    pub fn default_center(self) -> LatLng {
        match self {
            Self::MadhyaPradesh => LatLng::new(23.47, 77.94),
            Self::Tripura => LatLng::new(23.83, 91.28),
            Self::Odisha => LatLng::new(20.95, 85.09),
            Self::Telangana => LatLng::new(18.11, 79.01),
        }
    }

    /// Regional language offered as a "Switch to" shortcut, if any
    #[must_use]
    pub fn local_language(self) -> Option<Language> {
        match self {
            Self::MadhyaPradesh => None,
            Self::Tripura => Some(Language::Bengali),
            Self::Odisha => Some(Language::Odia),
            Self::Telangana => Some(Language::Telugu),
        }
    }

    /// Resolve a two-letter code back to the state
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(trimmed))
            .or_else(|| Self::from_code(trimmed))
            .ok_or_else(|| CoreError::UnknownState(s.to_string()))
    }
}
