//! Central Sector Schemes and village recommendations
//!
//! Scheme keys are display handles: the name and description come from the
//! translation table (`<key>` and `<key>_desc`).

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A government scheme that can be layered onto FRA patta holders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKey {
    /// Jal Jeevan Mission
    Jjm,
    /// MGNREGA
    Mgnrega,
    /// PM-KISAN
    Pmkisan,
    /// PMKSY (Per Drop More Crop)
    Pmksy,
    /// National Food Security Mission
    Nfsm,
    /// Van Dhan Vikas Karyakram
    Vandhan,
    /// PM Gram Sadak Yojana
    Pmgsy,
    /// Samagra Shiksha Abhiyan
    Ssa,
    /// Eklavya Model Residential Schools
    Emrs,
}

impl SchemeKey {
    /// Every scheme
    pub const ALL: [SchemeKey; 9] = [
        SchemeKey::Jjm,
        SchemeKey::Mgnrega,
        SchemeKey::Pmkisan,
        SchemeKey::Pmksy,
        SchemeKey::Nfsm,
        SchemeKey::Vandhan,
        SchemeKey::Pmgsy,
        SchemeKey::Ssa,
        SchemeKey::Emrs,
    ];

    /// Translation key of the scheme name
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Jjm => "jjm",
            Self::Mgnrega => "mgnrega",
            Self::Pmkisan => "pmkisan",
            Self::Pmksy => "pmksy",
            Self::Nfsm => "nfsm",
            Self::Vandhan => "vandhan",
            Self::Pmgsy => "pmgsy",
            Self::Ssa => "ssa",
            Self::Emrs => "emrs",
        }
    }

    /// Translation key of the scheme description
    #[must_use]
    pub fn description_key(self) -> String {
        format!("{}_desc", self.key())
    }
}

impl fmt::Display for SchemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SchemeKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.key() == lower)
            .ok_or_else(|| CoreError::UnknownScheme(s.to_string()))
    }
}

/// Village/issue pair with the schemes suggested for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Village label, e.g. `"Salapura, Dindori (Madhya Pradesh)"`
    pub village: String,
    /// Issue identified for the village
    pub issue: String,
    /// Schemes to layer
    pub schemes: Vec<SchemeKey>,
}

impl Recommendation {
    /// Create recommendation
    #[must_use]
    pub fn new(
        village: impl Into<String>,
        issue: impl Into<String>,
        schemes: impl Into<Vec<SchemeKey>>,
    ) -> Self {
        Self {
            village: village.into(),
            issue: issue.into(),
            schemes: schemes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_key_suffix() {
        assert_eq!(SchemeKey::Vandhan.description_key(), "vandhan_desc");
    }

    #[test]
    fn scheme_round_trips_through_key() {
        for scheme in SchemeKey::ALL {
            assert_eq!(scheme.key().parse::<SchemeKey>().unwrap(), scheme);
        }
        assert!("pmay".parse::<SchemeKey>().is_err());
    }

    #[test]
    fn recommendation_serializes_keys() {
        let rec = Recommendation::new("Korbong", "Market access", [SchemeKey::Vandhan, SchemeKey::Pmgsy]);
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["schemes"], serde_json::json!(["vandhan", "pmgsy"]));
    }
}
