//! Error types for FRA domain parsing
//!
//! Every `FromStr` in this crate reports through [`CoreError`].

/// Domain parsing and validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Claim identifier does not follow `IFR-…` / `CFR-…`
    #[error("invalid claim id: '{0}'")]
    InvalidClaimId(String),

    /// State is not one of the four FRA targeted states
    #[error("unknown state: '{0}'")]
    UnknownState(String),

    /// Unrecognised claim type
    #[error("unknown claim type: '{0}'")]
    UnknownClaimType(String),

    /// Unrecognised claim status
    #[error("unknown claim status: '{0}'")]
    UnknownStatus(String),

    /// Unrecognised map layer name
    #[error("unknown map layer: '{0}'")]
    UnknownLayer(String),

    /// Unsupported interface language
    #[error("unknown language: '{0}'")]
    UnknownLanguage(String),

    /// Theme string is neither `light` nor `dark`
    #[error("unknown theme: '{0}'")]
    UnknownTheme(String),

    /// Unknown scheme key
    #[error("unknown scheme: '{0}'")]
    UnknownScheme(String),

    /// Polygon ring is malformed
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Result type alias for domain operations
pub type CoreResult<T> = Result<T, CoreError>;
