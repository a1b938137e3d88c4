//! Error types for the dashboard shell

use fra_atlas::AtlasError;
use fra_core::CoreError;
use fra_data::DataError;
use std::path::PathBuf;
use std::sync::Arc;

/// Dashboard error type
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Domain parsing failed
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Atlas selection failed
    #[error(transparent)]
    Atlas(#[from] AtlasError),

    /// Backend call failed
    #[error(transparent)]
    Data(#[from] DataError),

    /// Preference file could not be read or written
    #[error("preference file {path}: {source}")]
    Preference {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Report requested before any recommendation was found
    #[error("no recommendation selected")]
    NoRecommendation,

    /// Digitizer was reset or restarted while this extraction ran
    #[error("digitization was superseded before extraction finished")]
    StaleDigitization,

    /// Failure shared by callers waiting on the same atlas composition
    #[error(transparent)]
    Shared(Arc<DashboardError>),
}

impl DashboardError {
    /// Whether a looked-up entity does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Data(err) => err.is_not_found(),
            Self::Atlas(err) => !err.is_invalid_input(),
            Self::Shared(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Whether the request lost a race with a newer one
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        match self {
            Self::StaleDigitization => true,
            Self::Shared(err) => err.is_conflict(),
            _ => false,
        }
    }

    /// Whether the caller sent bad input
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::Core(_) | Self::NoRecommendation => true,
            Self::Atlas(err) => err.is_invalid_input(),
            Self::Data(err) => err.is_invalid_input(),
            Self::Shared(err) => err.is_invalid_input(),
            Self::Preference { .. } | Self::StaleDigitization => false,
        }
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
