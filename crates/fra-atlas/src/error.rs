//! Error types for the atlas pipeline

use fra_core::{CoreError, TargetState};

/// Atlas selection and timeline errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AtlasError {
    /// Domain parsing failed
    #[error(transparent)]
    Core(#[from] CoreError),

    /// District is not part of the selected state
    #[error("district '{district}' is not in {state}")]
    UnknownDistrict {
        /// Selected state
        state: TargetState,
        /// Requested district
        district: String,
    },

    /// Month string is not `YYYY-MM`
    #[error("invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),

    /// Timeline update would leave start at or after end
    #[error("timeline start {start} must be before end {end}")]
    TimelineOrder {
        /// Proposed or current start
        start: String,
        /// Proposed or current end
        end: String,
    },
}

impl AtlasError {
    /// Whether the error comes from caller input (as opposed to data)
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::UnknownDistrict { .. })
    }
}

/// Result type alias for atlas operations
pub type AtlasResult<T> = Result<T, AtlasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_district_and_state() {
        let err = AtlasError::UnknownDistrict {
            state: TargetState::Tripura,
            district: "Indore".into(),
        };
        assert_eq!(err.to_string(), "district 'Indore' is not in Tripura");
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn core_errors_convert() {
        let err: AtlasError = CoreError::UnknownLayer("roads".into()).into();
        assert!(matches!(err, AtlasError::Core(_)));
        assert!(err.is_invalid_input());
    }
}
