//! Error types for the mock backend
//!
//! Covers:
//! - Record and village lookups
//! - Seed data loading
//! - Digitization wizard misuse

use crate::digitizer::WizardStep;
use fra_atlas::AtlasError;
use fra_core::CoreError;
use std::path::PathBuf;

/// Main backend error type
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Domain parsing failed
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Atlas selection failed
    #[error(transparent)]
    Atlas(#[from] AtlasError),

    /// No record with this id
    #[error("record not found: {0}")]
    RecordNotFound(String),

    /// No village with this id
    #[error("village not found: {0}")]
    VillageNotFound(u32),

    /// Required request field was blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Upload contained no acceptable file
    #[error("{0}")]
    InvalidUpload(String),

    /// Wizard action not allowed in the current step
    #[error("cannot {action} while in step {step}")]
    InvalidStep {
        /// Current step
        step: WizardStep,
        /// Attempted action
        action: &'static str,
    },

    /// Field edit attempted while editing is off
    #[error("editing is not enabled")]
    EditingDisabled,

    /// Unknown extracted field
    #[error("unknown field: '{0}'")]
    UnknownField(String),

    /// Every sequence number of a claim id prefix is taken
    #[error("claim sequence exhausted for {0}")]
    SequenceExhausted(String),

    /// Seed data lists the same id twice
    #[error("duplicate {kind} id in seed data: {id}")]
    DuplicateSeedId {
        /// `claim` or `village`
        kind: &'static str,
        /// Repeated id
        id: String,
    },

    /// Seed file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not valid YAML for the seed schema
    #[error("invalid seed data in {path}: {source}")]
    Seed {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_yaml::Error,
    },
}

impl DataError {
    /// Whether the error means a looked-up entity does not exist
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound(_) | Self::VillageNotFound(_))
            || matches!(self, Self::Atlas(AtlasError::UnknownDistrict { .. }))
    }

    /// Whether the error was caused by caller input
    #[inline]
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::Core(_)
            | Self::MissingField(_)
            | Self::InvalidUpload(_)
            | Self::InvalidStep { .. }
            | Self::EditingDisabled
            | Self::UnknownField(_) => true,
            Self::Atlas(err) => err.is_invalid_input(),
            _ => false,
        }
    }
}

/// Result type alias for backend operations
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(DataError::RecordNotFound("IFR-X".into()).is_not_found());
        assert!(DataError::VillageNotFound(9).is_not_found());
        assert!(DataError::EditingDisabled.is_invalid_input());
        assert!(!DataError::EditingDisabled.is_not_found());
        assert!(!DataError::SequenceExhausted("IFR-MP-".into()).is_invalid_input());
        let dup = DataError::DuplicateSeedId {
            kind: "claim",
            id: "IFR-MP-0123".into(),
        };
        assert_eq!(dup.to_string(), "duplicate claim id in seed data: IFR-MP-0123");
        let io = DataError::Io {
            path: "seed.yaml".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(!io.is_invalid_input());
        assert!(!io.is_not_found());
    }

    #[test]
    fn upload_message_is_verbatim() {
        let err = DataError::InvalidUpload("Please upload valid image or PDF files".into());
        assert_eq!(err.to_string(), "Please upload valid image or PDF files");
    }
}
