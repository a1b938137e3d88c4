//! FRA Atlas mock backend
//!
//! Serves the dashboard's data and stands in for its "AI" services: record
//! summaries, scheme recommendations and document extraction. Everything is
//! answered from seed data after a simulated delay.
//!
//! # Core Concepts
//!
//! - [`FraBackend`]: the async seam a real service would implement
//! - [`MockBackend`]: seed-backed implementation with configurable latency
//! - [`ClaimRepository`]: concurrent claim store with id allocation
//! - [`RecordFilter`]: state and status filters of the records table
//! - [`DigitizationWizard`]: upload → processing → review → complete
//!
//! # Example
//!
//! ```rust
//! use fra_data::{FraBackend, LatencyProfile, MockBackend, ServiceConfig, SeedData};
//!
//! # tokio_test::block_on(async {
//! let backend = MockBackend::with_seed(
//!     ServiceConfig::new().with_latency(LatencyProfile::instant()),
//!     SeedData::builtin(),
//! );
//! let records = backend.fra_records().await.unwrap();
//! assert_eq!(records.len(), 15);
//! # });
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod backend;
pub mod config;
pub mod digitizer;
pub mod dss;
pub mod error;
pub mod records;
pub mod repository;
pub mod seed;

pub use backend::{FraBackend, MockBackend};
pub use config::{LatencyProfile, ServiceConfig};
pub use digitizer::{
    accept_files, ConfidenceBand, DigitizationWizard, ExtractedCoordinates, ExtractedRecord,
    UploadedFile, WizardStep, INVALID_UPLOAD_MESSAGE, MAX_FILE_BYTES,
};
pub use dss::{scheme_cards, strategy_report, SchemeCard};
pub use error::{DataError, DataResult};
pub use records::{badge_tone, summary, RecordFilter, NO_RECORDS_MESSAGE};
pub use repository::ClaimRepository;
pub use seed::SeedData;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the backend
    pub use crate::backend::{FraBackend, MockBackend};
    pub use crate::config::{LatencyProfile, ServiceConfig};
    pub use crate::digitizer::{DigitizationWizard, UploadedFile, WizardStep};
    pub use crate::error::{DataError, DataResult};
    pub use crate::records::RecordFilter;
    pub use crate::seed::SeedData;
}
