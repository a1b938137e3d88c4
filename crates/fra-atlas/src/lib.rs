//! FRA Atlas map pipeline
//!
//! Turns a state/district selection and a set of layer toggles into the
//! overlays the map widget draws.
//!
//! # Architecture
//!
//! ```text
//! AtlasSelection ─┐
//! MapLayerState ──┼─► compose(StateDataset, OverlayCatalog) ─► AtlasOutcome
//! TimelineWindow ─┘            ↑_____________↓
//!                               AtlasCache (keyed by selection, flags, window, revision)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fra_atlas::{compose, AtlasSelection, OverlayCatalog, StateDataset};
//! use fra_core::{MapLayerState, TargetState};
//!
//! let dataset = StateDataset::empty(TargetState::Odisha);
//! let selection = AtlasSelection::new(TargetState::Odisha).with_district("Koraput");
//! let outcome = compose(
//!     &dataset,
//!     &OverlayCatalog::default(),
//!     &selection,
//!     MapLayerState::default(),
//!     None,
//! );
//! assert!(outcome.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod base;
pub mod cache;
pub mod dataset;
pub mod districts;
pub mod error;
pub mod pipeline;
pub mod selection;
pub mod style;
pub mod timeline;

pub use base::{base_layers, BaseLayer, TileSource};
pub use cache::{AtlasCache, AtlasKey, CacheStats};
pub use dataset::{FieldReport, OverlayCatalog, PotentialClaim, StateDataset};
pub use districts::{districts, find_district};
pub use error::{AtlasError, AtlasResult};
pub use pipeline::{
    compose, filter_claims, filter_villages, village_claim_count, AtlasOutcome, AtlasView,
    ClaimMarker, ClaimOverlay, EmptyAtlas, StatusCounts, StyledFeature,
};
pub use selection::{AtlasSelection, DistrictFilter};
pub use style::{MarkerShape, PathStyle};
pub use timeline::{TimelineWindow, YearMonth};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the atlas
    pub use crate::cache::AtlasCache;
    pub use crate::dataset::{OverlayCatalog, StateDataset};
    pub use crate::error::{AtlasError, AtlasResult};
    pub use crate::pipeline::{compose, AtlasOutcome, AtlasView};
    pub use crate::selection::{AtlasSelection, DistrictFilter};
    pub use crate::timeline::{TimelineWindow, YearMonth};
    pub use fra_core::{MapLayer, MapLayerState, TargetState};
}
