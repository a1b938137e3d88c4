//! FRA Atlas domain types
//!
//! Shared vocabulary for the Forest Rights Act atlas and decision support
//! dashboard.
//!
//! # Core Concepts
//!
//! - [`Claim`]: an IFR or CFR claim with its status and optional geometry
//! - [`Village`]: a mapped village with a boundary polygon
//! - [`MapLayerState`]: which overlays the atlas composes
//! - [`TargetState`]: the four FRA targeted states
//! - [`Language`]: interface language with a translation catalog
//!
//! # Example
//!
//! ```rust
//! use fra_core::{ClaimId, ClaimStatus, Language};
//!
//! let id: ClaimId = "ifr-mp-0123".parse().unwrap();
//! assert_eq!(id.as_str(), "IFR-MP-0123");
//! assert_eq!(Language::Hindi.t("all"), "सभी");
//! assert_eq!(ClaimStatus::UnderReview.label(), "Under Review");
//! ```

#![warn(unreachable_pub)]

pub mod claim;
pub mod community;
pub mod error;
pub mod geo;
pub mod geojson;
pub mod i18n;
pub mod layers;
pub mod scheme;
pub mod state;
pub mod stats;
pub mod theme;
pub mod village;

pub use claim::{Claim, ClaimId, ClaimStatus, ClaimType, NewClaim};
pub use community::{Grievance, GrievanceStatus, Meeting};
pub use error::{CoreError, CoreResult};
pub use geo::{Bounds, LatLng, Position, Ring};
pub use geojson::{Feature, FeatureCollection, Geometry};
pub use i18n::{translate, Language};
pub use layers::{MapLayer, MapLayerState};
pub use scheme::{Recommendation, SchemeKey};
pub use state::TargetState;
pub use stats::{DashboardStats, Metric};
pub use theme::Theme;
pub use village::{Village, VillageSummary};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commonly used types
pub mod prelude {
    pub use crate::{
        Claim, ClaimId, ClaimStatus, ClaimType, CoreError, CoreResult, LatLng, Language,
        MapLayer, MapLayerState, Ring, TargetState, Theme, Village,
    };
}
