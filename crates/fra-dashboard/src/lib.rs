//! FRA Atlas dashboard shell
//!
//! Session state (language, theme, page, sidebar), the persisted theme
//! preference and one view model per page, tied together by [`Dashboard`].
//!
//! # Core Concepts
//!
//! - [`Dashboard`]: facade over a [`fra_data::FraBackend`], an atlas cache and
//!   the digitization wizard
//! - [`Session`]: what the shell shows and in which language
//! - [`AtlasControls`]: selects, layer toggles and the timeline of the atlas page
//! - [`ThemeStore`]: file-backed light/dark preference
//!
//! # Example
//!
//! ```rust
//! use fra_dashboard::{Dashboard, ThemeStore};
//! use fra_data::{LatencyProfile, MockBackend, SeedData, ServiceConfig};
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let backend = MockBackend::with_seed(
//!     ServiceConfig::new().with_latency(LatencyProfile::instant()),
//!     SeedData::builtin(),
//! );
//! let dir = tempfile::tempdir().unwrap();
//! let dashboard = Dashboard::new(Arc::new(backend), ThemeStore::new(dir.path().join("theme")));
//! assert_eq!(dashboard.session().document_title(), "Project Overview - FRA Atlas & DSS");
//! # });
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod atlas_panel;
pub mod error;
pub mod page;
pub mod preferences;
pub mod session;
pub mod shell;
pub mod views;

pub use atlas_panel::{AtlasControls, AtlasPanel, LayerToggle, MapMode};
pub use error::{DashboardError, DashboardResult};
pub use page::{nav_items, NavItem, Page};
pub use preferences::ThemeStore;
pub use session::{LocalLanguageShortcut, Session, SessionUpdate};
pub use shell::{Dashboard, DEFAULT_RESET_DELAY};
pub use views::{
    grievance_tone, CommunityView, DssView, GrievanceRow, OverviewView, PlaceholderView,
    RecordRow, RecordsView, StatCard, CARD_COLOURS,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the dashboard
    pub use crate::atlas_panel::{AtlasControls, MapMode};
    pub use crate::error::{DashboardError, DashboardResult};
    pub use crate::page::Page;
    pub use crate::preferences::ThemeStore;
    pub use crate::session::{Session, SessionUpdate};
    pub use crate::shell::Dashboard;
}
