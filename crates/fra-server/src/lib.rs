//! FRA Atlas & DSS HTTP server
//!
//! Serves the dashboard shell as a JSON API under `/api`.
//!
//! # Example
//!
//! ```rust,no_run
//! use fra_server::{serve, ServerConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! serve(ServerConfig::new().with_instant(true)).await
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, ConfigError};
pub use routes::{router, AppState, AtlasQuery, SessionView};
pub use telemetry::init_tracing;

use anyhow::Context;
use fra_atlas::AtlasCache;
use fra_dashboard::{Dashboard, ThemeStore, DEFAULT_RESET_DELAY};
use fra_data::MockBackend;
use std::sync::Arc;
use tracing::info;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dashboard over a mock backend as configured
///
/// # Errors
///
/// Fails if the seed file or the stored theme cannot be read.
pub async fn build_dashboard(config: &ServerConfig) -> anyhow::Result<Dashboard> {
    let service = config.service_config();
    let reset_delay = if config.instant {
        DEFAULT_RESET_DELAY
    } else {
        service.latency.digitize_reset()
    };
    let backend = MockBackend::new(service).context("failed to build mock backend")?;
    let dashboard = Dashboard::open(
        Arc::new(backend),
        ThemeStore::new(&config.preference_file),
    )
    .await
    .context("failed to open dashboard session")?;
    Ok(dashboard
        .with_cache(AtlasCache::new(config.cache_capacity))
        .with_reset_delay(reset_delay))
}

/// Bind and serve until the process is stopped
///
/// # Errors
///
/// Fails if the dashboard cannot be built or the address cannot be bound.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let dashboard = build_dashboard(&config).await?;
    let app = router(Arc::new(dashboard));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %config.bind, version = VERSION, "FRA Atlas API listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
