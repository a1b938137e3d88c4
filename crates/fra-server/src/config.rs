//! Server configuration
//!
//! Read from a TOML file, then overridden from the command line. Every field
//! has a default, so an empty file is a valid configuration.

use crate::error::ConfigError;
use fra_data::{LatencyProfile, ServiceConfig};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind: SocketAddr,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Emit JSON log lines
    pub json_logs: bool,
    /// Theme preference file
    pub preference_file: PathBuf,
    /// Composed atlases kept in memory
    pub cache_capacity: u64,
    /// Skip every simulated delay
    pub instant: bool,
    /// Mock backend settings
    pub service: ServiceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            log_filter: "info,tower_http=debug".into(),
            json_logs: false,
            preference_file: PathBuf::from(".fra-atlas/theme"),
            cache_capacity: 1_024,
            instant: false,
            service: ServiceConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or wrong field types.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Load a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render as TOML
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Render`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// With listen address
    #[inline]
    #[must_use]
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// With log filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// With JSON logs on or off
    #[inline]
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    /// With preference file
    #[inline]
    #[must_use]
    pub fn with_preference_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.preference_file = path.into();
        self
    }

    /// With atlas cache capacity
    #[inline]
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// With delays switched off
    #[inline]
    #[must_use]
    pub fn with_instant(mut self, instant: bool) -> Self {
        self.instant = instant;
        self
    }

    /// With seed data file
    #[inline]
    #[must_use]
    pub fn with_seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.service = self.service.with_seed_path(path);
        self
    }

    /// With recommendation RNG seed
    #[inline]
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.service = self.service.with_rng_seed(seed);
        self
    }

    /// Backend configuration with `instant` applied
    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        if self.instant {
            self.service.clone().with_latency(LatencyProfile::instant())
        } else {
            self.service.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_default() {
        let config = ServerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind.to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn nested_latency_table() {
        let config = ServerConfig::from_toml_str(
            r#"
            bind = "0.0.0.0:8080"
            json_logs = true

            [service]
            rng_seed = 7

            [service.latency]
            report_ms = 10
            "#,
        )
        .unwrap();
        assert!(config.json_logs);
        assert_eq!(config.service.rng_seed, Some(7));
        assert_eq!(config.service.latency.report_ms, 10);
        assert_eq!(config.service.latency.stats_ms, 1_500);
    }

    #[test]
    fn instant_overrides_latency() {
        let config = ServerConfig::new().with_instant(true);
        assert_eq!(config.service_config().latency, LatencyProfile::instant());
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = ServerConfig::from_toml_str("cache_capacity = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rendered_config_reads_back() {
        let config = ServerConfig::new().with_rng_seed(3).with_cache_capacity(16);
        let text = config.to_toml().unwrap();
        assert_eq!(ServerConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
