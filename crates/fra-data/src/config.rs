//! Mock backend configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Simulated latency per call, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    /// Overview statistics
    pub stats_ms: u64,
    /// Records list
    pub records_ms: u64,
    /// Record summary
    pub summary_ms: u64,
    /// Strategy report
    pub report_ms: u64,
    /// Document extraction
    pub ocr_ms: u64,
    /// Wizard reset after completion
    pub digitize_reset_ms: u64,
}

impl LatencyProfile {
    /// No delays at all
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            stats_ms: 0,
            records_ms: 0,
            summary_ms: 0,
            report_ms: 0,
            ocr_ms: 0,
            digitize_reset_ms: 0,
        }
    }

    /// Stats delay
    #[inline]
    #[must_use]
    pub fn stats(&self) -> Duration {
        Duration::from_millis(self.stats_ms)
    }

    /// Records delay
    #[inline]
    #[must_use]
    pub fn records(&self) -> Duration {
        Duration::from_millis(self.records_ms)
    }

    /// Summary delay
    #[inline]
    #[must_use]
    pub fn summary(&self) -> Duration {
        Duration::from_millis(self.summary_ms)
    }

    /// Report delay
    #[inline]
    #[must_use]
    pub fn report(&self) -> Duration {
        Duration::from_millis(self.report_ms)
    }

    /// Extraction delay
    #[inline]
    #[must_use]
    pub fn ocr(&self) -> Duration {
        Duration::from_millis(self.ocr_ms)
    }

    /// Delay before a completed wizard returns to upload
    #[inline]
    #[must_use]
    pub fn digitize_reset(&self) -> Duration {
        Duration::from_millis(self.digitize_reset_ms)
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            stats_ms: 1_500,
            records_ms: 1_000,
            summary_ms: 2_000,
            report_ms: 3_000,
            ocr_ms: 3_000,
            digitize_reset_ms: 3_000,
        }
    }
}

/// Mock backend configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Simulated latencies
    pub latency: LatencyProfile,
    /// Seed for recommendation picks; random when absent
    pub rng_seed: Option<u64>,
    /// YAML file overriding the built-in seed data
    pub seed_path: Option<PathBuf>,
}

impl ServiceConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With latency profile
    #[inline]
    #[must_use]
    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// With recommendation RNG seed
    #[inline]
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// With seed data file
    #[inline]
    #[must_use]
    pub fn with_seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_latencies() {
        let l = LatencyProfile::default();
        assert_eq!(l.stats(), Duration::from_millis(1500));
        assert_eq!(l.records(), Duration::from_secs(1));
        assert_eq!(l.summary(), Duration::from_secs(2));
        assert_eq!(l.report(), Duration::from_secs(3));
        assert_eq!(l.ocr(), Duration::from_secs(3));
    }

    #[test]
    fn partial_profile_fills_defaults() {
        let l: LatencyProfile = serde_json::from_str(r#"{"stats_ms": 5}"#).unwrap();
        assert_eq!(l.stats_ms, 5);
        assert_eq!(l.records_ms, 1_000);
    }

    #[test]
    fn builders() {
        let c = ServiceConfig::new()
            .with_latency(LatencyProfile::instant())
            .with_rng_seed(7)
            .with_seed_path("seed.yaml");
        assert_eq!(c.latency.report(), Duration::ZERO);
        assert_eq!(c.rng_seed, Some(7));
        assert!(c.seed_path.is_some());
    }
}
