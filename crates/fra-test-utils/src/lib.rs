//! Testing utilities for FRA Atlas workspace
//!
//! Shared fixtures: an instant mock backend, a dashboard over it and sample
//! uploads and claims.

#![allow(missing_docs)]

use fra_core::{ClaimType, NewClaim, TargetState};
use fra_dashboard::{Dashboard, ThemeStore};
use fra_data::{LatencyProfile, MockBackend, SeedData, ServiceConfig, UploadedFile};
use std::sync::Arc;
use tempfile::TempDir;

/// Recommendation seed used by every fixture
pub const TEST_RNG_SEED: u64 = 42;

pub fn instant_config() -> ServiceConfig {
    ServiceConfig::new()
        .with_latency(LatencyProfile::instant())
        .with_rng_seed(TEST_RNG_SEED)
}

pub fn instant_backend() -> MockBackend {
    MockBackend::with_seed(instant_config(), SeedData::builtin())
}

/// Dashboard over an instant backend; keep the directory alive for the test
pub fn setup_test_dashboard() -> (Dashboard, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = ThemeStore::new(dir.path().join("theme"));
    (Dashboard::new(Arc::new(instant_backend()), store), dir)
}

pub fn scan_upload() -> UploadedFile {
    UploadedFile::new("patta_scan.jpg", "image/jpeg", 3 * 1024 * 1024)
}

pub fn text_upload() -> UploadedFile {
    UploadedFile::new("notes.txt", "text/plain", 1_024)
}

/// A claim request for the first seeded village of `state`
pub fn new_claim_in(state: TargetState, claimant: &str, claim_type: ClaimType) -> NewClaim {
    let village = SeedData::builtin()
        .villages
        .into_iter()
        .find(|v| v.state == state)
        .unwrap();
    NewClaim {
        claimant_name: claimant.to_string(),
        claim_type,
        village_id: village.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_consistent() {
        let claim = new_claim_in(TargetState::Telangana, "Test", ClaimType::Community);
        let backend = instant_backend();
        assert!(backend.repository().village(claim.village_id).is_some());
        assert!(scan_upload().is_acceptable());
        assert!(!text_upload().is_acceptable());
    }
}
