//! Backend seam and its mock implementation
//!
//! [`FraBackend`] is everything the dashboard asks of a server. [`MockBackend`]
//! answers from seed data after a configurable delay; a real service would
//! implement the same trait.

use crate::config::ServiceConfig;
use crate::digitizer::{accept_files, ExtractedRecord, UploadedFile};
use crate::dss;
use crate::error::{DataError, DataResult};
use crate::records;
use crate::repository::ClaimRepository;
use crate::seed::SeedData;
use fra_atlas::{districts, OverlayCatalog, StateDataset};
use fra_core::{
    Claim, ClaimId, DashboardStats, Grievance, Language, Meeting, NewClaim, Recommendation,
    TargetState, Village,
};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Data and "AI" operations behind the dashboard
#[async_trait::async_trait]
pub trait FraBackend: Send + Sync {
    /// Overview counters
    async fn dashboard_stats(&self) -> DataResult<DashboardStats>;

    /// Every claim record, in filing order
    async fn fra_records(&self) -> DataResult<Vec<Claim>>;

    /// One claim with its dates, rejection reason and resolution
    async fn claim(&self, id: &ClaimId) -> DataResult<Claim>;

    /// Markdown summary of one record
    async fn record_summary(&self, id: &ClaimId) -> DataResult<String>;

    /// A recommendation for some village, `None` when there are none
    async fn find_recommendation(&self) -> DataResult<Option<Recommendation>>;

    /// Markdown intervention report for a recommendation
    async fn strategy_report(
        &self,
        recommendation: &Recommendation,
        lang: Language,
    ) -> DataResult<String>;

    /// Read claim fields from scanned documents
    async fn extract_document(&self, files: &[UploadedFile]) -> DataResult<ExtractedRecord>;

    /// Every mapped village
    async fn villages(&self) -> DataResult<Vec<Village>>;

    /// File a new claim; returns its id
    async fn add_claim(&self, request: NewClaim) -> DataResult<ClaimId>;

    /// Villages and claims of one state
    async fn atlas_dataset(&self, state: TargetState) -> DataResult<StateDataset>;

    /// Thematic overlays
    async fn overlay_catalog(&self) -> DataResult<OverlayCatalog>;

    /// Logged grievances
    async fn grievances(&self) -> DataResult<Vec<Grievance>>;

    /// Recent gram sabha meetings
    async fn meetings(&self) -> DataResult<Vec<Meeting>>;

    /// District names of a state
    async fn districts(&self, state: TargetState) -> DataResult<Vec<String>>;

    /// Changes whenever claims or villages change
    fn dataset_revision(&self) -> u64;
}

/// Seed-backed backend with simulated latency
#[derive(Debug)]
pub struct MockBackend {
    config: ServiceConfig,
    seed: Arc<SeedData>,
    repo: ClaimRepository,
    rng: Mutex<StdRng>,
}

impl MockBackend {
    /// Backend over the configured seed file, or the built-in seed
    ///
    /// # Errors
    ///
    /// Returns an error if the configured seed file cannot be loaded.
    pub fn new(config: ServiceConfig) -> DataResult<Self> {
        let seed = match &config.seed_path {
            Some(path) => SeedData::load(path)?,
            None => SeedData::builtin(),
        };
        Ok(Self::with_seed(config, seed))
    }

    /// Backend over explicit seed data
    #[must_use]
    pub fn with_seed(config: ServiceConfig, seed: SeedData) -> Self {
        let rng = match config.rng_seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        info!(
            villages = seed.villages.len(),
            claims = seed.claims.len(),
            seeded_rng = config.rng_seed.is_some(),
            "mock backend ready"
        );
        Self {
            repo: ClaimRepository::from_seed(&seed),
            seed: Arc::new(seed),
            rng: Mutex::new(rng),
            config,
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Claim store
    #[inline]
    #[must_use]
    pub fn repository(&self) -> &ClaimRepository {
        &self.repo
    }

    async fn delay(&self, duration: Duration, op: &'static str) {
        if duration.is_zero() {
            return;
        }
        debug!(op, ?duration, "simulating latency");
        tokio::time::sleep(duration).await;
    }
}

#[async_trait::async_trait]
impl FraBackend for MockBackend {
    async fn dashboard_stats(&self) -> DataResult<DashboardStats> {
        self.delay(self.config.latency.stats(), "dashboard_stats").await;
        Ok(self.seed.stats.clone())
    }

    async fn fra_records(&self) -> DataResult<Vec<Claim>> {
        self.delay(self.config.latency.records(), "fra_records").await;
        Ok(self.repo.claims())
    }

    async fn claim(&self, id: &ClaimId) -> DataResult<Claim> {
        self.repo
            .get(id)
            .ok_or_else(|| DataError::RecordNotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    async fn record_summary(&self, id: &ClaimId) -> DataResult<String> {
        let claim = self
            .repo
            .get(id)
            .ok_or_else(|| DataError::RecordNotFound(id.to_string()))?;
        self.delay(self.config.latency.summary(), "record_summary").await;
        Ok(records::summary(&claim))
    }

    async fn find_recommendation(&self) -> DataResult<Option<Recommendation>> {
        let picked = {
            let mut rng = self.rng.lock();
            dss::pick(&self.seed.recommendations, &mut *rng).cloned()
        };
        if let Some(rec) = &picked {
            debug!(village = %rec.village, "recommendation picked");
        }
        Ok(picked)
    }

    #[instrument(skip(self, recommendation), fields(village = %recommendation.village))]
    async fn strategy_report(
        &self,
        recommendation: &Recommendation,
        lang: Language,
    ) -> DataResult<String> {
        self.delay(self.config.latency.report(), "strategy_report").await;
        Ok(dss::strategy_report(recommendation, lang))
    }

    async fn extract_document(&self, files: &[UploadedFile]) -> DataResult<ExtractedRecord> {
        let accepted = accept_files(files.to_vec())?;
        info!(files = accepted.len(), "extracting claim documents");
        self.delay(self.config.latency.ocr(), "extract_document").await;
        Ok(ExtractedRecord::template())
    }

    async fn villages(&self) -> DataResult<Vec<Village>> {
        Ok(self.repo.villages().to_vec())
    }

    async fn add_claim(&self, request: NewClaim) -> DataResult<ClaimId> {
        self.repo.add_claim(request)
    }

    async fn atlas_dataset(&self, state: TargetState) -> DataResult<StateDataset> {
        Ok(self.repo.dataset(state))
    }

    async fn overlay_catalog(&self) -> DataResult<OverlayCatalog> {
        Ok(self.seed.overlays.clone())
    }

    async fn grievances(&self) -> DataResult<Vec<Grievance>> {
        Ok(self.seed.grievances.clone())
    }

    async fn meetings(&self) -> DataResult<Vec<Meeting>> {
        Ok(self.seed.meetings.clone())
    }

    async fn districts(&self, state: TargetState) -> DataResult<Vec<String>> {
        Ok(districts(state).iter().map(ToString::to_string).collect())
    }

    fn dataset_revision(&self) -> u64 {
        self.repo.revision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatencyProfile;

    fn instant() -> MockBackend {
        MockBackend::with_seed(
            ServiceConfig::new()
                .with_latency(LatencyProfile::instant())
                .with_rng_seed(3),
            SeedData::builtin(),
        )
    }

    #[tokio::test]
    async fn unknown_record_has_no_summary() {
        let backend = instant();
        let id: ClaimId = "IFR-MP-9999".parse().unwrap();
        let err = backend.record_summary(&id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn claim_detail_carries_rejection() {
        let backend = instant();
        let rejected = backend
            .fra_records()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.status == fra_core::ClaimStatus::Rejected)
            .unwrap();
        let claim = backend.claim(&rejected.id).await.unwrap();
        assert_eq!(claim, rejected);
        assert!(claim.rejection_reason.is_some());

        let missing: ClaimId = "CFR-TS-9999".parse().unwrap();
        assert!(backend.claim(&missing).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn filing_changes_revision_and_records() {
        let backend = instant();
        let before = backend.dataset_revision();
        let id = backend
            .add_claim(NewClaim {
                claimant_name: "Kamla Bai".into(),
                claim_type: fra_core::ClaimType::Individual,
                village_id: 4,
            })
            .await
            .unwrap();
        assert_ne!(backend.dataset_revision(), before);
        let records = backend.fra_records().await.unwrap();
        assert_eq!(records.len(), 16);
        assert_eq!(records[15].id, id);
    }

    #[tokio::test]
    async fn extraction_rejects_unsupported_files() {
        let backend = instant();
        let err = backend
            .extract_document(&[UploadedFile::new("a.txt", "text/plain", 1)])
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn missing_seed_file_fails_construction() {
        let config = ServiceConfig::new().with_seed_path("/nonexistent/seed.yaml");
        assert!(matches!(MockBackend::new(config), Err(DataError::Io { .. })));
    }
}
