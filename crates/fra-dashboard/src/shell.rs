//! Dashboard facade
//!
//! [`Dashboard`] owns the session, the atlas cache and the digitization wizard
//! and turns backend data into page view models. It is the single entry point
//! the HTTP layer talks to.

use crate::atlas_panel::{AtlasControls, AtlasPanel};
use crate::error::{DashboardError, DashboardResult};
use crate::preferences::ThemeStore;
use crate::session::{Session, SessionUpdate};
use crate::views::{CommunityView, DssView, OverviewView, RecordsView};
use fra_atlas::{compose, AtlasCache, AtlasKey};
use fra_core::{i18n, Claim, ClaimId, Language, NewClaim, Recommendation, Theme, Village};
use fra_data::{
    DigitizationWizard, ExtractedRecord, FraBackend, RecordFilter, UploadedFile, WizardStep,
};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Delay before a completed digitization returns to the upload step
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3_000);

#[derive(Debug, Default)]
struct WizardSlot {
    wizard: DigitizationWizard,
    /// Bumped on every upload, completion and reset so work started under an
    /// older epoch leaves the wizard alone
    epoch: u64,
}

#[derive(Debug, Default)]
struct DssState {
    recommendation: Option<Recommendation>,
    report: Option<String>,
}

/// The dashboard shell
pub struct Dashboard {
    backend: Arc<dyn FraBackend>,
    cache: AtlasCache,
    session: RwLock<Session>,
    themes: ThemeStore,
    /// Held across a theme change and its save so the file follows the session
    theme_writes: tokio::sync::Mutex<()>,
    wizard: Arc<Mutex<WizardSlot>>,
    dss: Mutex<DssState>,
    reset_delay: Duration,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("session", &*self.session.read())
            .field("themes", &self.themes)
            .field("cache", &self.cache.stats())
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Shell over a backend with a fresh light-theme session
    #[must_use]
    pub fn new(backend: Arc<dyn FraBackend>, themes: ThemeStore) -> Self {
        Self {
            backend,
            cache: AtlasCache::default(),
            session: RwLock::new(Session::default()),
            themes,
            theme_writes: tokio::sync::Mutex::new(()),
            wizard: Arc::default(),
            dss: Mutex::default(),
            reset_delay: DEFAULT_RESET_DELAY,
        }
    }

    /// Shell whose session starts with the stored theme
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Preference`] if the preference file exists
    /// but cannot be read.
    pub async fn open(backend: Arc<dyn FraBackend>, themes: ThemeStore) -> DashboardResult<Self> {
        let theme = themes.load().await?;
        info!(%theme, path = %themes.path().display(), "dashboard session opened");
        let dashboard = Self::new(backend, themes);
        *dashboard.session.write() = Session::with_theme(theme);
        Ok(dashboard)
    }

    /// Use a different atlas cache
    #[inline]
    #[must_use]
    pub fn with_cache(mut self, cache: AtlasCache) -> Self {
        self.cache = cache;
        self
    }

    /// Change how long a completed digitization stays on screen
    #[inline]
    #[must_use]
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// Backend in use
    #[inline]
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn FraBackend> {
        &self.backend
    }

    /// Atlas cache
    #[inline]
    #[must_use]
    pub fn cache(&self) -> &AtlasCache {
        &self.cache
    }

    fn language(&self) -> Language {
        self.session.read().language
    }

    // -- session ---------------------------------------------------------

    /// Snapshot of the session
    #[must_use]
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    /// Apply a partial session update, persisting a changed theme
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Preference`] if the theme cannot be saved;
    /// the in-memory session keeps the new theme.
    pub async fn update_session(&self, update: SessionUpdate) -> DashboardResult<Session> {
        let _theme_write = self.theme_writes.lock().await;
        let (snapshot, theme_changed) = {
            let mut session = self.session.write();
            let changed = session.apply(update);
            (session.clone(), changed)
        };
        if theme_changed {
            self.themes.save(snapshot.theme).await?;
        }
        Ok(snapshot)
    }

    /// Flip light/dark and persist it
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Preference`] if the theme cannot be saved.
    pub async fn toggle_theme(&self) -> DashboardResult<Theme> {
        let _theme_write = self.theme_writes.lock().await;
        let theme = self.session.write().toggle_theme();
        self.themes.save(theme).await?;
        Ok(theme)
    }

    /// Full translation table of a language
    #[must_use]
    pub fn translations(lang: Language) -> HashMap<&'static str, &'static str> {
        i18n::table(lang)
    }

    // -- overview --------------------------------------------------------

    /// Overview cards
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub async fn overview(&self) -> DashboardResult<OverviewView> {
        let stats = self.backend.dashboard_stats().await?;
        Ok(OverviewView::ready(&stats, self.language()))
    }

    // -- atlas -----------------------------------------------------------

    /// Compose the atlas for a set of controls, reusing a cached map while
    /// the backend's data is unchanged
    ///
    /// # Errors
    ///
    /// Propagates backend failures. Callers that waited on the same failed
    /// composition each get the shared error.
    pub async fn atlas(&self, controls: &AtlasControls) -> DashboardResult<AtlasPanel> {
        let window = controls.active_window();
        let key = AtlasKey::new(
            &controls.selection,
            &controls.layers,
            window,
            self.backend.dataset_revision(),
        );
        let composing = async {
            debug!(state = %controls.selection.state, "composing atlas");
            let dataset = self.backend.atlas_dataset(controls.selection.state).await?;
            let overlays = self.backend.overlay_catalog().await?;
            Ok::<_, DashboardError>(compose(
                &dataset,
                &overlays,
                &controls.selection,
                controls.layers,
                window,
            ))
        };
        let outcome = self
            .cache
            .try_get_or_compose(key, composing)
            .await
            .map_err(|err| Arc::try_unwrap(err).unwrap_or_else(DashboardError::Shared))?;
        Ok(AtlasPanel::new(controls, &self.session.read(), outcome))
    }

    /// Every mapped village
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub async fn villages(&self) -> DashboardResult<Vec<Village>> {
        Ok(self.backend.villages().await?)
    }

    /// File a claim; cached maps go stale through the dataset revision
    ///
    /// # Errors
    ///
    /// Returns the backend's validation errors.
    pub async fn file_claim(&self, request: NewClaim) -> DashboardResult<ClaimId> {
        let id = self.backend.add_claim(request).await?;
        debug!(%id, "claim filed through dashboard");
        Ok(id)
    }

    // -- records ---------------------------------------------------------

    /// Filtered records table
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub async fn records(&self, filter: RecordFilter) -> DashboardResult<RecordsView> {
        let claims = self.backend.fra_records().await?;
        Ok(RecordsView::new(&claims, filter, self.language()))
    }

    /// Full detail of one claim
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id.
    pub async fn claim(&self, id: &ClaimId) -> DashboardResult<Claim> {
        Ok(self.backend.claim(id).await?)
    }

    /// Summary of one record
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id.
    pub async fn record_summary(&self, id: &ClaimId) -> DashboardResult<String> {
        Ok(self.backend.record_summary(id).await?)
    }

    // -- decision support ------------------------------------------------

    /// Current DSS page
    #[must_use]
    pub fn dss(&self) -> DssView {
        let state = self.dss.lock();
        DssView::new(state.recommendation.clone(), state.report.clone(), self.language())
    }

    /// Look up a new recommendation, discarding any earlier report
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub async fn find_recommendation(&self) -> DashboardResult<DssView> {
        let found = self.backend.find_recommendation().await?;
        if found.is_none() {
            warn!("backend had no recommendation");
        }
        {
            let mut state = self.dss.lock();
            state.recommendation = found;
            state.report = None;
        }
        Ok(self.dss())
    }

    /// Generate the strategy report for the current recommendation
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NoRecommendation`] before one was found.
    pub async fn strategy_report(&self) -> DashboardResult<DssView> {
        let recommendation = self
            .dss
            .lock()
            .recommendation
            .clone()
            .ok_or(DashboardError::NoRecommendation)?;
        let report = self
            .backend
            .strategy_report(&recommendation, self.language())
            .await?;
        {
            let mut state = self.dss.lock();
            // a newer recommendation replaced this one while the report ran
            if state.recommendation.as_ref() == Some(&recommendation) {
                state.report = Some(report);
            }
        }
        Ok(self.dss())
    }

    // -- community -------------------------------------------------------

    /// Grievances and meetings
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub async fn community(&self) -> DashboardResult<CommunityView> {
        let (grievances, meetings) =
            tokio::try_join!(self.backend.grievances(), self.backend.meetings())?;
        Ok(CommunityView::new(grievances, meetings))
    }

    // -- digitization ----------------------------------------------------

    /// Snapshot of the digitization wizard
    #[must_use]
    pub fn digitizer(&self) -> DigitizationWizard {
        self.wizard.lock().wizard.clone()
    }

    /// Upload scans and run extraction, ending on the review step
    ///
    /// A failed extraction puts the wizard back on the upload step. If the
    /// wizard was reset or reused while the extraction ran, its result is
    /// dropped and the wizard is left as it is.
    ///
    /// # Errors
    ///
    /// Returns the wizard's step or upload errors, the backend's extraction
    /// error, or [`DashboardError::StaleDigitization`] for a superseded run.
    pub async fn digitize(&self, files: Vec<UploadedFile>) -> DashboardResult<DigitizationWizard> {
        let (accepted, epoch) = {
            let mut slot = self.wizard.lock();
            slot.wizard.begin_upload(files)?;
            slot.epoch += 1;
            (slot.wizard.files().to_vec(), slot.epoch)
        };
        let extracted = self.backend.extract_document(&accepted).await;

        let mut slot = self.wizard.lock();
        if slot.epoch != epoch {
            warn!(epoch, current = slot.epoch, "discarding superseded extraction");
            return Err(DashboardError::StaleDigitization);
        }
        match extracted {
            Ok(record) => {
                slot.wizard.finish_processing(record)?;
                Ok(slot.wizard.clone())
            }
            Err(err) => {
                warn!(error = %err, "extraction failed, resetting digitizer");
                slot.wizard.reset();
                Err(err.into())
            }
        }
    }

    /// Flip field editing on the review step
    ///
    /// # Errors
    ///
    /// Fails outside the review step.
    pub fn toggle_digitizer_editing(&self) -> DashboardResult<bool> {
        Ok(self.wizard.lock().wizard.toggle_editing()?)
    }

    /// Correct an extracted field
    ///
    /// # Errors
    ///
    /// Fails outside review, while editing is off, or for an unknown field.
    pub fn edit_digitized_field(&self, field: &str, value: &str) -> DashboardResult<()> {
        Ok(self.wizard.lock().wizard.edit_field(field, value)?)
    }

    /// Accept the reviewed record
    ///
    /// The wizard shows the complete step, then returns to upload after the
    /// reset delay. Outside a tokio runtime the reset is left to the caller.
    ///
    /// # Errors
    ///
    /// Fails outside the review step.
    pub fn complete_digitization(&self) -> DashboardResult<ExtractedRecord> {
        let (record, epoch) = {
            let mut slot = self.wizard.lock();
            let record = slot.wizard.complete()?;
            slot.epoch += 1;
            (record, slot.epoch)
        };
        info!(claim_id = %record.claim_id, "digitization complete");

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let wizard = Arc::clone(&self.wizard);
                let delay = self.reset_delay;
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let mut slot = wizard.lock();
                    if slot.epoch == epoch && slot.wizard.step() == WizardStep::Complete {
                        slot.wizard.reset();
                        debug!("digitizer reset after completion");
                    }
                });
            }
            Err(_) => warn!("no runtime, digitizer will not reset on its own"),
        }
        Ok(record)
    }

    /// Abandon the current digitization
    pub fn reset_digitizer(&self) {
        let mut slot = self.wizard.lock();
        slot.wizard.reset();
        slot.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fra_core::TargetState;
    use fra_data::{LatencyProfile, MockBackend, SeedData, ServiceConfig};
    use pretty_assertions::assert_eq;

    fn dashboard_with(dir: &tempfile::TempDir, latency: LatencyProfile) -> Dashboard {
        let backend = MockBackend::with_seed(
            ServiceConfig::new().with_latency(latency).with_rng_seed(7),
            SeedData::builtin(),
        );
        Dashboard::new(Arc::new(backend), ThemeStore::new(dir.path().join("theme")))
    }

    fn dashboard(dir: &tempfile::TempDir) -> Dashboard {
        dashboard_with(dir, LatencyProfile::instant())
    }

    fn scan() -> UploadedFile {
        UploadedFile::new("patta.pdf", "application/pdf", 2 * 1024 * 1024)
    }

    #[tokio::test]
    async fn report_needs_a_recommendation() {
        let dir = tempfile::tempdir().unwrap();
        let dash = dashboard(&dir);
        let err = dash.strategy_report().await.unwrap_err();
        assert!(matches!(err, DashboardError::NoRecommendation));

        let view = dash.find_recommendation().await.unwrap();
        assert!(view.recommendation.is_some());
        assert!(!view.schemes.is_empty());
        let view = dash.strategy_report().await.unwrap();
        assert!(view.report.is_some());

        // finding again drops the old report
        let view = dash.find_recommendation().await.unwrap();
        assert!(view.report.is_none());
    }

    #[tokio::test]
    async fn theme_toggle_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let dash = dashboard(&dir);
        assert_eq!(dash.toggle_theme().await.unwrap(), Theme::Dark);

        let reopened = Dashboard::open(
            Arc::clone(dash.backend()),
            ThemeStore::new(dir.path().join("theme")),
        )
        .await
        .unwrap();
        assert_eq!(reopened.session().theme, Theme::Dark);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_toggles_leave_file_matching_session() {
        let dir = tempfile::tempdir().unwrap();
        let dash = Arc::new(dashboard(&dir));
        let store = ThemeStore::new(dir.path().join("theme"));

        for _ in 0..50 {
            let toggles: Vec<_> = (0..3)
                .map(|_| {
                    let dash = Arc::clone(&dash);
                    tokio::spawn(async move { dash.toggle_theme().await })
                })
                .collect();
            for toggle in toggles {
                toggle.await.unwrap().unwrap();
            }
            assert_eq!(store.load().await.unwrap(), dash.session().theme);
        }
    }

    #[tokio::test]
    async fn atlas_is_cached_until_a_claim_is_filed() {
        let dir = tempfile::tempdir().unwrap();
        let dash = dashboard(&dir);
        let mut controls = AtlasControls::default();
        controls.select_state(TargetState::Odisha);

        let first = dash.atlas(&controls).await.unwrap();
        let second = dash.atlas(&controls).await.unwrap();
        assert!(Arc::ptr_eq(&first.outcome, &second.outcome));

        let village = dash
            .villages()
            .await
            .unwrap()
            .into_iter()
            .find(|v| v.state == TargetState::Odisha)
            .unwrap();
        dash.file_claim(NewClaim {
            claimant_name: "Laxmi Naik".into(),
            claim_type: fra_core::ClaimType::Individual,
            village_id: village.id,
        })
        .await
        .unwrap();
        let third = dash.atlas(&controls).await.unwrap();
        assert!(!Arc::ptr_eq(&first.outcome, &third.outcome));
    }

    #[tokio::test(start_paused = true)]
    async fn completed_digitization_resets_after_delay() {
        let dir = tempfile::tempdir().unwrap();
        let dash = dashboard(&dir);
        let wizard = dash.digitize(vec![scan()]).await.unwrap();
        assert_eq!(wizard.step(), WizardStep::Review);

        dash.complete_digitization().unwrap();
        assert_eq!(dash.digitizer().step(), WizardStep::Complete);

        tokio::time::sleep(DEFAULT_RESET_DELAY + Duration::from_millis(1)).await;
        assert_eq!(dash.digitizer().step(), WizardStep::Upload);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_reset_leaves_new_session_alone() {
        let dir = tempfile::tempdir().unwrap();
        let dash = dashboard(&dir);
        dash.digitize(vec![scan()]).await.unwrap();
        dash.complete_digitization().unwrap();

        dash.reset_digitizer();
        dash.digitize(vec![scan()]).await.unwrap();
        tokio::time::sleep(DEFAULT_RESET_DELAY * 2).await;
        assert_eq!(dash.digitizer().step(), WizardStep::Review);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_extraction_leaves_new_upload_alone() {
        let dir = tempfile::tempdir().unwrap();
        let dash = Arc::new(dashboard_with(&dir, LatencyProfile::default()));
        let digitize = |dash: &Arc<Dashboard>| {
            let dash = Arc::clone(dash);
            tokio::spawn(async move { dash.digitize(vec![scan()]).await })
        };

        let abandoned = digitize(&dash);
        tokio::time::sleep(Duration::from_secs(1)).await;
        dash.reset_digitizer();
        let live = digitize(&dash);

        let abandoned = abandoned.await.unwrap().unwrap_err();
        assert!(abandoned.is_conflict());
        assert_eq!(dash.digitizer().step(), WizardStep::Processing);

        let live = live.await.unwrap().unwrap();
        assert_eq!(live.step(), WizardStep::Review);
        assert_eq!(dash.digitizer().step(), WizardStep::Review);
    }

    #[tokio::test]
    async fn bad_upload_keeps_upload_step() {
        let dir = tempfile::tempdir().unwrap();
        let dash = dashboard(&dir);
        let err = dash
            .digitize(vec![UploadedFile::new("notes.txt", "text/plain", 10)])
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(dash.digitizer().step(), WizardStep::Upload);
    }
}
