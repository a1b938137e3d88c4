use fra_core::{ClaimId, ClaimType, Language, NewClaim, TargetState};
use fra_data::{
    DigitizationWizard, FraBackend, LatencyProfile, MockBackend, RecordFilter, SeedData,
    ServiceConfig, UploadedFile, WizardStep, NO_RECORDS_MESSAGE,
};
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::time::Instant;

fn assert_waited(started: Instant, expected: Duration) {
    let elapsed = started.elapsed();
    assert!(
        elapsed >= expected && elapsed < expected + Duration::from_millis(5),
        "waited {elapsed:?}, expected {expected:?}"
    );
}

fn default_latency() -> MockBackend {
    MockBackend::with_seed(ServiceConfig::new().with_rng_seed(11), SeedData::builtin())
}

#[tokio::test(start_paused = true)]
async fn stats_arrive_after_their_delay() {
    let backend = default_latency();
    let started = Instant::now();
    let stats = backend.dashboard_stats().await.unwrap();
    assert_waited(started, Duration::from_millis(1500));
    assert_eq!(stats.digitized_records.value, 1_254_321);
    assert_eq!(stats.grievances_logged.change, "+58");
}

#[tokio::test(start_paused = true)]
async fn each_call_waits_its_own_latency() {
    let backend = default_latency();

    let started = Instant::now();
    backend.fra_records().await.unwrap();
    assert_waited(started, Duration::from_secs(1));

    let id: ClaimId = "CFR-OD-0089".parse().unwrap();
    let started = Instant::now();
    let summary = backend.record_summary(&id).await.unwrap();
    assert_waited(started, Duration::from_secs(2));
    assert!(summary.contains("**Jharigaon Community**"));

    let rec = backend.find_recommendation().await.unwrap().unwrap();
    let started = Instant::now();
    backend.strategy_report(&rec, Language::English).await.unwrap();
    assert_waited(started, Duration::from_secs(3));

    let started = Instant::now();
    backend
        .extract_document(&[UploadedFile::new("scan.png", "image/png", 1024)])
        .await
        .unwrap();
    assert_waited(started, Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn lookups_answer_immediately() {
    let backend = default_latency();
    let started = Instant::now();
    assert_eq!(backend.villages().await.unwrap().len(), 17);
    assert_eq!(backend.grievances().await.unwrap().len(), 4);
    assert_eq!(backend.meetings().await.unwrap().len(), 3);
    assert_eq!(backend.overlay_catalog().await.unwrap().field_reports.len(), 2);
    assert!(backend
        .districts(TargetState::Tripura)
        .await
        .unwrap()
        .contains(&"Dhalai".to_string()));
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn same_seed_same_recommendations() {
    let a = default_latency();
    let b = default_latency();
    for _ in 0..5 {
        assert_eq!(
            a.find_recommendation().await.unwrap(),
            b.find_recommendation().await.unwrap()
        );
    }
}

#[tokio::test]
async fn filed_claim_shows_up_in_atlas_and_records() {
    let backend = MockBackend::with_seed(
        ServiceConfig::new().with_latency(LatencyProfile::instant()),
        SeedData::builtin(),
    );
    let id = backend
        .add_claim(NewClaim {
            claimant_name: "Bhima Munda".into(),
            claim_type: ClaimType::Community,
            village_id: 10,
        })
        .await
        .unwrap();
    assert_eq!(id.as_str(), "CFR-OD-0135");

    let odisha = backend.atlas_dataset(TargetState::Odisha).await.unwrap();
    assert!(odisha.claims.iter().any(|c| c.id == id));

    let records = backend.fra_records().await.unwrap();
    let pending = RecordFilter::parse(Some("Odisha"), Some("Pending")).unwrap();
    let ids: Vec<&str> = pending.apply(&records).iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["CFR-OD-0089", "IFR-OD-0321", "CFR-OD-0135"]);
}

#[tokio::test]
async fn empty_filter_result() {
    let backend = MockBackend::with_seed(
        ServiceConfig::new().with_latency(LatencyProfile::instant()),
        SeedData::builtin(),
    );
    let records = backend.fra_records().await.unwrap();
    let filter = RecordFilter::parse(Some("Tripura"), Some("Under Review")).unwrap();
    assert!(filter.apply(&records).is_empty());
    assert_eq!(NO_RECORDS_MESSAGE, "No records match the current filters.");
}

#[tokio::test(start_paused = true)]
async fn wizard_driven_by_backend() {
    let backend = default_latency();
    let mut wizard = DigitizationWizard::new();
    let files = vec![
        UploadedFile::new("page1.jpg", "image/jpeg", 3 * 1024 * 1024),
        UploadedFile::new("page2.pdf", "application/pdf", 512 * 1024),
    ];

    assert_eq!(wizard.begin_upload(files).unwrap(), 2);
    assert_eq!(wizard.step(), WizardStep::Processing);

    let extracted = backend.extract_document(wizard.files()).await.unwrap();
    wizard.finish_processing(extracted).unwrap();
    wizard.toggle_editing().unwrap();
    wizard.edit_field("pattalHolder", "Soma Majhi").unwrap();

    let record = wizard.complete().unwrap();
    assert_eq!(record.pattal_holder, "Soma Majhi");
    assert_eq!(wizard.step(), WizardStep::Complete);
}
