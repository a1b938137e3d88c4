//! End-to-end tests of the dashboard shell over the mock backend

use fra_core::{ClaimStatus, ClaimType, Language, MapLayer, TargetState, Theme};
use fra_dashboard::prelude::*;
use fra_dashboard::{OverviewView, PlaceholderView};
use fra_data::{RecordFilter, WizardStep};
use fra_test_utils::{new_claim_in, scan_upload, setup_test_dashboard, text_upload};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[tokio::test]
async fn overview_has_four_cards() {
    let (dash, _dir) = setup_test_dashboard();
    let OverviewView::Ready { cards } = dash.overview().await.unwrap() else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[1].title, "Villages Mapped");
}

#[tokio::test]
async fn overview_follows_session_language() {
    let (dash, _dir) = setup_test_dashboard();
    dash.update_session(SessionUpdate {
        language: Some(Language::Hindi),
        ..SessionUpdate::default()
    })
    .await
    .unwrap();
    let OverviewView::Ready { cards } = dash.overview().await.unwrap() else {
        panic!("expected cards");
    };
    assert_eq!(cards[0].title, "डिजिटल FRA रिकॉर्ड्स");
}

#[tokio::test]
async fn filed_claim_shows_up_in_records() {
    let (dash, _dir) = setup_test_dashboard();
    let id = dash
        .file_claim(new_claim_in(TargetState::Telangana, "Soyam Bapu", ClaimType::Community))
        .await
        .unwrap();

    let view = dash
        .records(
            RecordFilter::new()
                .with_state(TargetState::Telangana)
                .with_status(ClaimStatus::Pending),
        )
        .await
        .unwrap();
    assert!(view.rows.iter().any(|r| r.id == id && r.tone == "yellow"));

    let summary = dash.record_summary(&id).await.unwrap();
    assert!(summary.contains(id.as_str()));
}

#[tokio::test]
async fn blank_claimant_is_rejected() {
    let (dash, _dir) = setup_test_dashboard();
    let err = dash
        .file_claim(new_claim_in(TargetState::Odisha, "  ", ClaimType::Individual))
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());
}

#[tokio::test]
async fn atlas_panel_for_district() {
    let (dash, _dir) = setup_test_dashboard();
    let mut controls = AtlasControls::default();
    controls.select_state(TargetState::MadhyaPradesh);
    controls.toggle_layer(MapLayer::ChangeDetection);

    let panel = dash.atlas(&controls).await.unwrap();
    assert!(!panel.outcome.is_empty());
    assert!(panel.timeline.is_some());
    assert!(panel.local_language.is_none());
}

#[tokio::test]
async fn atlas_for_unknown_district_is_not_found() {
    let mut controls = AtlasControls::default();
    controls.select_state(TargetState::Tripura);
    let err = controls.select_district("Mandla").unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn digitize_review_complete() {
    let (dash, _dir) = setup_test_dashboard();
    let wizard = dash.digitize(vec![scan_upload(), text_upload()]).await.unwrap();
    assert_eq!(wizard.step(), WizardStep::Review);
    assert_eq!(wizard.files().len(), 1);

    assert!(dash.edit_digitized_field("village", "Kalahandi").is_err());
    assert!(dash.toggle_digitizer_editing().unwrap());
    dash.edit_digitized_field("pattalHolder", "Ramesh Gond").unwrap();

    let record = dash.complete_digitization().unwrap();
    assert_eq!(record.pattal_holder, "Ramesh Gond");
    assert_eq!(dash.digitizer().step(), WizardStep::Complete);
    assert!(!dash.digitizer().is_editing());
}

#[tokio::test]
async fn community_lists_both_sections() {
    let (dash, _dir) = setup_test_dashboard();
    let view = dash.community().await.unwrap();
    assert_eq!(view.grievances.len(), 4);
    assert_eq!(view.meetings.len(), 3);
}

#[tokio::test]
async fn theme_update_persists_only_on_change() {
    let (dash, dir) = setup_test_dashboard();
    let session = dash
        .update_session(SessionUpdate {
            page: Some("dss".into()),
            ..SessionUpdate::default()
        })
        .await
        .unwrap();
    assert_eq!(session.page, Page::Dss);
    assert!(!dir.path().join("theme").exists());

    dash.update_session(SessionUpdate {
        theme: Some(Theme::Dark),
        ..SessionUpdate::default()
    })
    .await
    .unwrap();
    let store = ThemeStore::new(dir.path().join("theme"));
    assert_eq!(store.load().await.unwrap(), Theme::Dark);
}

#[test]
fn placeholders() {
    assert_eq!(
        PlaceholderView::asset_mapping(Language::English).placeholder,
        Some("[Asset Map Viewer Placeholder]")
    );
    assert!(PlaceholderView::settings(Language::English).text.starts_with("Configure API keys"));
}

proptest! {
    #[test]
    fn prop_navigation_always_lands_on_a_page(id in "[a-z_]{0,16}") {
        let mut session = Session::default();
        session.open_sidebar();
        let page = session.navigate(&id);
        let known = Page::ALL.into_iter().find(|p| p.id() == id);
        prop_assert_eq!(page, known.unwrap_or(Page::Overview));
        prop_assert!(!session.sidebar_open);
    }
}
