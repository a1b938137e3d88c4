//! HTTP routes under `/api`

use crate::error::ApiResult;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use fra_atlas::{base_layers, TileSource, TimelineWindow, YearMonth};
use fra_core::{
    Claim, ClaimId, Language, MapLayerState, NewClaim, TargetState, Theme, VillageSummary,
};
use fra_dashboard::{
    AtlasControls, AtlasPanel, CommunityView, Dashboard, DssView, MapMode, NavItem, OverviewView,
    PlaceholderView, RecordsView, Session, SessionUpdate,
};
use fra_data::{DigitizationWizard, ExtractedRecord, RecordFilter, UploadedFile};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handler state
pub type AppState = Arc<Dashboard>;

/// Router with every route mounted under `/api`
pub fn router(dashboard: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/villages", get(villages))
        .route("/claims", get(claims).post(add_claim))
        .route("/claims/{id}", get(claim_detail))
        .route("/stats", get(stats))
        .route("/records", get(records))
        .route("/records/{id}/summary", get(record_summary))
        .route("/states", get(states))
        .route("/states/{state}/districts", get(districts))
        .route("/atlas", get(atlas))
        .route("/atlas/base-layers", get(atlas_base_layers))
        .route("/recommendations", get(find_recommendation))
        .route("/recommendations/report", post(strategy_report))
        .route("/digitize", get(digitizer).post(digitize).delete(reset_digitizer))
        .route("/digitize/editing", post(toggle_editing))
        .route("/digitize/fields", put(edit_field))
        .route("/digitize/complete", post(complete_digitization))
        .route("/community", get(community))
        .route("/asset-mapping", get(asset_mapping))
        .route("/settings", get(settings))
        .route("/i18n/{lang}", get(translations))
        .route("/session", get(session).put(update_session))
        .route("/session/theme/toggle", post(toggle_theme));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(dashboard)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Backend running" }))
}

async fn villages(State(dash): State<AppState>) -> ApiResult<Json<Vec<VillageSummary>>> {
    let villages = dash.villages().await?;
    Ok(Json(villages.iter().map(VillageSummary::from).collect()))
}

async fn claims(State(dash): State<AppState>) -> ApiResult<Json<Vec<Claim>>> {
    Ok(Json(dash.backend().fra_records().await?))
}

async fn add_claim(
    State(dash): State<AppState>,
    payload: Result<Json<NewClaim>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;
    let id = dash.file_claim(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Claim added", "id": id })),
    ))
}

async fn claim_detail(
    State(dash): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Claim>> {
    let id: ClaimId = id.parse()?;
    Ok(Json(dash.claim(&id).await?))
}

async fn stats(State(dash): State<AppState>) -> ApiResult<Json<OverviewView>> {
    Ok(Json(dash.overview().await?))
}

#[derive(Debug, Default, Deserialize)]
struct RecordsQuery {
    state: Option<String>,
    status: Option<String>,
}

async fn records(
    State(dash): State<AppState>,
    query: Result<Query<RecordsQuery>, QueryRejection>,
) -> ApiResult<Json<RecordsView>> {
    let Query(query) = query?;
    let filter = RecordFilter::parse(query.state.as_deref(), query.status.as_deref())?;
    Ok(Json(dash.records(filter).await?))
}

async fn record_summary(
    State(dash): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id: ClaimId = id.parse()?;
    let summary = dash.record_summary(&id).await?;
    Ok(Json(json!({ "id": id, "summary": summary })))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StateInfo {
    name: TargetState,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_language: Option<Language>,
}

async fn states() -> Json<Vec<StateInfo>> {
    Json(
        TargetState::ALL
            .into_iter()
            .map(|state| StateInfo {
                name: state,
                code: state.code(),
                local_language: state.local_language(),
            })
            .collect(),
    )
}

async fn districts(
    State(dash): State<AppState>,
    Path(state): Path<String>,
) -> ApiResult<Json<Vec<String>>> {
    let state: TargetState = state.parse()?;
    Ok(Json(dash.backend().districts(state).await?))
}

/// Query of the atlas endpoint; everything optional
#[derive(Debug, Default, Deserialize)]
pub struct AtlasQuery {
    /// State name or code
    pub state: Option<String>,
    /// District name or `All`
    pub district: Option<String>,
    /// Comma-separated layer keys; absent means the default layers
    pub layers: Option<String>,
    /// Timeline start, `YYYY-MM`
    pub start: Option<String>,
    /// Timeline end, `YYYY-MM`
    pub end: Option<String>,
    /// `2d` or `3d`
    pub mode: Option<MapMode>,
}

impl AtlasQuery {
    /// Controls described by the query
    ///
    /// # Errors
    ///
    /// Unknown state, district or layer, malformed months or an unordered
    /// timeline.
    pub fn controls(&self) -> ApiResult<AtlasControls> {
        let mut controls = AtlasControls::default();
        if let Some(state) = &self.state {
            controls.select_state(state.parse()?);
        }
        if let Some(district) = &self.district {
            controls.select_district(district.as_str())?;
        }
        if let Some(layers) = &self.layers {
            controls.layers = MapLayerState::parse_list(layers)?;
        }
        if self.start.is_some() || self.end.is_some() {
            let start = match &self.start {
                Some(s) => s.parse::<YearMonth>()?,
                None => controls.window.start(),
            };
            let end = match &self.end {
                Some(s) => s.parse::<YearMonth>()?,
                None => controls.window.end(),
            };
            controls.window = TimelineWindow::new(start, end)?;
        }
        if let Some(mode) = self.mode {
            controls.mode = mode;
        }
        Ok(controls)
    }
}

async fn atlas(
    State(dash): State<AppState>,
    query: Result<Query<AtlasQuery>, QueryRejection>,
) -> ApiResult<Json<AtlasPanel>> {
    let Query(query) = query?;
    let controls = query.controls()?;
    Ok(Json(dash.atlas(&controls).await?))
}

async fn atlas_base_layers() -> Json<Vec<TileSource>> {
    Json(base_layers())
}

async fn find_recommendation(State(dash): State<AppState>) -> ApiResult<Json<DssView>> {
    Ok(Json(dash.find_recommendation().await?))
}

async fn strategy_report(State(dash): State<AppState>) -> ApiResult<Json<DssView>> {
    Ok(Json(dash.strategy_report().await?))
}

#[derive(Debug, Deserialize)]
struct DigitizeRequest {
    files: Vec<UploadedFile>,
}

async fn digitizer(State(dash): State<AppState>) -> Json<DigitizationWizard> {
    Json(dash.digitizer())
}

async fn digitize(
    State(dash): State<AppState>,
    payload: Result<Json<DigitizeRequest>, JsonRejection>,
) -> ApiResult<Json<DigitizationWizard>> {
    let Json(request) = payload?;
    Ok(Json(dash.digitize(request.files).await?))
}

async fn toggle_editing(State(dash): State<AppState>) -> ApiResult<Json<Value>> {
    let editing = dash.toggle_digitizer_editing()?;
    Ok(Json(json!({ "editing": editing })))
}

#[derive(Debug, Deserialize)]
struct FieldEdit {
    field: String,
    value: String,
}

async fn edit_field(
    State(dash): State<AppState>,
    payload: Result<Json<FieldEdit>, JsonRejection>,
) -> ApiResult<Json<DigitizationWizard>> {
    let Json(edit) = payload?;
    dash.edit_digitized_field(&edit.field, &edit.value)?;
    Ok(Json(dash.digitizer()))
}

async fn complete_digitization(State(dash): State<AppState>) -> ApiResult<Json<ExtractedRecord>> {
    Ok(Json(dash.complete_digitization()?))
}

async fn reset_digitizer(State(dash): State<AppState>) -> Json<DigitizationWizard> {
    dash.reset_digitizer();
    Json(dash.digitizer())
}

async fn community(State(dash): State<AppState>) -> ApiResult<Json<CommunityView>> {
    Ok(Json(dash.community().await?))
}

async fn asset_mapping(State(dash): State<AppState>) -> Json<PlaceholderView> {
    Json(PlaceholderView::asset_mapping(dash.session().language))
}

async fn settings(State(dash): State<AppState>) -> Json<PlaceholderView> {
    Json(PlaceholderView::settings(dash.session().language))
}

async fn translations(Path(lang): Path<String>) -> ApiResult<Json<HashMap<&'static str, &'static str>>> {
    let lang: Language = lang.parse()?;
    Ok(Json(Dashboard::translations(lang)))
}

/// Session with the shell chrome derived from it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Raw session state
    #[serde(flatten)]
    pub session: Session,
    /// Current page heading
    pub title: &'static str,
    /// Browser tab title
    pub document_title: String,
    /// Sidebar entries
    pub nav: Vec<NavItem>,
}

impl From<Session> for SessionView {
    fn from(session: Session) -> Self {
        Self {
            title: session.page_title(),
            document_title: session.document_title(),
            nav: session.nav(),
            session,
        }
    }
}

async fn session(State(dash): State<AppState>) -> Json<SessionView> {
    Json(dash.session().into())
}

async fn update_session(
    State(dash): State<AppState>,
    payload: Result<Json<SessionUpdate>, JsonRejection>,
) -> ApiResult<Json<SessionView>> {
    let Json(update) = payload?;
    Ok(Json(dash.update_session(update).await?.into()))
}

async fn toggle_theme(State(dash): State<AppState>) -> ApiResult<Json<Value>> {
    let theme: Theme = dash.toggle_theme().await?;
    Ok(Json(json!({ "theme": theme })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fra_core::MapLayer;
    use pretty_assertions::assert_eq;

    #[test]
    fn atlas_query_defaults() {
        let controls = AtlasQuery::default().controls().unwrap();
        assert_eq!(controls, AtlasControls::default());
    }

    #[test]
    fn atlas_query_fills_controls() {
        let query = AtlasQuery {
            state: Some("OD".into()),
            district: Some("Koraput".into()),
            layers: Some("ifr_claims,change_detection".into()),
            start: Some("2022-06".into()),
            end: None,
            mode: Some(MapMode::ThreeD),
        };
        let controls = query.controls().unwrap();
        assert_eq!(controls.selection.state, TargetState::Odisha);
        assert!(controls.layers.is_enabled(MapLayer::ChangeDetection));
        assert!(!controls.layers.is_enabled(MapLayer::VillageBoundaries));
        assert_eq!(controls.window.start().to_string(), "2022-06");
        assert_eq!(controls.mode, MapMode::ThreeD);
    }

    #[test]
    fn atlas_query_rejects_backwards_timeline() {
        let query = AtlasQuery {
            start: Some("2025-06".into()),
            end: Some("2021-01".into()),
            ..AtlasQuery::default()
        };
        let err = query.controls().unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn district_outside_state_is_not_found() {
        let query = AtlasQuery {
            state: Some("Telangana".into()),
            district: Some("Koraput".into()),
            ..AtlasQuery::default()
        };
        assert_eq!(query.controls().unwrap_err().status(), StatusCode::NOT_FOUND);
    }
}
