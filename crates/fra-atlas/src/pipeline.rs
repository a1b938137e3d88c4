//! Filter and compose
//!
//! ```text
//! StateDataset ──filter_villages(selection)──► villages
//!                                               │
//!              ──filter_claims(villages)──────► claims
//!                                               │
//! OverlayCatalog ─────────compose(layers, window)──► AtlasOutcome
//! ```
//!
//! Every step is a pure function of its inputs. A selection with no villages
//! yields [`AtlasOutcome::Empty`] regardless of the layer flags.

use crate::dataset::{FieldReport, OverlayCatalog, PotentialClaim, StateDataset};
use crate::selection::AtlasSelection;
use crate::style::{self, MarkerShape, PathStyle};
use crate::timeline::TimelineWindow;
use chrono::NaiveDate;
use fra_core::geo::mean_center;
use fra_core::{
    Bounds, Claim, ClaimId, ClaimStatus, ClaimType, Feature, FeatureCollection, Geometry, LatLng,
    MapLayer, MapLayerState, TargetState, Village,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Degrees added around the village centers when fitting bounds
pub const BOUNDS_PADDING: f64 = 0.05;

/// Zoom level of a composed atlas
pub const DEFAULT_ZOOM: u8 = 10;

/// Heading of the empty state
pub const NO_DATA_TITLE: &str = "No FRA Data Available";

/// Footer of the empty state
pub const TARGETED_STATES_NOTE: &str =
    "📍 FRA targeted states: Tripura, Madhya Pradesh, Odisha, Telangana";

/// Villages of the selected state and district
#[must_use]
pub fn filter_villages<'a>(dataset: &'a StateDataset, selection: &AtlasSelection) -> Vec<&'a Village> {
    dataset
        .villages
        .iter()
        .filter(|v| v.state == selection.state && selection.district.matches(&v.district))
        .collect()
}

/// Claims filed in one of the given villages, matched by village name
#[must_use]
pub fn filter_claims<'a>(dataset: &'a StateDataset, villages: &[&Village]) -> Vec<&'a Claim> {
    dataset
        .claims
        .iter()
        .filter(|c| villages.iter().any(|v| v.name == c.village))
        .collect()
}

/// Number of claims filed in a village
#[must_use]
pub fn village_claim_count(claims: &[&Claim], village: &str) -> usize {
    claims.iter().filter(|c| c.village == village).count()
}

/// Per-status tallies over the filtered claims
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    /// Granted
    pub granted: usize,
    /// Pending
    pub pending: usize,
    /// Under review
    pub under_review: usize,
    /// Rejected
    pub rejected: usize,
}

impl StatusCounts {
    /// Tally claims by status
    pub fn tally<'a>(claims: impl IntoIterator<Item = &'a Claim>) -> Self {
        claims.into_iter().fold(Self::default(), |mut acc, c| {
            match c.status {
                ClaimStatus::Granted => acc.granted += 1,
                ClaimStatus::Pending => acc.pending += 1,
                ClaimStatus::UnderReview => acc.under_review += 1,
                ClaimStatus::Rejected => acc.rejected += 1,
            }
            acc
        })
    }

    /// Sum of all tallies
    #[must_use]
    pub fn total(&self) -> usize {
        self.granted + self.pending + self.under_review + self.rejected
    }

    /// Tally for one status
    #[must_use]
    pub fn get(&self, status: ClaimStatus) -> usize {
        match status {
            ClaimStatus::Granted => self.granted,
            ClaimStatus::Pending => self.pending,
            ClaimStatus::UnderReview => self.under_review,
            ClaimStatus::Rejected => self.rejected,
        }
    }
}

/// Point marker for a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimMarker {
    /// Marker position
    pub position: LatLng,
    /// Fill colour
    pub color: String,
    /// Circle for IFR, square for CFR
    pub shape: MarkerShape,
    /// Badge text (`IFR` / `CFR`)
    pub label: String,
}

/// A claim as drawn on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimOverlay {
    /// Claim id
    pub id: ClaimId,
    /// IFR or CFR
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    /// Status
    pub status: ClaimStatus,
    /// Patta holder
    pub holder: String,
    /// Village name
    pub village: String,
    /// Area, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_acres: Option<f64>,
    /// Title grant date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_date: Option<NaiveDate>,
    /// Filing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_date: Option<NaiveDate>,
    /// Rejection date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_date: Option<NaiveDate>,
    /// Why the claim was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Gram sabha resolution reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Parcel rectangle, when the claim has a boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectangle: Option<Bounds>,
    /// Rectangle style
    pub style: PathStyle,
    /// Marker, when the claim has coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<ClaimMarker>,
}

impl ClaimOverlay {
    fn from_claim(claim: &Claim) -> Self {
        let marker = claim.coordinates.map(|position| ClaimMarker {
            position,
            color: style::marker_color(claim.claim_type, claim.status).to_string(),
            shape: MarkerShape::from(claim.claim_type),
            label: claim.claim_type.code().to_string(),
        });
        Self {
            id: claim.id.clone(),
            claim_type: claim.claim_type,
            status: claim.status,
            holder: claim.holder.clone(),
            village: claim.village.clone(),
            area_acres: claim.area_acres,
            grant_date: claim.grant_date,
            application_date: claim.application_date,
            rejection_date: claim.rejection_date,
            rejection_reason: claim.rejection_reason.clone(),
            resolution: claim.resolution.clone(),
            rectangle: claim.boundary.as_ref().map(fra_core::Ring::corner_bounds),
            style: style::claim_boundary_style(claim.claim_type, claim.status),
            marker,
        }
    }
}

/// A feature with its resolved style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledFeature {
    /// GeoJSON feature
    pub feature: Feature,
    /// Path options
    pub style: PathStyle,
}

fn styled(collection: &FeatureCollection, style_fn: fn(&Feature) -> PathStyle) -> Vec<StyledFeature> {
    collection
        .features
        .iter()
        .map(|f| StyledFeature {
            feature: f.clone(),
            style: style_fn(f),
        })
        .collect()
}

/// Shown when the selection has no mapped villages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyAtlas {
    /// Selection that produced no data
    pub selection: AtlasSelection,
    /// Heading
    pub title: String,
    /// Body naming the state and district
    pub message: String,
    /// Footer listing the targeted states
    pub note: String,
    /// Default center of the state
    pub center: LatLng,
}

impl EmptyAtlas {
    fn for_selection(selection: &AtlasSelection) -> Self {
        let district = selection
            .district
            .name()
            .map(|d| format!(" in {d} district"))
            .unwrap_or_default();
        Self {
            selection: selection.clone(),
            title: NO_DATA_TITLE.to_string(),
            message: format!(
                "No village boundaries or FRA claims data is currently available for {}{district}.",
                selection.state
            ),
            note: TARGETED_STATES_NOTE.to_string(),
            center: selection.state.default_center(),
        }
    }
}

/// A fully composed atlas view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasView {
    /// Selection shown
    pub selection: AtlasSelection,
    /// Layer flags used for composition
    pub layers: MapLayerState,
    /// Village boundary polygons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub villages: Option<FeatureCollection>,
    /// Village boundary style
    pub village_style: PathStyle,
    /// Claims whose type layer is on
    pub claims: Vec<ClaimOverlay>,
    /// Land use overlay
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_use: Option<Vec<StyledFeature>>,
    /// Water bodies overlay
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_bodies: Option<Vec<StyledFeature>>,
    /// Field reports overlay
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_reports: Option<Vec<FieldReport>>,
    /// Potential claims overlay
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_claims: Option<Vec<PotentialClaim>>,
    /// Change detection overlay
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_detection: Option<Vec<StyledFeature>>,
    /// Window applied to change detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<TimelineWindow>,
    /// Status tallies over every filtered claim
    pub counts: StatusCounts,
    /// Claims per filtered village
    pub village_claims: BTreeMap<String, usize>,
    /// Fitted bounds
    pub bounds: Bounds,
    /// Map center
    pub center: LatLng,
    /// Zoom level
    pub zoom: u8,
}

/// Result of composing an atlas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AtlasOutcome {
    /// No villages for the selection
    Empty(EmptyAtlas),
    /// Composed view
    Composed(Box<AtlasView>),
}

impl AtlasOutcome {
    /// Whether this is the empty state
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// The composed view, if any
    #[must_use]
    pub fn view(&self) -> Option<&AtlasView> {
        match self {
            Self::Empty(_) => None,
            Self::Composed(view) => Some(view),
        }
    }
}

fn village_feature(village: &Village, claim_count: usize) -> Feature {
    Feature::new(Geometry::polygon(village.boundary.clone()))
        .with_property("id", village.id)
        .with_property("name", village.name.as_str())
        .with_property("district", village.district.as_str())
        .with_property("population", village.population)
        .with_property("tribalPopulation", village.tribal_population)
        .with_property("forestArea", village.forest_area.as_str())
        .with_property("claimCount", claim_count)
}

fn change_date(feature: &Feature) -> Option<NaiveDate> {
    feature
        .str_property("changeDate")
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Keep changes whose date falls in the window; undated changes are dropped
fn within_window(collection: &FeatureCollection, window: &TimelineWindow) -> FeatureCollection {
    collection
        .features
        .iter()
        .filter(|f| change_date(f).is_some_and(|d| window.contains(d)))
        .cloned()
        .collect()
}

/// Map center for a set of villages, falling back to the state default
#[must_use]
pub fn center_of(state: TargetState, villages: &[&Village]) -> LatLng {
    mean_center(villages.iter().map(|v| v.center)).unwrap_or_else(|| state.default_center())
}

/// Compose the atlas for a selection
///
/// `dataset` should hold the selected state's data; villages of other states
/// are filtered out.
#[must_use]
pub fn compose(
    dataset: &StateDataset,
    overlays: &OverlayCatalog,
    selection: &AtlasSelection,
    layers: MapLayerState,
    window: Option<&TimelineWindow>,
) -> AtlasOutcome {
    let villages = filter_villages(dataset, selection);
    let Some(bounds) = Bounds::enclosing(villages.iter().map(|v| v.center), BOUNDS_PADDING) else {
        tracing::debug!(state = %selection.state, district = %selection.district, "no villages for selection");
        return AtlasOutcome::Empty(EmptyAtlas::for_selection(selection));
    };
    let claims = filter_claims(dataset, &villages);

    let village_claims: BTreeMap<String, usize> = villages
        .iter()
        .map(|v| (v.name.clone(), village_claim_count(&claims, &v.name)))
        .collect();

    let village_overlay = layers.village_boundaries.then(|| {
        villages
            .iter()
            .map(|v| village_feature(v, village_claims.get(&v.name).copied().unwrap_or_default()))
            .collect::<FeatureCollection>()
    });

    let claim_overlays: Vec<ClaimOverlay> = claims
        .iter()
        .filter(|c| match c.claim_type {
            ClaimType::Individual => layers.is_enabled(MapLayer::IfrClaims),
            ClaimType::Community => layers.is_enabled(MapLayer::CfrClaims),
        })
        .map(|c| ClaimOverlay::from_claim(c))
        .collect();

    let change_detection = layers.change_detection.then(|| match window {
        Some(w) => styled(&within_window(&overlays.change_detection, w), style::change_style),
        None => styled(&overlays.change_detection, style::change_style),
    });

    let view = AtlasView {
        selection: selection.clone(),
        layers,
        villages: village_overlay,
        village_style: style::village_style(),
        claims: claim_overlays,
        land_use: layers
            .land_use
            .then(|| styled(&overlays.land_use, style::land_use_style)),
        water_bodies: layers
            .water_bodies
            .then(|| styled(&overlays.water_bodies, style::water_style)),
        field_reports: layers.field_reports.then(|| overlays.field_reports.clone()),
        potential_claims: layers
            .potential_claims
            .then(|| overlays.potential_claims.clone()),
        change_detection,
        window: window.copied(),
        counts: StatusCounts::tally(claims.iter().copied()),
        village_claims,
        bounds,
        center: center_of(selection.state, &villages),
        zoom: DEFAULT_ZOOM,
    };

    tracing::debug!(
        state = %selection.state,
        district = %selection.district,
        villages = villages.len(),
        claims = claims.len(),
        drawn = view.claims.len(),
        layers = layers.bits(),
        "composed atlas"
    );
    AtlasOutcome::Composed(Box::new(view))
}
