//! Page view models
//!
//! Each page is rendered from one of these; they carry translated labels and
//! badge colours so a client only has to lay them out.

use fra_core::{
    Claim, ClaimId, ClaimStatus, ClaimType, DashboardStats, Grievance, GrievanceStatus, Language,
    Meeting, Recommendation, TargetState,
};
use fra_data::{badge_tone, scheme_cards, RecordFilter, SchemeCard};
use serde::Serialize;

/// Stat card colours, in card order
pub const CARD_COLOURS: [&str; 4] = ["blue", "green", "yellow", "red"];

/// Headline counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Translation key of the title
    pub key: &'static str,
    /// Translated title
    pub title: &'static str,
    /// Counter value
    pub value: u64,
    /// Change text, e.g. `+1,200 this month`
    pub change: String,
    /// Whether the change is an increase
    pub increase: bool,
    /// Accent colour
    pub colour: &'static str,
}

/// Overview page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OverviewView {
    /// Stats not loaded yet; one skeleton per card
    Loading {
        /// Skeleton colours
        skeletons: [&'static str; 4],
    },
    /// Stats available
    Ready {
        /// The four cards
        cards: Vec<StatCard>,
    },
}

impl OverviewView {
    /// Placeholder shown while stats load
    #[must_use]
    pub fn loading() -> Self {
        Self::Loading {
            skeletons: CARD_COLOURS,
        }
    }

    /// Cards for loaded stats
    #[must_use]
    pub fn ready(stats: &DashboardStats, lang: Language) -> Self {
        let cards = stats
            .cards()
            .into_iter()
            .zip(CARD_COLOURS)
            .map(|((key, metric), colour)| StatCard {
                key,
                title: lang.t(key),
                value: metric.value,
                change: format!("{} {}", metric.change, lang.t("this_month")),
                increase: metric.is_increase(),
                colour,
            })
            .collect();
        Self::Ready { cards }
    }
}

/// One row of the records table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRow {
    /// Claim id
    pub id: ClaimId,
    /// Patta holder
    pub holder: String,
    /// `"<village>, <district>"`
    pub village_district: String,
    /// State
    pub state: TargetState,
    /// IFR or CFR
    pub claim_type: ClaimType,
    /// Status
    pub status: ClaimStatus,
    /// Badge colour of the status
    pub tone: &'static str,
}

impl From<&Claim> for RecordRow {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id.clone(),
            holder: claim.holder.clone(),
            village_district: claim.village_district(),
            state: claim.state,
            claim_type: claim.claim_type,
            status: claim.status,
            tone: badge_tone(claim.status),
        }
    }
}

/// Records table of the data management page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsView {
    /// Active filters
    pub filter: RecordFilter,
    /// Rows passing the filters
    pub rows: Vec<RecordRow>,
    /// Shown instead of the table when there are no rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl RecordsView {
    /// Filter `claims` into table rows
    #[must_use]
    pub fn new(claims: &[Claim], filter: RecordFilter, lang: Language) -> Self {
        let rows: Vec<RecordRow> = filter.apply(claims).into_iter().map(RecordRow::from).collect();
        let empty_message = rows.is_empty().then(|| lang.t("no_records_match"));
        Self {
            filter,
            rows,
            empty_message,
        }
    }
}

/// Decision support page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DssView {
    /// Engine heading
    pub heading: &'static str,
    /// Engine description
    pub description: &'static str,
    /// Current recommendation, if one was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
    /// Accordion rows for the recommendation
    pub schemes: Vec<SchemeCard>,
    /// Generated strategy report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl DssView {
    /// View for an optional recommendation and report
    #[must_use]
    pub fn new(recommendation: Option<Recommendation>, report: Option<String>, lang: Language) -> Self {
        let schemes = recommendation
            .as_ref()
            .map(|rec| scheme_cards(rec, lang))
            .unwrap_or_default();
        Self {
            heading: lang.t("dss_engine_title"),
            description: lang.t("dss_engine_desc"),
            recommendation,
            schemes,
            report,
        }
    }
}

/// Badge colour of a grievance status
#[must_use]
pub fn grievance_tone(status: GrievanceStatus) -> &'static str {
    match status {
        GrievanceStatus::Resolved => "green",
        GrievanceStatus::New => "red",
        GrievanceStatus::InProgress => "yellow",
    }
}

/// One grievance tracker row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrievanceRow {
    /// The grievance
    #[serde(flatten)]
    pub grievance: Grievance,
    /// Completion percentage
    pub progress: u8,
    /// Badge colour
    pub tone: &'static str,
}

/// Community engagement page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunityView {
    /// Grievance tracker
    pub grievances: Vec<GrievanceRow>,
    /// Recent gram sabha meetings
    pub meetings: Vec<Meeting>,
}

impl CommunityView {
    /// Build from backend lists
    #[must_use]
    pub fn new(grievances: Vec<Grievance>, meetings: Vec<Meeting>) -> Self {
        Self {
            grievances: grievances
                .into_iter()
                .map(|grievance| GrievanceRow {
                    progress: grievance.progress(),
                    tone: grievance_tone(grievance.status),
                    grievance,
                })
                .collect(),
            meetings,
        }
    }
}

/// A page with a heading, a line of text and a placeholder box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderView {
    /// Page heading
    pub title: &'static str,
    /// Description
    pub text: &'static str,
    /// Placeholder box text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl PlaceholderView {
    /// Asset mapping page
    #[must_use]
    pub fn asset_mapping(lang: Language) -> Self {
        Self {
            title: lang.t("asset_mapping_title"),
            text: "Visualize capital and social assets for FRA-holding villages identified from \
                   high-resolution satellite imagery.",
            placeholder: Some("[Asset Map Viewer Placeholder]"),
        }
    }

    /// Settings page
    #[must_use]
    pub fn settings(lang: Language) -> Self {
        Self {
            title: lang.t("settings_title"),
            text: "Configure API keys, user roles, and notification preferences.",
            placeholder: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fra_core::Metric;
    use fra_data::SeedData;
    use pretty_assertions::assert_eq;

    #[test]
    fn overview_cards_in_order() {
        let stats = DashboardStats {
            digitized_records: Metric::new(125_432, "+1,200"),
            villages_mapped: Metric::new(4_321, "+50"),
            assets_identified: Metric::new(18_765, "+300"),
            grievances_logged: Metric::new(234, "-15"),
        };
        let OverviewView::Ready { cards } = OverviewView::ready(&stats, Language::English) else {
            panic!("expected cards");
        };
        let colours: Vec<&str> = cards.iter().map(|c| c.colour).collect();
        assert_eq!(colours, CARD_COLOURS.to_vec());
        assert_eq!(cards[0].title, "Digitized FRA Records");
        assert_eq!(cards[0].change, "+1,200 this month");
        assert!(!cards[3].increase);
    }

    #[test]
    fn loading_has_four_skeletons() {
        let json = serde_json::to_value(OverviewView::loading()).unwrap();
        assert_eq!(json["state"], "loading");
        assert_eq!(json["skeletons"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn records_view_rows_and_empty_message() {
        let seed = SeedData::builtin();
        let view = RecordsView::new(
            &seed.claims,
            RecordFilter::new().with_status(ClaimStatus::Rejected),
            Language::English,
        );
        assert!(view.rows.iter().all(|r| r.tone == "red"));
        assert!(view.empty_message.is_none());

        let none = RecordsView::new(&[], RecordFilter::new(), Language::English);
        assert_eq!(none.empty_message, Some("No records match the current filters."));
    }

    #[test]
    fn dss_view_without_recommendation() {
        let view = DssView::new(None, None, Language::English);
        assert!(view.schemes.is_empty());
        assert_eq!(view.heading, "Scheme Recommendation Engine");
    }

    #[test]
    fn grievance_tones() {
        assert_eq!(grievance_tone(GrievanceStatus::Resolved), "green");
        assert_eq!(grievance_tone(GrievanceStatus::New), "red");
        assert_eq!(grievance_tone(GrievanceStatus::InProgress), "yellow");
    }

    #[test]
    fn community_rows_carry_progress() {
        let view = CommunityView::new(
            vec![Grievance::new("GRV-1", "V", "Boundary", GrievanceStatus::InProgress, 60)],
            Vec::new(),
        );
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["grievances"][0]["progress"], 60);
        assert_eq!(json["grievances"][0]["id"], "GRV-1");
    }
}
