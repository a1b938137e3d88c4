//! Pages and sidebar navigation

use fra_core::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dashboard page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Headline counters
    #[default]
    Overview,
    /// Map atlas
    FraAtlas,
    /// Records table and digitization
    DataManagement,
    /// Asset map placeholder
    AssetMapping,
    /// Scheme recommendations
    Dss,
    /// Grievances and meetings
    Community,
    /// Settings placeholder
    Settings,
}

impl Page {
    /// Pages in sidebar order
    pub const ALL: [Page; 7] = [
        Page::Overview,
        Page::FraAtlas,
        Page::DataManagement,
        Page::AssetMapping,
        Page::Dss,
        Page::Community,
        Page::Settings,
    ];

    /// Page id, also the translation key of its nav label
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::FraAtlas => "fra_atlas",
            Self::DataManagement => "data_management",
            Self::AssetMapping => "asset_mapping",
            Self::Dss => "dss",
            Self::Community => "community",
            Self::Settings => "settings",
        }
    }

    /// Translation key of the page heading
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Self::Overview => "overview_title",
            Self::FraAtlas => "fra_atlas_title",
            Self::DataManagement => "data_management_title",
            Self::AssetMapping => "asset_mapping_title",
            Self::Dss => "dss_title",
            Self::Community => "community_title",
            Self::Settings => "settings_title",
        }
    }

    /// Resolve a page id; anything unknown lands on the overview
    #[must_use]
    pub fn resolve(id: &str) -> Self {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(id))
            .unwrap_or_else(|| {
                tracing::debug!(id, "unknown page, falling back to overview");
                Self::Overview
            })
    }

    /// Heading in a language
    #[must_use]
    pub fn title(self, lang: Language) -> &'static str {
        lang.t(self.title_key())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Target page
    pub page: Page,
    /// Translated label
    pub label: &'static str,
    /// Whether it is the current page
    pub active: bool,
}

/// Sidebar entries with the current page highlighted
#[must_use]
pub fn nav_items(current: Page, lang: Language) -> Vec<NavItem> {
    Page::ALL
        .into_iter()
        .map(|page| NavItem {
            page,
            label: lang.t(page.id()),
            active: page == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_ids_fall_back_to_overview() {
        assert_eq!(Page::resolve("dss"), Page::Dss);
        assert_eq!(Page::resolve("FRA_ATLAS"), Page::FraAtlas);
        assert_eq!(Page::resolve("reports"), Page::Overview);
        assert_eq!(Page::resolve(""), Page::Overview);
    }

    #[test]
    fn nav_order_and_highlight() {
        let items = nav_items(Page::Community, Language::English);
        let ids: Vec<&str> = items.iter().map(|i| i.page.id()).collect();
        assert_eq!(
            ids,
            vec!["overview", "fra_atlas", "data_management", "asset_mapping", "dss", "community", "settings"]
        );
        assert_eq!(items.iter().filter(|i| i.active).count(), 1);
        assert!(items[5].active);
    }

    #[test]
    fn titles_translate() {
        assert_eq!(Page::Dss.title(Language::English), "Decision Support System (DSS)");
        assert_eq!(Page::Settings.title(Language::Hindi), "सिस्टम सेटिंग्स");
    }

    #[test]
    fn serde_uses_page_ids() {
        assert_eq!(serde_json::to_string(&Page::DataManagement).unwrap(), "\"data_management\"");
    }
}
