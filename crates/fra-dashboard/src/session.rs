//! Shell state of a dashboard session: language, theme, page and sidebar

use crate::page::{nav_items, NavItem, Page};
use fra_core::{Language, TargetState, Theme};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Shell state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Interface language
    pub language: Language,
    /// Display theme
    pub theme: Theme,
    /// Current page
    pub page: Page,
    /// Whether the mobile sidebar is open
    pub sidebar_open: bool,
}

/// Partial update of a session; absent fields stay as they are
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    /// New language
    pub language: Option<Language>,
    /// New theme
    pub theme: Option<Theme>,
    /// Page id to navigate to
    pub page: Option<String>,
    /// Open or close the sidebar
    pub sidebar_open: Option<bool>,
}

/// "Switch to <language>" link offered for states with a local language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalLanguageShortcut {
    /// Language switched to
    pub language: Language,
    /// Link text
    pub label: String,
}

impl Session {
    /// Fresh session with a stored theme
    #[inline]
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Translate in the session language
    #[inline]
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.language.t(key)
    }

    /// Go to a page by id, closing the sidebar; unknown ids open the overview
    pub fn navigate(&mut self, page_id: &str) -> Page {
        self.page = Page::resolve(page_id);
        self.sidebar_open = false;
        debug!(page = %self.page, "navigated");
        self.page
    }

    /// Open the sidebar (menu button)
    #[inline]
    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    /// Close the sidebar (backdrop click)
    #[inline]
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Flip the theme, returning the new one
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Apply a partial update; returns whether the theme changed
    pub fn apply(&mut self, update: SessionUpdate) -> bool {
        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(page) = update.page {
            self.navigate(&page);
        }
        if let Some(open) = update.sidebar_open {
            self.sidebar_open = open;
        }
        match update.theme {
            Some(theme) if theme != self.theme => {
                self.theme = theme;
                true
            }
            _ => false,
        }
    }

    /// Heading of the current page
    #[must_use]
    pub fn page_title(&self) -> &'static str {
        self.page.title(self.language)
    }

    /// Browser tab title, `"<page title> - <app title>"`
    #[must_use]
    pub fn document_title(&self) -> String {
        format!("{} - {}", self.page_title(), self.t("app_title"))
    }

    /// Sidebar entries
    #[must_use]
    pub fn nav(&self) -> Vec<NavItem> {
        nav_items(self.page, self.language)
    }

    /// Local-language link for a state, if it has one
    #[must_use]
    pub fn local_language_shortcut(&self, state: TargetState) -> Option<LocalLanguageShortcut> {
        let language = state.local_language()?;
        Some(LocalLanguageShortcut {
            language,
            label: format!("{} {}", self.t("switch_to_lang"), language.english_name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn navigating_closes_the_sidebar() {
        let mut session = Session::default();
        session.open_sidebar();
        assert_eq!(session.navigate("community"), Page::Community);
        assert!(!session.sidebar_open);
        assert_eq!(session.navigate("nowhere"), Page::Overview);
    }

    #[test]
    fn document_title_follows_language() {
        let mut session = Session::default();
        session.navigate("fra_atlas");
        assert_eq!(
            session.document_title(),
            "Forest Rights Act (FRA) Atlas - FRA Atlas & DSS"
        );
        session.language = Language::Hindi;
        assert_eq!(
            session.document_title(),
            "वन अधिकार अधिनियम (FRA) एटलस - FRA एटलस और DSS"
        );
    }

    #[test]
    fn toggle_theme_twice_is_identity() {
        let mut session = Session::with_theme(Theme::Dark);
        session.toggle_theme();
        assert_eq!(session.theme, Theme::Light);
        session.toggle_theme();
        assert_eq!(session.theme, Theme::Dark);
    }

    #[test]
    fn local_language_only_where_spoken() {
        let session = Session::default();
        assert!(session
            .local_language_shortcut(TargetState::MadhyaPradesh)
            .is_none());
        let odia = session
            .local_language_shortcut(TargetState::Odisha)
            .unwrap();
        assert_eq!(odia.language, Language::Odia);
        assert_eq!(odia.label, "Switch to Odia");
    }

    #[test]
    fn partial_update() {
        let mut session = Session::default();
        session.open_sidebar();
        let update: SessionUpdate =
            serde_json::from_str(r#"{"language":"hi","page":"dss","theme":"dark"}"#).unwrap();
        assert!(session.apply(update));
        assert_eq!(session.language, Language::Hindi);
        assert_eq!(session.page, Page::Dss);
        assert!(!session.sidebar_open);

        let again = SessionUpdate {
            theme: Some(Theme::Dark),
            ..SessionUpdate::default()
        };
        assert!(!session.apply(again));
    }
}
