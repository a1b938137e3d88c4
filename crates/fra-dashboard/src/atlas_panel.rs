//! Atlas page controls: state and district selects, layer toggles, map mode
//! and the change-detection timeline

use crate::error::DashboardResult;
use crate::session::{LocalLanguageShortcut, Session};
use fra_atlas::{districts, AtlasOutcome, AtlasSelection, DistrictFilter, TimelineWindow, YearMonth};
use fra_core::{Language, MapLayer, MapLayerState, TargetState};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 2D map or 3D globe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapMode {
    /// Flat map
    #[default]
    #[serde(rename = "2d")]
    TwoD,
    /// Globe
    #[serde(rename = "3d")]
    ThreeD,
}

/// Everything the user can set on the atlas page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasControls {
    /// State and district
    pub selection: AtlasSelection,
    /// Layer flags
    pub layers: MapLayerState,
    /// Map mode
    pub mode: MapMode,
    /// Change-detection window
    pub window: TimelineWindow,
}

impl AtlasControls {
    /// Pick a state; the district resets to all
    pub fn select_state(&mut self, state: TargetState) {
        self.selection.set_state(state);
    }

    /// Pick a district of the current state
    ///
    /// # Errors
    ///
    /// Fails if the district does not belong to the state; the selection is
    /// left unchanged.
    pub fn select_district(&mut self, district: impl Into<DistrictFilter>) -> DashboardResult<()> {
        self.selection = self.selection.clone().checked_district(district)?;
        Ok(())
    }

    /// Flip a layer toggle, returning its new value
    pub fn toggle_layer(&mut self, layer: MapLayer) -> bool {
        self.layers.toggle(layer)
    }

    /// Move the timeline start
    ///
    /// # Errors
    ///
    /// Fails unless the new start is before the end; the window is unchanged.
    pub fn set_timeline_start(&mut self, start: YearMonth) -> DashboardResult<()> {
        self.window.set_start(start)?;
        Ok(())
    }

    /// Move the timeline end
    ///
    /// # Errors
    ///
    /// Fails unless the new end is after the start; the window is unchanged.
    pub fn set_timeline_end(&mut self, end: YearMonth) -> DashboardResult<()> {
        self.window.set_end(end)?;
        Ok(())
    }

    /// Window to compose with; only applies while change detection is on
    #[must_use]
    pub fn active_window(&self) -> Option<&TimelineWindow> {
        self.layers.change_detection.then_some(&self.window)
    }
}

/// A layer toggle as rendered in the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerToggle {
    /// Layer
    pub layer: MapLayer,
    /// Translated label
    pub label: &'static str,
    /// Current value
    pub enabled: bool,
    /// Listed under "Advanced AI Layers"
    pub advanced: bool,
}

/// Atlas page view model
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasPanel {
    /// Panel heading
    pub heading: &'static str,
    /// State select options
    pub states: Vec<TargetState>,
    /// District select options for the selected state
    pub districts: &'static [&'static str],
    /// Current controls
    pub controls: AtlasControls,
    /// Local-language link, when the state has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_language: Option<LocalLanguageShortcut>,
    /// Layer toggles in panel order
    pub toggles: Vec<LayerToggle>,
    /// Timeline shown while change detection is on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<TimelineWindow>,
    /// Composed map or the empty state
    pub outcome: Arc<AtlasOutcome>,
}

impl AtlasPanel {
    /// Assemble the panel around a composed outcome
    #[must_use]
    pub fn new(controls: &AtlasControls, session: &Session, outcome: Arc<AtlasOutcome>) -> Self {
        let lang: Language = session.language;
        Self {
            heading: lang.t("filters_layers"),
            states: TargetState::ALL.to_vec(),
            districts: districts(controls.selection.state),
            controls: controls.clone(),
            local_language: session.local_language_shortcut(controls.selection.state),
            toggles: MapLayer::ALL
                .into_iter()
                .map(|layer| LayerToggle {
                    layer,
                    label: lang.t(layer.label_key()),
                    enabled: controls.layers.is_enabled(layer),
                    advanced: layer.is_advanced(),
                })
                .collect(),
            timeline: controls.active_window().copied(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fra_atlas::{compose, OverlayCatalog, StateDataset};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn district_must_belong_to_state() {
        let mut controls = AtlasControls::default();
        controls.select_state(TargetState::Odisha);
        controls.select_district("koraput").unwrap();
        assert_eq!(controls.selection.district, DistrictFilter::from("Koraput"));

        let err = controls.select_district("Indore").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(controls.selection.district, DistrictFilter::from("Koraput"));

        controls.select_state(TargetState::Telangana);
        assert_eq!(controls.selection.district, DistrictFilter::All);
    }

    #[test]
    fn timeline_only_with_change_detection() {
        let mut controls = AtlasControls::default();
        assert!(controls.active_window().is_none());
        controls.toggle_layer(MapLayer::ChangeDetection);
        assert_eq!(controls.active_window(), Some(&TimelineWindow::default()));
    }

    #[test]
    fn rejected_timeline_update_keeps_window() {
        let mut controls = AtlasControls::default();
        let late = YearMonth::new(2026, 1).unwrap();
        assert!(controls.set_timeline_start(late).is_err());
        assert_eq!(controls.window, TimelineWindow::default());
        controls
            .set_timeline_end(YearMonth::new(2024, 6).unwrap())
            .unwrap();
        assert_eq!(controls.window.end(), YearMonth::new(2024, 6).unwrap());
    }

    #[test]
    fn panel_lists_toggles_and_shortcut() {
        let mut controls = AtlasControls::default();
        controls.select_state(TargetState::Telangana);
        let dataset = StateDataset::empty(TargetState::Telangana);
        let outcome = compose(
            &dataset,
            &OverlayCatalog::default(),
            &controls.selection,
            controls.layers,
            None,
        );
        let panel = AtlasPanel::new(&controls, &Session::default(), Arc::new(outcome));
        assert_eq!(panel.toggles.len(), 8);
        assert_eq!(panel.toggles.iter().filter(|t| t.advanced).count(), 2);
        assert_eq!(panel.local_language.map(|l| l.language), Some(Language::Telugu));
        assert!(panel.districts.contains(&"Khammam"));
        assert!(panel.timeline.is_none());
        assert!(panel.outcome.is_empty());
    }

    #[test]
    fn map_mode_wire_names() {
        assert_eq!(serde_json::to_string(&MapMode::ThreeD).unwrap(), "\"3d\"");
    }

    proptest! {
        #[test]
        fn prop_toggling_twice_is_identity(idx in 0usize..8) {
            let layer = MapLayer::ALL[idx];
            let mut controls = AtlasControls::default();
            let before = controls.layers;
            controls.toggle_layer(layer);
            controls.toggle_layer(layer);
            prop_assert_eq!(controls.layers, before);
        }
    }
}
