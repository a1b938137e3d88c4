//! Overlay styling
//!
//! Colours are hex strings handed straight to the map widget.

use fra_core::{ClaimStatus, ClaimType, Feature};
use serde::{Deserialize, Serialize};

/// Colour used when a status or category has no entry of its own
pub const FALLBACK_COLOR: &str = "#6B7280";

/// Dash pattern for provisional geometry
pub const DASHED: &str = "5, 5";

/// Path options for a polygon or line overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    /// Stroke colour
    pub color: String,
    /// Stroke width in pixels
    pub weight: u8,
    /// Stroke opacity
    pub opacity: f64,
    /// Fill colour, absent for lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    /// Fill opacity, absent for lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    /// Dash pattern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
}

impl PathStyle {
    fn filled(fill: &str, stroke: &str, weight: u8, opacity: f64, fill_opacity: f64) -> Self {
        Self {
            color: stroke.to_string(),
            weight,
            opacity,
            fill_color: Some(fill.to_string()),
            fill_opacity: Some(fill_opacity),
            dash_array: None,
        }
    }

    fn line(color: &str, weight: u8, opacity: f64) -> Self {
        Self {
            color: color.to_string(),
            weight,
            opacity,
            fill_color: None,
            fill_opacity: None,
            dash_array: None,
        }
    }

    #[must_use]
    fn dashed(mut self) -> Self {
        self.dash_array = Some(DASHED.to_string());
        self
    }
}

/// Status colour shared by claim boundaries and popups
#[must_use]
pub fn status_color(status: ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Granted => "#10B981",
        ClaimStatus::Pending => "#F59E0B",
        ClaimStatus::Rejected => "#EF4444",
        ClaimStatus::UnderReview => "#6366F1",
    }
}

/// Status colour from a free-form label; unknown labels get the fallback
#[must_use]
pub fn status_color_for_label(label: &str) -> &'static str {
    label
        .parse::<ClaimStatus>()
        .map_or(FALLBACK_COLOR, status_color)
}

/// Marker colour: CFR uses a darker shade of each status colour
#[must_use]
pub fn marker_color(claim_type: ClaimType, status: ClaimStatus) -> &'static str {
    match claim_type {
        ClaimType::Individual => status_color(status),
        ClaimType::Community => match status {
            ClaimStatus::Granted => "#059669",
            ClaimStatus::Pending => "#D97706",
            ClaimStatus::Rejected => "#DC2626",
            ClaimStatus::UnderReview => "#4F46E5",
        },
    }
}

/// Marker shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    /// IFR marker
    Circle,
    /// CFR marker
    Square,
}

impl From<ClaimType> for MarkerShape {
    fn from(claim_type: ClaimType) -> Self {
        match claim_type {
            ClaimType::Individual => Self::Circle,
            ClaimType::Community => Self::Square,
        }
    }
}

/// Claim rectangle style: CFR fills heavier, pending claims are dashed
#[must_use]
pub fn claim_boundary_style(claim_type: ClaimType, status: ClaimStatus) -> PathStyle {
    let color = status_color(status);
    let fill_opacity = match claim_type {
        ClaimType::Community => 0.4,
        ClaimType::Individual => 0.2,
    };
    let style = PathStyle::filled(color, color, 2, 0.8, fill_opacity);
    if status == ClaimStatus::Pending {
        style.dashed()
    } else {
        style
    }
}

/// Village boundary style used by the atlas
#[must_use]
pub fn village_style() -> PathStyle {
    PathStyle::filled("#E5E7EB", "#9CA3AF", 2, 1.0, 0.3)
}

/// Village boundary style used by the geo-portal view
#[must_use]
pub fn portal_village_style() -> PathStyle {
    PathStyle::filled("#FFF59D", "#FDD835", 2, 1.0, 0.4)
}

/// Style while a village is hovered
#[must_use]
pub fn village_hover_style() -> PathStyle {
    PathStyle::filled("#E5E7EB", "#6366F1", 3, 1.0, 0.5)
}

fn category(feature: &Feature) -> &str {
    feature.str_property("type").unwrap_or_default()
}

/// Land use palette keyed by the feature's `type` property
#[must_use]
pub fn land_use_style(feature: &Feature) -> PathStyle {
    let (fill, stroke) = match category(feature) {
        "agriculture" => ("#8BC34A", "#8BC34A"),
        "forest" => ("#4CAF50", "#4CAF50"),
        "residential" => ("#FFC107", "#FFC107"),
        "industrial" => ("#795548", "#795548"),
        "water" => ("#2196F3", "#2196F3"),
        _ => ("#9E9E9E", "#616161"),
    };
    PathStyle::filled(fill, stroke, 2, 1.0, 0.6)
}

/// Water palette; rivers drawn as lines, lakes and ponds as filled polygons
#[must_use]
pub fn water_style(feature: &Feature) -> PathStyle {
    let color = match category(feature) {
        "lake" => "#03A9F4",
        "pond" => "#00BCD4",
        "stream" => "#4FC3F7",
        _ => "#2196F3",
    };
    if feature.geometry.is_line() {
        PathStyle::line(color, 3, 0.8)
    } else {
        PathStyle::filled(color, color, 2, 1.0, 0.7)
    }
}

/// Change detection palette, always dashed
#[must_use]
pub fn change_style(feature: &Feature) -> PathStyle {
    let (fill, stroke) = match category(feature) {
        "deforestation" => ("#F44336", "#F44336"),
        "reforestation" => ("#4CAF50", "#4CAF50"),
        "landUseChange" => ("#FF9800", "#FF9800"),
        "construction" => ("#9C27B0", "#9C27B0"),
        _ => ("#FF5722", "#E64A19"),
    };
    PathStyle::filled(fill, stroke, 2, 1.0, 0.7).dashed()
}
