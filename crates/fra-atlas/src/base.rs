//! Base map tiles, referenced by URL only

use serde::{Deserialize, Serialize};

/// A tile layer under the overlays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseLayer {
    /// Esri World Imagery, the default
    #[default]
    Satellite,
    /// OpenStreetMap
    Street,
}

/// Tile source of a base layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileSource {
    /// Which layer
    pub layer: BaseLayer,
    /// Display name
    pub name: &'static str,
    /// URL template with `{z}`, `{x}`, `{y}` and optionally `{s}`
    pub url: &'static str,
    /// Attribution HTML
    pub attribution: &'static str,
}

impl BaseLayer {
    /// Both layers, satellite first
    pub const ALL: [BaseLayer; 2] = [BaseLayer::Satellite, BaseLayer::Street];

    /// Tile source for this layer
    #[must_use]
    pub fn source(self) -> TileSource {
        match self {
            Self::Satellite => TileSource {
                layer: self,
                name: "Satellite",
                url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
                attribution: r#"&copy; <a href="https://www.esri.com/">Esri</a>"#,
            },
            Self::Street => TileSource {
                layer: self,
                name: "Street",
                url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
                attribution: r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#,
            },
        }
    }
}

/// Every base layer's tile source
#[must_use]
pub fn base_layers() -> Vec<TileSource> {
    BaseLayer::ALL.into_iter().map(BaseLayer::source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satellite_is_default_and_first() {
        let layers = base_layers();
        assert_eq!(layers[0].layer, BaseLayer::default());
        assert!(layers[0].url.contains("World_Imagery"));
        assert!(layers[1].attribution.contains("OpenStreetMap"));
    }
}
