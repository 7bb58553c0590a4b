use crate::core::geo::TileCoord;
use serde::{Deserialize, Serialize};

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// A derived tiled-data endpoint: a URL template with `{z}/{y}/{x}`
/// placeholders, always recomputed from its style document rather than
/// carrying identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileEndpoint {
    url_template: String,
}

impl TileEndpoint {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
        }
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }
}

impl TileSource for TileEndpoint {
    fn url(&self, coord: TileCoord) -> String {
        self.url_template
            .replace("{z}", &coord.z.to_string())
            .replace("{y}", &coord.y.to_string())
            .replace("{x}", &coord.x.to_string())
    }
}
