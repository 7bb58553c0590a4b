//! # Tileshade
//!
//! A small presentation-support library for attribute-shaded map overlays.
//!
//! Tileshade resolves a remote map style document into the tiled-data
//! endpoint it implies, and maps per-feature numeric attributes to RGB
//! colors through configurable linear color scales. It owns no rendering:
//! the tile endpoint and the fill-color/tooltip callbacks are seams for a
//! map-tile rendering layer to consume.

pub mod color;
pub mod config;
pub mod core;
pub mod overlay;
pub mod prelude;
pub mod style;
pub mod tiles;

pub use crate::core::constants;

// Re-export public API
pub use color::{
    css::Color,
    scale::{LinearScale, ValueShader},
};
pub use config::{reduce, ColorMappingConfig, ConfigAction};
pub use overlay::{OverlayLayer, OverlayOptions};
pub use style::{
    document::{StyleDocument, StyleSource},
    loader::{StyleLoader, StyleLoaderOptions},
    resolver::{resolve_tile_endpoint, ResolverOptions},
};
pub use tiles::source::{TileEndpoint, TileSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unrecognized color: {0:?}")]
    ColorParse(String),

    #[error("Degenerate color-scale domain: begin == end == {0}")]
    DegenerateDomain(f64),
}
