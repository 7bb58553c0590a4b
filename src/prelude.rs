//! Prelude module for common tileshade types and traits
//!
//! Re-exports the most commonly used types and functions for easy importing
//! with `use tileshade::prelude::*;`

pub use crate::core::{constants, geo::TileCoord};

pub use crate::color::{
    css::Color,
    scale::{LinearScale, ValueShader},
};

pub use crate::config::{reduce, ColorMappingConfig, ConfigAction};

pub use crate::style::{
    document::{StyleDocument, StyleSource},
    loader::{StyleLoader, StyleLoaderOptions},
    resolver::{resolve_tile_endpoint, ResolverOptions},
};

pub use crate::tiles::source::{TileEndpoint, TileSource};

pub use crate::overlay::{OverlayLayer, OverlayOptions};

pub use crate::{Error, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
