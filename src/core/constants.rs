//! Engine-wide defaults in a single place so deployment-specific magic
//! strings are easy to audit and tweak.

/// Header carrying the API key on style and tile requests.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Query parameter appended to the tile endpoint when serving from cache.
pub const CACHE_PARAM: &str = "data_from_cache=true";

/// Path token the style-source template is split on. Everything before the
/// token is the host prefix the tile endpoint is rebuilt under.
pub const SPLIT_TOKEN: &str = "/api/";

/// Sibling path of the tiled-data endpoint, relative to the host prefix.
/// Carries the `{z}/{y}/{x}` substitution template.
pub const TILE_PATH: &str = "api/tile/layers/{z}/{y}/{x}.pbf";

/// Feature attribute shaded by default (received signal level).
pub const DEFAULT_PROPERTY: &str = "rxlevel";

/// Default overlay point radius in pixels.
pub const DEFAULT_POINT_RADIUS: f32 = 5.0;

/// Fetched style documents kept around for cache-flag toggles.
pub const STYLE_CACHE_CAPACITY: usize = 16;
