//! Derivation of the tiled-data endpoint from a style document.
//!
//! The first declared source's template URL is split on a fixed path token
//! and reassembled into a sibling endpoint carrying the `{z}/{y}/{x}`
//! template. A document that does not match the expected shape yields `None`
//! and the overlay stays disabled; there is no error taxonomy on this path.

use crate::{
    core::constants::{CACHE_PARAM, SPLIT_TOKEN, TILE_PATH},
    style::document::StyleDocument,
    tiles::source::TileEndpoint,
};

/// Knobs of the URL rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverOptions {
    /// Path token the source template is split on.
    pub split_token: String,
    /// Sibling path appended to the prefix, including the tile template.
    pub tile_path: String,
    /// Query parameter appended when resolving from cache.
    pub cache_param: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            split_token: SPLIT_TOKEN.to_string(),
            tile_path: TILE_PATH.to_string(),
            cache_param: CACHE_PARAM.to_string(),
        }
    }
}

/// Derive the tile endpoint for a style document.
///
/// Pure: the same `(document, options, from_cache)` always yields the same
/// endpoint.
pub fn resolve_tile_endpoint(
    document: &StyleDocument,
    options: &ResolverOptions,
    from_cache: bool,
) -> Option<TileEndpoint> {
    let (name, source) = match document.first_source() {
        Some(entry) => entry,
        None => {
            log::warn!("style document declares no sources, overlay disabled");
            return None;
        }
    };

    let template = match source.template_url() {
        Some(template) => template,
        None => {
            log::warn!("source {:?} has no template URL, overlay disabled", name);
            return None;
        }
    };

    let (prefix, _) = match template.split_once(&options.split_token) {
        Some(parts) => parts,
        None => {
            log::warn!(
                "template {:?} does not contain split token {:?}, overlay disabled",
                template,
                options.split_token
            );
            return None;
        }
    };

    let mut url = format!("{}/{}", prefix.trim_end_matches('/'), options.tile_path);
    if from_cache {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&options.cache_param);
    }

    log::debug!("resolved tile endpoint {:?} from source {:?}", url, name);
    Some(TileEndpoint::new(url))
}
