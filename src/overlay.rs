//! Overlay layer declaration: the options and callbacks a map-tile rendering
//! layer consumes. Rendering itself lives in the host renderer.

use crate::{
    color::scale::ValueShader,
    core::{
        constants::{API_KEY_HEADER, DEFAULT_POINT_RADIUS},
        geo::TileCoord,
    },
    prelude::HashMap,
    tiles::source::{TileEndpoint, TileSource},
};
use serde::{Deserialize, Serialize};

/// Configuration for the attribute-shaded point overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayOptions {
    /// Point radius
    pub point_radius: f32,
    /// Whether the radius is in screen pixels (as opposed to map units)
    pub radius_in_pixels: bool,
    /// Whether points carry an outline stroke
    pub stroked: bool,
    /// Whether features respond to picking (hover/click)
    pub pickable: bool,
    /// HTTP headers to send with tile requests
    pub headers: std::collections::HashMap<String, String>,
}

impl OverlayOptions {
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.headers.insert(API_KEY_HEADER.to_string(), key.into());
        self
    }
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            point_radius: DEFAULT_POINT_RADIUS,
            radius_in_pixels: true,
            stroked: false,
            pickable: true,
            headers: std::collections::HashMap::new(),
        }
    }
}

/// The tile overlay whose fill color is derived from a feature property.
///
/// Holds the resolved endpoint and the shading policy; the renderer asks it
/// for tile URLs, per-feature fill colors, and tooltip text.
pub struct OverlayLayer {
    options: OverlayOptions,
    shader: ValueShader,
    endpoint: Option<TileEndpoint>,
}

impl OverlayLayer {
    pub fn new(shader: ValueShader) -> Self {
        Self::with_options(shader, OverlayOptions::default())
    }

    pub fn with_options(shader: ValueShader, options: OverlayOptions) -> Self {
        Self {
            options,
            shader,
            endpoint: None,
        }
    }

    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    pub fn shader(&self) -> &ValueShader {
        &self.shader
    }

    /// Swap in a new shading policy (e.g. after a config change).
    pub fn set_shader(&mut self, shader: ValueShader) {
        self.shader = shader;
    }

    /// Publish a newly resolved endpoint; `None` disables the overlay.
    pub fn set_endpoint(&mut self, endpoint: Option<TileEndpoint>) {
        self.endpoint = endpoint;
    }

    pub fn endpoint(&self) -> Option<&TileEndpoint> {
        self.endpoint.as_ref()
    }

    /// The overlay only draws while an endpoint is resolved.
    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Tile-request URL for a coordinate, if the overlay is enabled.
    pub fn tile_url(&self, coord: TileCoord) -> Option<String> {
        self.endpoint.as_ref().map(|endpoint| endpoint.url(coord))
    }

    /// Fill color for a feature's property map.
    pub fn fill_color(&self, properties: &HashMap<String, serde_json::Value>) -> [u8; 3] {
        self.shader.shade(properties).as_array()
    }

    /// Tooltip text for a picked feature, if there is anything to say.
    pub fn tooltip(
        &self,
        properties: Option<&HashMap<String, serde_json::Value>>,
    ) -> Option<String> {
        self.shader.tooltip(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overlay_disabled_without_endpoint() {
        let layer = OverlayLayer::new(ValueShader::default());
        assert!(!layer.is_enabled());
        assert_eq!(layer.tile_url(TileCoord::new(0, 0, 0)), None);
    }

    #[test]
    fn test_overlay_tile_url() {
        let mut layer = OverlayLayer::new(ValueShader::default());
        layer.set_endpoint(Some(TileEndpoint::new(
            "https://t.test/api/tile/layers/{z}/{y}/{x}.pbf",
        )));

        assert!(layer.is_enabled());
        assert_eq!(
            layer.tile_url(TileCoord::new(3, 2, 1)).unwrap(),
            "https://t.test/api/tile/layers/1/2/3.pbf"
        );
    }

    #[test]
    fn test_fill_color_fallback() {
        let layer = OverlayLayer::new(ValueShader::default());
        let mut props = HashMap::default();
        assert_eq!(layer.fill_color(&props), [0, 0, 0]);

        props.insert("rxlevel".to_string(), json!(-100));
        assert_eq!(layer.fill_color(&props), [255, 0, 0]);
    }

    #[test]
    fn test_default_options_match_deployment() {
        let options = OverlayOptions::default().with_api_key("key");
        assert_eq!(options.point_radius, 5.0);
        assert!(options.radius_in_pixels);
        assert!(!options.stroked);
        assert!(options.pickable);
        assert_eq!(options.headers.get(API_KEY_HEADER).map(String::as_str), Some("key"));
    }
}
