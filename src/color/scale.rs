use crate::{
    color::css::Color,
    config::ColorMappingConfig,
    core::constants::DEFAULT_PROPERTY,
    prelude::HashMap,
    Error, Result,
};

/// Linear interpolation between two f64 values
fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Quantize an interpolated channel to 0-255. Clamping happens only here so
/// the scale itself stays monotonic outside the domain.
fn quantize(channel: f64) -> u8 {
    channel.round().clamp(0.0, 255.0) as u8
}

/// A linear numeric-to-color scale: maps a value across `domain` onto a
/// per-channel interpolation between the two `range` colors.
///
/// Values at the domain endpoints map exactly to the range colors; values
/// outside the domain extrapolate along the same line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [Color; 2],
}

impl LinearScale {
    /// Create a scale over `domain` between the two `range` colors.
    ///
    /// A degenerate domain (`begin == end`) makes the interpolation
    /// undefined and is rejected.
    pub fn new(domain: [f64; 2], range: [Color; 2]) -> Result<Self> {
        if domain[0] == domain[1] {
            return Err(Error::DegenerateDomain(domain[0]));
        }
        Ok(Self { domain, range })
    }

    /// Map a value to a color by per-channel linear interpolation.
    pub fn map(&self, value: f64) -> Color {
        let t = (value - self.domain[0]) / (self.domain[1] - self.domain[0]);
        let [begin, end] = self.range;

        Color {
            r: quantize(lerp(begin.r as f64, end.r as f64, t)),
            g: quantize(lerp(begin.g as f64, end.g as f64, t)),
            b: quantize(lerp(begin.b as f64, end.b as f64, t)),
        }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [Color; 2] {
        self.range
    }
}

/// Ramp selection policy for a shader.
#[derive(Debug, Clone, PartialEq)]
enum Ramps {
    /// One scale for every value (config-driven shading).
    Single(LinearScale),
    /// Positive values use one scale, everything else the other.
    SignSplit {
        positive: LinearScale,
        negative: LinearScale,
    },
}

impl Ramps {
    fn select(&self, value: f64) -> &LinearScale {
        match self {
            Ramps::Single(scale) => scale,
            Ramps::SignSplit { positive, negative } => {
                if value > 0.0 {
                    positive
                } else {
                    negative
                }
            }
        }
    }
}

/// Per-feature fill-color policy: reads a named numeric property from a
/// feature's property map and shades it through a color scale.
///
/// Only a *missing* (absent or non-numeric) property falls back to the
/// fallback color; a measured `0.0` is shaded like any other value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueShader {
    property: String,
    ramps: Ramps,
    fallback: Color,
}

impl ValueShader {
    /// Shader with the deployment defaults: positive values over [0, 100]
    /// green to blue, the rest over [-100, 0] red to blue, black fallback.
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ramps: Ramps::SignSplit {
                positive: LinearScale {
                    domain: [0.0, 100.0],
                    range: [Color::rgb(0, 128, 0), Color::rgb(0, 0, 255)],
                },
                negative: LinearScale {
                    domain: [-100.0, 0.0],
                    range: [Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)],
                },
            },
            fallback: Color::BLACK,
        }
    }

    /// Shader driven by a single user-adjustable color-mapping config.
    pub fn from_config(config: &ColorMappingConfig) -> Result<Self> {
        Ok(Self {
            property: config.property_name.clone(),
            ramps: Ramps::Single(config.compile()?),
            fallback: Color::BLACK,
        })
    }

    pub fn with_fallback(mut self, fallback: Color) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    /// Shade an already-extracted value. `None` means missing data.
    pub fn shade_value(&self, value: Option<f64>) -> Color {
        match value {
            Some(v) => self.ramps.select(v).map(v),
            None => self.fallback,
        }
    }

    /// Shade a feature's property map.
    pub fn shade(&self, properties: &HashMap<String, serde_json::Value>) -> Color {
        self.shade_value(self.extract(properties))
    }

    /// Tooltip text for a picked feature. Presentation is the renderer's
    /// concern; this only formats the text.
    pub fn tooltip(
        &self,
        properties: Option<&HashMap<String, serde_json::Value>>,
    ) -> Option<String> {
        let props = properties?;
        let label = self.property.to_uppercase();
        match self.extract(props) {
            Some(value) => Some(format!("{} => {}", label, value)),
            None => Some(format!("{} => n/a", label)),
        }
    }

    fn extract(&self, properties: &HashMap<String, serde_json::Value>) -> Option<f64> {
        properties.get(&self.property).and_then(|v| v.as_f64())
    }
}

impl Default for ValueShader {
    fn default() -> Self {
        Self::new(DEFAULT_PROPERTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(pairs: &[(&str, serde_json::Value)]) -> HashMap<String, serde_json::Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_endpoint_exactness() {
        let scale = LinearScale::new(
            [-100.0, 0.0],
            [Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)],
        )
        .unwrap();

        assert_eq!(scale.map(-100.0), Color::rgb(255, 0, 0));
        assert_eq!(scale.map(0.0), Color::rgb(0, 0, 255));
    }

    #[test]
    fn test_midpoint_example() {
        // Worked example: [-100, 0] over green -> blue; -50 lands exactly
        // halfway between CSS green (0, 128, 0) and blue (0, 0, 255).
        let scale = LinearScale::new(
            [-100.0, 0.0],
            ["green".parse().unwrap(), "blue".parse().unwrap()],
        )
        .unwrap();

        assert_eq!(scale.map(-50.0), Color::rgb(0, 64, 128));
    }

    #[test]
    fn test_channel_monotonicity() {
        let scale = LinearScale::new(
            [0.0, 100.0],
            [Color::rgb(10, 200, 0), Color::rgb(240, 10, 255)],
        )
        .unwrap();

        let mut prev = scale.map(-50.0);
        for step in -4..=14 {
            let value = step as f64 * 10.0;
            let next = scale.map(value);
            // r and b rise, g falls; quantization may plateau but never reverse
            assert!(next.r >= prev.r, "r not monotonic at {}", value);
            assert!(next.b >= prev.b, "b not monotonic at {}", value);
            assert!(next.g <= prev.g, "g not monotonic at {}", value);
            prev = next;
        }
    }

    #[test]
    fn test_extrapolation_clamps_only_at_quantization() {
        let scale = LinearScale::new(
            [0.0, 10.0],
            [Color::rgb(100, 100, 100), Color::rgb(110, 90, 100)],
        )
        .unwrap();

        // Far out of domain: channels saturate rather than wrap
        assert_eq!(scale.map(1000.0), Color::rgb(255, 0, 100));
        assert_eq!(scale.map(-1000.0), Color::rgb(0, 255, 100));
    }

    #[test]
    fn test_degenerate_domain_rejected() {
        let result = LinearScale::new([5.0, 5.0], [Color::BLACK, Color::BLACK]);
        assert!(matches!(result, Err(Error::DegenerateDomain(d)) if d == 5.0));
    }

    #[test]
    fn test_shader_sign_split() {
        let shader = ValueShader::default();

        // Positive ramp endpoint: 100 -> blue
        assert_eq!(shader.shade_value(Some(100.0)), Color::rgb(0, 0, 255));
        // Negative ramp endpoint: -100 -> red
        assert_eq!(shader.shade_value(Some(-100.0)), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_zero_is_a_measurement_not_missing() {
        let shader = ValueShader::default();

        // Zero rides the negative ramp to its domain-end color, it does not
        // fall back to black.
        assert_eq!(shader.shade_value(Some(0.0)), Color::rgb(0, 0, 255));
        assert_eq!(shader.shade_value(None), Color::BLACK);
    }

    #[test]
    fn test_shade_from_properties() {
        let shader = ValueShader::default();

        let present = props(&[("rxlevel", json!(-100.0))]);
        assert_eq!(shader.shade(&present), Color::rgb(255, 0, 0));

        let absent = props(&[("other", json!(3))]);
        assert_eq!(shader.shade(&absent), Color::BLACK);

        let non_numeric = props(&[("rxlevel", json!("strong"))]);
        assert_eq!(shader.shade(&non_numeric), Color::BLACK);
    }

    #[test]
    fn test_tooltip_text() {
        let shader = ValueShader::default();

        let present = props(&[("rxlevel", json!(-42.5))]);
        assert_eq!(
            shader.tooltip(Some(&present)),
            Some("RXLEVEL => -42.5".to_string())
        );

        let missing = props(&[("other", json!(1))]);
        assert_eq!(
            shader.tooltip(Some(&missing)),
            Some("RXLEVEL => n/a".to_string())
        );

        assert_eq!(shader.tooltip(None), None);
    }
}
