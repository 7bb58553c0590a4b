//! Color-mapping configuration adjusted at runtime by form input.
//!
//! The config is an immutable value: adjustments are expressed as
//! [`ConfigAction`]s folded through the pure [`reduce`] function, so there is
//! no ambient mutable state between the form and the shader. Session
//! lifetime, no persistence.

use crate::{color::css::Color, color::scale::LinearScale, core::constants::DEFAULT_PROPERTY, Result};
use serde::{Deserialize, Serialize};

/// User-adjustable parameters of the numeric-to-color mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMappingConfig {
    /// Feature attribute key the shading reads.
    pub property_name: String,
    /// Color at the begin of the domain (name or CSS color string).
    pub begin_color: String,
    /// Color at the end of the domain.
    pub end_color: String,
    /// Domain begin. Invariant: `begin_range != end_range`.
    pub begin_range: f64,
    /// Domain end.
    pub end_range: f64,
}

impl ColorMappingConfig {
    /// Compile the config into a concrete scale, parsing both colors and
    /// validating the domain.
    pub fn compile(&self) -> Result<LinearScale> {
        let begin: Color = self.begin_color.parse()?;
        let end: Color = self.end_color.parse()?;
        LinearScale::new([self.begin_range, self.end_range], [begin, end])
    }

    /// Validate without building a scale.
    pub fn validate(&self) -> Result<()> {
        self.compile().map(|_| ())
    }
}

impl Default for ColorMappingConfig {
    fn default() -> Self {
        Self {
            property_name: DEFAULT_PROPERTY.to_string(),
            begin_color: "red".to_string(),
            end_color: "blue".to_string(),
            begin_range: -100.0,
            end_range: 0.0,
        }
    }
}

/// A single form-input change.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    SetProperty(String),
    SetBeginColor(String),
    SetEndColor(String),
    SetBeginRange(f64),
    SetEndRange(f64),
}

/// Pure reducer: applies one action to a config, returning the next config.
/// The input is never mutated.
pub fn reduce(config: &ColorMappingConfig, action: ConfigAction) -> ColorMappingConfig {
    let mut next = config.clone();
    match action {
        ConfigAction::SetProperty(name) => next.property_name = name,
        ConfigAction::SetBeginColor(color) => next.begin_color = color,
        ConfigAction::SetEndColor(color) => next.end_color = color,
        ConfigAction::SetBeginRange(value) => next.begin_range = value,
        ConfigAction::SetEndRange(value) => next.end_range = value,
    }
    next
}
