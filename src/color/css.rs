use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An RGB triple with 0-255 channels, the shape the tile renderer consumes
/// as a fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `[r, g, b]` array form, matching the renderer's fill-color contract.
    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.as_array()
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses a CSS color string: named colors, `#RGB`/`#RRGGBB` hex, or
    /// `rgb(r, g, b)` functional notation.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.starts_with('#') {
            return parse_hex_color(s).ok_or_else(|| Error::ColorParse(s.to_string()));
        }

        if s.starts_with("rgb") {
            return parse_rgb_color(s).ok_or_else(|| Error::ColorParse(s.to_string()));
        }

        // CSS named colors (the web-safe subset the overlay uses)
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::rgb(0, 0, 0)),
            "white" => Ok(Color::rgb(255, 255, 255)),
            "red" => Ok(Color::rgb(255, 0, 0)),
            "green" => Ok(Color::rgb(0, 128, 0)),
            "blue" => Ok(Color::rgb(0, 0, 255)),
            "yellow" => Ok(Color::rgb(255, 255, 0)),
            "cyan" => Ok(Color::rgb(0, 255, 255)),
            "magenta" => Ok(Color::rgb(255, 0, 255)),
            "gray" | "grey" => Ok(Color::rgb(128, 128, 128)),
            "orange" => Ok(Color::rgb(255, 165, 0)),
            "purple" => Ok(Color::rgb(128, 0, 128)),
            _ => Err(Error::ColorParse(s.to_string())),
        }
    }
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.trim_start_matches('#');
    match hex.len() {
        3 => {
            // #RGB -> #RRGGBB
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Color::rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::rgb(r, g, b))
        }
        _ => None,
    }
}

fn parse_rgb_color(s: &str) -> Option<Color> {
    let inner = s.strip_prefix("rgb")?.trim().strip_prefix('(')?.strip_suffix(')')?;
    let mut channels = inner.split(',').map(|c| c.trim().parse::<u8>());

    let r = channels.next()?.ok()?;
    let g = channels.next()?.ok()?;
    let b = channels.next()?.ok()?;
    if channels.next().is_some() {
        return None;
    }

    Some(Color::rgb(r, g, b))
}
