//! Overlay colors for the ProKeys lane
//!
//! Colors are specified as hex strings (e.g., "#FF1D23") so they can live in
//! the YAML theme file. Five overlay colors cover two octaves plus the
//! closing C: band 0 = red, 1 = yellow, 2 = blue, 3 = green, 4 = orange.

use serde::{Deserialize, Serialize};

/// Linear RGBA color, components in 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Same RGB with a replaced alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Parse a hex color string
///
/// Supports formats: "#RRGGBB", "RRGGBB", "#RRGGBBAA" or "RRGGBBAA".
/// Returns white on parse failure.
pub fn parse_hex_color(hex: &str) -> Rgba {
    let digits = hex.trim().trim_start_matches('#');
    if (digits.len() != 6 && digits.len() != 8) || !digits.is_ascii() {
        log::warn!("Invalid hex color '{}', using white", hex);
        return Rgba::WHITE;
    }

    let channel =
        |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).unwrap_or(255);
    let alpha = if digits.len() == 8 { channel(6..8) } else { 255 };

    Rgba::from_rgba8(channel(0..2), channel(2..4), channel(4..6), alpha)
}

/// Source of per-band overlay colors
///
/// Implemented by the color profile; the overlay asks it once per white key
/// while building the layout.
pub trait OverlayColorSource {
    /// Overlay color for a band group (two bands per octave)
    fn overlay_color(&self, band_group: usize) -> Rgba;
}

/// ProKeys overlay color profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProKeysColors {
    /// Band 0 (default: red)
    pub red_overlay: String,
    /// Band 1 (default: yellow)
    pub yellow_overlay: String,
    /// Band 2 (default: blue)
    pub blue_overlay: String,
    /// Band 3 (default: green)
    pub green_overlay: String,
    /// Band 4 (default: orange)
    pub orange_overlay: String,
}

impl Default for ProKeysColors {
    fn default() -> Self {
        Self {
            red_overlay: "#FF1D23".to_string(),
            yellow_overlay: "#FFE900".to_string(),
            blue_overlay: "#00BFFF".to_string(),
            green_overlay: "#79D304".to_string(),
            orange_overlay: "#FF8400".to_string(),
        }
    }
}

impl ProKeysColors {
    /// Get colors as array [Red, Yellow, Blue, Green, Orange]
    pub fn as_array(&self) -> [Rgba; 5] {
        [
            parse_hex_color(&self.red_overlay),
            parse_hex_color(&self.yellow_overlay),
            parse_hex_color(&self.blue_overlay),
            parse_hex_color(&self.green_overlay),
            parse_hex_color(&self.orange_overlay),
        ]
    }
}

impl OverlayColorSource for ProKeysColors {
    fn overlay_color(&self, band_group: usize) -> Rgba {
        let hex = match band_group {
            0 => &self.red_overlay,
            1 => &self.yellow_overlay,
            2 => &self.blue_overlay,
            3 => &self.green_overlay,
            4 => &self.orange_overlay,
            _ => return Rgba::TRANSPARENT,
        };
        parse_hex_color(hex)
    }
}

/// Fixed palette, for callers that already resolved their colors
impl OverlayColorSource for [Rgba] {
    fn overlay_color(&self, band_group: usize) -> Rgba {
        self.get(band_group).copied().unwrap_or(Rgba::TRANSPARENT)
    }
}
