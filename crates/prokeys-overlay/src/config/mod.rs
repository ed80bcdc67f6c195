//! Overlay configuration
//!
//! Track geometry, texture names and the color profile, stored together as
//! YAML. Default location: ~/.config/prokeys-overlay/overlay.yaml
//!
//! ```yaml
//! overlay:
//!   track_width: 2.0
//!   overlay_offset: 0.0
//!   edge_gradient_texture: "prokeys/edge_gradient"
//!   held_gradient_texture: "prokeys/held_gradient"
//! colors:
//!   red_overlay: "#FF1D23"
//!   yellow_overlay: "#FFE900"
//!   blue_overlay: "#00BFFF"
//!   green_overlay: "#79D304"
//!   orange_overlay: "#FF8400"
//! ```

mod io;

use crate::color::ProKeysColors;
use crate::error::OverlayError;
use crate::layout::WHITE_KEY_VISIBLE_COUNT;
use crate::render::TextureHandle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root of the overlay settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub overlay: OverlayConfig,
    pub colors: ProKeysColors,
}

/// Per-lane overlay geometry and texture configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Width of the whole track in world units
    pub track_width: f32,
    /// Added to every key's x position
    pub overlay_offset: f32,
    /// Texture drawn on band edge keys
    pub edge_gradient_texture: Option<String>,
    /// Texture drawn on the held highlight
    pub held_gradient_texture: Option<String>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            track_width: 2.0,
            overlay_offset: 0.0,
            edge_gradient_texture: Some("prokeys/edge_gradient".to_string()),
            held_gradient_texture: Some("prokeys/held_gradient".to_string()),
        }
    }
}

/// Textures required to build the overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayResources {
    pub edge_gradient: TextureHandle,
    pub held_gradient: TextureHandle,
}

impl OverlayConfig {
    /// Distance between adjacent white keys
    pub fn key_spacing(&self) -> f32 {
        self.track_width / WHITE_KEY_VISIBLE_COUNT as f32
    }

    /// Check geometry values before any layout is built
    pub fn validate(&self) -> Result<(), OverlayError> {
        if !self.track_width.is_finite() || self.track_width <= 0.0 {
            return Err(OverlayError::InvalidConfig(format!(
                "track_width must be a positive number, got {}",
                self.track_width
            )));
        }
        if !self.overlay_offset.is_finite() {
            return Err(OverlayError::InvalidConfig(format!(
                "overlay_offset must be finite, got {}",
                self.overlay_offset
            )));
        }
        Ok(())
    }

    /// Resolve the texture handles, failing on the first missing one
    pub fn resources(&self) -> Result<OverlayResources, OverlayError> {
        Ok(OverlayResources {
            edge_gradient: required_texture(&self.edge_gradient_texture, "edge_gradient_texture")?,
            held_gradient: required_texture(&self.held_gradient_texture, "held_gradient_texture")?,
        })
    }
}

fn required_texture(
    name: &Option<String>,
    field: &'static str,
) -> Result<TextureHandle, OverlayError> {
    match name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => Ok(TextureHandle::new(name)),
        _ => Err(OverlayError::MissingResource(field)),
    }
}

/// Get the default settings file path
///
/// Returns: ~/.config/prokeys-overlay/overlay.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("prokeys-overlay")
        .join("overlay.yaml")
}
