//! Loading and saving the overlay settings file
//!
//! A settings file is only accepted when the overlay it describes could be
//! built: geometry must validate and both textures must be named. Anything
//! else falls back to the defaults with a warning, so a bad file never
//! reaches `KeyOverlay::initialize`.

use super::{OverlayResources, OverlaySettings};
use crate::error::OverlayError;
use anyhow::{Context, Result};
use std::path::Path;

impl OverlaySettings {
    /// Check that these settings can build an overlay
    pub fn check(&self) -> Result<OverlayResources, OverlayError> {
        self.overlay.validate()?;
        self.overlay.resources()
    }

    /// Load overlay settings from a YAML file
    ///
    /// Missing file, unreadable file, parse errors and settings that fail
    /// [`check`](Self::check) all return the defaults.
    pub fn load(path: &Path) -> Self {
        log::info!("OverlaySettings::load: Loading from {:?}", path);

        if !path.exists() {
            log::info!("OverlaySettings::load: No settings file, using defaults");
            return Self::default();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!(
                    "OverlaySettings::load: Failed to read {:?}: {}, using defaults",
                    path,
                    e
                );
                return Self::default();
            }
        };

        let settings = match serde_yaml::from_str::<Self>(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "OverlaySettings::load: Failed to parse {:?}: {}, using defaults",
                    path,
                    e
                );
                return Self::default();
            }
        };

        match settings.check() {
            Ok(resources) => {
                log::info!(
                    "OverlaySettings::load: track_width {}, offset {}, textures '{}' / '{}'",
                    settings.overlay.track_width,
                    settings.overlay.overlay_offset,
                    resources.edge_gradient,
                    resources.held_gradient
                );
                settings
            }
            Err(e) => {
                log::warn!("OverlaySettings::load: {} in {:?}, using defaults", e, path);
                Self::default()
            }
        }
    }

    /// Save overlay settings to a YAML file
    ///
    /// Refuses settings that would not build an overlay. Creates parent
    /// directories if they don't exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.check().with_context(|| {
            format!("Refusing to save invalid overlay settings to {:?}", path)
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory: {:?}", parent))?;
        }

        let yaml = serde_yaml::to_string(self).context("Failed to serialize overlay settings")?;
        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write settings file: {:?}", path))?;

        log::info!("OverlaySettings::save: Saved to {:?}", path);
        Ok(())
    }
}
