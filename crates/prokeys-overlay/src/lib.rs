//! ProKeys track overlay layout and highlight state
//!
//! This crate provides:
//! - Piano key classification (white/black, lower/upper octave half)
//! - White key layout with color bands and band edge gradients
//! - Visual descriptors handed to a rendering collaborator
//! - Per-key "held" highlight state with an idempotent toggle
//! - YAML configuration for track geometry, textures and colors
//!
//! # Usage
//!
//! ```ignore
//! use prokeys_overlay::{FadeRegion, KeyOverlay, LoggingRenderer, OverlaySettings};
//!
//! let settings = OverlaySettings::default();
//! let mut overlay = KeyOverlay::initialize(
//!     LoggingRenderer::new(),
//!     &settings.overlay,
//!     &settings.colors,
//!     FadeRegion::new(3.0, 1.25),
//! )?;
//!
//! // From the gameplay input path
//! overlay.set_key_held(4, true);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod highlight;
pub mod layout;
pub mod overlay;
pub mod piano;
pub mod render;

pub use color::{parse_hex_color, OverlayColorSource, ProKeysColors, Rgba};
pub use config::{default_config_path, OverlayConfig, OverlayResources, OverlaySettings};
pub use error::OverlayError;
pub use highlight::HighlightStateStore;
pub use layout::{
    band_edge_for, build_white_key_slots, sequential_index_for, EdgeOrientation, WhiteKeySlot,
    BAND_EDGE_PAIRS, TOTAL_KEY_COUNT, WHITE_KEY_VISIBLE_COUNT,
};
pub use overlay::{describe_keys, KeyOverlay, HIGHLIGHT_OVERLAY_ALPHA, IDLE_OVERLAY_ALPHA};
pub use piano::{is_lower_half_key, is_white_key, KeyColor, KeyboardHalf, NOTES_PER_OCTAVE};
pub use render::{
    FadeRegion, LoggingRenderer, OverlayRenderer, RenderError, TextureHandle, TextureSelection,
    VisualDescriptor,
};
