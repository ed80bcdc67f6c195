//! ProKeys track overlay
//!
//! Builds the per-key overlay visuals once and then tracks which keys are
//! held, toggling each key's highlight element through the renderer.
//!
//! # Architecture
//!
//! ```text
//! OverlayConfig + colors + FadeRegion
//!        │
//!        ▼
//! build_white_key_slots ──► describe_keys ──► OverlayRenderer::materialize
//!                                                   │ (one handle per key)
//!                                                   ▼
//! gameplay ──► set_key_held(i, held) ──► HighlightStateStore + set_highlight_visible
//! ```

use crate::color::OverlayColorSource;
use crate::config::{OverlayConfig, OverlayResources};
use crate::error::OverlayError;
use crate::highlight::HighlightStateStore;
use crate::layout::{build_white_key_slots, sequential_index_for, WhiteKeySlot, TOTAL_KEY_COUNT};
use crate::render::{FadeRegion, OverlayRenderer, TextureSelection, VisualDescriptor};

/// Alpha of the always-visible key overlay
pub const IDLE_OVERLAY_ALPHA: f32 = 0.05;

/// Alpha of the highlight shown while a key is held
pub const HIGHLIGHT_OVERLAY_ALPHA: f32 = 0.3;

/// Describe every white key's visuals
///
/// Pure layout step: positions, band colors and texture choices, in
/// sequential order.
pub fn describe_keys<C>(
    slots: &[WhiteKeySlot],
    key_spacing: f32,
    overlay_offset: f32,
    resources: &OverlayResources,
    colors: &C,
    fade: FadeRegion,
) -> Vec<VisualDescriptor>
where
    C: OverlayColorSource + ?Sized,
{
    slots
        .iter()
        .map(|slot| {
            let band_color = colors.overlay_color(slot.band_group);
            let idle_texture = match slot.band_edge {
                Some(orientation) => TextureSelection::EdgeGradient {
                    texture: resources.edge_gradient.clone(),
                    scale_x: orientation.texture_scale_x(),
                },
                None => TextureSelection::Solid,
            };

            VisualDescriptor {
                slot: *slot,
                x_offset: slot.sequential_index as f32 * key_spacing + overlay_offset,
                idle_color: band_color.with_alpha(IDLE_OVERLAY_ALPHA),
                idle_texture,
                highlight_color: band_color.with_alpha(HIGHLIGHT_OVERLAY_ALPHA),
                highlight_texture: resources.held_gradient.clone(),
                fade,
            }
        })
        .collect()
}

/// Key overlay for one ProKeys lane
pub struct KeyOverlay<R: OverlayRenderer> {
    renderer: R,
    slots: Vec<WhiteKeySlot>,
    descriptors: Vec<VisualDescriptor>,
    /// Highlight handles, indexed by sequential key index
    highlights: Vec<R::Handle>,
    held: HighlightStateStore,
    key_spacing: f32,
}

impl<R: OverlayRenderer> KeyOverlay<R> {
    /// Build the overlay for the standard ProKeys keyboard
    pub fn initialize<C>(
        renderer: R,
        config: &OverlayConfig,
        colors: &C,
        fade: FadeRegion,
    ) -> Result<Self, OverlayError>
    where
        C: OverlayColorSource + ?Sized,
    {
        Self::with_key_count(renderer, TOTAL_KEY_COUNT, config, colors, fade)
    }

    /// Build the overlay for a keyboard of `total_keys` chromatic keys
    ///
    /// Configuration is checked before anything is materialized. Every
    /// highlight starts hidden and every key released.
    pub fn with_key_count<C>(
        mut renderer: R,
        total_keys: usize,
        config: &OverlayConfig,
        colors: &C,
        fade: FadeRegion,
    ) -> Result<Self, OverlayError>
    where
        C: OverlayColorSource + ?Sized,
    {
        if total_keys == 0 {
            return Err(OverlayError::InvalidConfig(
                "keyboard must have at least one key".to_string(),
            ));
        }
        config.validate()?;
        if !fade.zero_fade_position.is_finite() || !fade.fade_size.is_finite() {
            return Err(OverlayError::InvalidConfig(format!(
                "fade region must be finite, got {:?}",
                fade
            )));
        }
        let resources = config.resources()?;

        let key_spacing = config.key_spacing();
        let slots = build_white_key_slots(total_keys);
        let descriptors = describe_keys(
            &slots,
            key_spacing,
            config.overlay_offset,
            &resources,
            colors,
            fade,
        );

        let mut highlights = Vec::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            let key = descriptor.slot.sequential_index;
            let handle = renderer
                .materialize(descriptor)
                .map_err(|source| OverlayError::Render { key, source })?;
            renderer.set_highlight_visible(&handle, false);
            highlights.push(handle);
        }

        log::debug!(
            "KeyOverlay: built {} white key overlays from {} keys (spacing {:.4})",
            slots.len(),
            total_keys,
            key_spacing
        );

        Ok(Self {
            renderer,
            held: HighlightStateStore::new(slots.len()),
            slots,
            descriptors,
            highlights,
            key_spacing,
        })
    }

    /// Set whether a white key is held
    ///
    /// `key_index` is the sequential white key index. Indices outside
    /// `0..white_key_count()` are ignored. The renderer is only told about
    /// actual state changes.
    pub fn set_key_held(&mut self, key_index: i32, held: bool) {
        let Ok(index) = usize::try_from(key_index) else {
            return;
        };
        let Some(changed) = self.held.set(index, held) else {
            return;
        };

        log::debug!("Setting key held: {} ({})", index, held);

        if changed {
            if let Some(handle) = self.highlights.get(index) {
                self.renderer.set_highlight_visible(handle, held);
            }
        }
    }

    /// Set whether a key is held, addressed by chromatic index
    ///
    /// Black keys have no overlay and are ignored.
    pub fn set_chromatic_key_held(&mut self, chromatic_index: usize, held: bool) {
        if let Some(index) = sequential_index_for(&self.slots, chromatic_index) {
            if let Ok(index) = i32::try_from(index) {
                self.set_key_held(index, held);
            }
        }
    }

    /// Held state of a white key; false for out of range indices
    ///
    /// Takes the same index type as [`set_key_held`](Self::set_key_held).
    pub fn is_key_held(&self, key_index: i32) -> bool {
        usize::try_from(key_index).map_or(false, |index| self.held.is_held(index))
    }

    /// Sequential indices of all held keys, ascending
    pub fn held_keys(&self) -> Vec<usize> {
        self.held.held_keys()
    }

    pub fn white_key_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[WhiteKeySlot] {
        &self.slots
    }

    pub fn descriptors(&self) -> &[VisualDescriptor] {
        &self.descriptors
    }

    pub fn key_spacing(&self) -> f32 {
        self.key_spacing
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Tear down the overlay, giving the renderer back
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ProKeysColors, Rgba};
    use crate::layout::EdgeOrientation;
    use crate::render::{LoggingRenderer, RenderError, TextureHandle};

    fn build(total_keys: usize) -> KeyOverlay<LoggingRenderer> {
        KeyOverlay::with_key_count(
            LoggingRenderer::new(),
            total_keys,
            &OverlayConfig::default(),
            &ProKeysColors::default(),
            FadeRegion::new(3.0, 1.25),
        )
        .unwrap()
    }

    /// Renderer that refuses a specific key
    struct RefusingRenderer {
        refuse: usize,
    }

    impl OverlayRenderer for RefusingRenderer {
        type Handle = ();

        fn materialize(&mut self, descriptor: &VisualDescriptor) -> Result<(), RenderError> {
            if descriptor.slot.sequential_index == self.refuse {
                return Err(RenderError("prefab has no highlight renderer".to_string()));
            }
            Ok(())
        }

        fn set_highlight_visible(&mut self, _handle: &(), _visible: bool) {}
    }

    #[test]
    fn test_positions_follow_sequential_index() {
        let config = OverlayConfig {
            track_width: 1.4,
            overlay_offset: -0.5,
            ..OverlayConfig::default()
        };
        let overlay = KeyOverlay::initialize(
            LoggingRenderer::new(),
            &config,
            &ProKeysColors::default(),
            FadeRegion::default(),
        )
        .unwrap();

        assert_eq!(overlay.white_key_count(), 15);
        for descriptor in overlay.descriptors() {
            let expected = descriptor.slot.sequential_index as f32 * 0.1 - 0.5;
            assert!((descriptor.x_offset - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_colors_use_band_and_alpha() {
        let palette = [
            Rgba::new(1.0, 0.0, 0.0, 1.0),
            Rgba::new(0.0, 1.0, 0.0, 1.0),
            Rgba::new(0.0, 0.0, 1.0, 1.0),
            Rgba::new(1.0, 1.0, 0.0, 1.0),
            Rgba::new(0.0, 1.0, 1.0, 1.0),
        ];
        let overlay = KeyOverlay::initialize(
            LoggingRenderer::new(),
            &OverlayConfig::default(),
            &palette[..],
            FadeRegion::default(),
        )
        .unwrap();

        for descriptor in overlay.descriptors() {
            let band = palette[descriptor.slot.band_group];
            assert_eq!(descriptor.idle_color, band.with_alpha(IDLE_OVERLAY_ALPHA));
            assert_eq!(descriptor.highlight_color, band.with_alpha(HIGHLIGHT_OVERLAY_ALPHA));
        }
    }

    #[test]
    fn test_edge_textures() {
        let overlay = build(TOTAL_KEY_COUNT);
        let edge = TextureHandle::new("prokeys/edge_gradient");

        for descriptor in overlay.descriptors() {
            match descriptor.slot.band_edge {
                Some(orientation) => assert_eq!(
                    descriptor.idle_texture,
                    TextureSelection::EdgeGradient {
                        texture: edge.clone(),
                        scale_x: orientation.texture_scale_x(),
                    }
                ),
                None => assert_eq!(descriptor.idle_texture, TextureSelection::Solid),
            }
            assert_eq!(descriptor.highlight_texture.name(), "prokeys/held_gradient");
        }

        let mirrored: Vec<usize> = overlay
            .slots()
            .iter()
            .filter(|s| s.band_edge == Some(EdgeOrientation::Mirrored))
            .map(|s| s.chromatic_index)
            .collect();
        assert_eq!(mirrored, vec![4, 11, 16, 23]);
    }

    #[test]
    fn test_fade_is_passed_through() {
        let overlay = build(24);
        assert!(overlay
            .descriptors()
            .iter()
            .all(|d| d.fade == FadeRegion::new(3.0, 1.25)));
    }

    #[test]
    fn test_highlights_start_hidden() {
        let overlay = build(TOTAL_KEY_COUNT);
        let renderer = overlay.renderer();

        assert_eq!(renderer.materialized().len(), 15);
        assert!((0..15).all(|h| !renderer.is_highlight_visible(h)));
        assert!(overlay.held_keys().is_empty());
    }

    #[test]
    fn test_set_key_held_toggles_renderer() {
        let mut overlay = build(TOTAL_KEY_COUNT);

        overlay.set_key_held(5, true);
        assert!(overlay.is_key_held(5));
        assert!(overlay.renderer().is_highlight_visible(5));

        overlay.set_key_held(5, false);
        assert!(!overlay.is_key_held(5));
        assert!(!overlay.renderer().is_highlight_visible(5));
    }

    #[test]
    fn test_repeated_toggle_signals_once() {
        let mut overlay = build(TOTAL_KEY_COUNT);
        let before = overlay.renderer().visibility_requests();

        overlay.set_key_held(2, true);
        overlay.set_key_held(2, true);
        overlay.set_key_held(2, true);

        assert_eq!(overlay.renderer().visibility_requests(), before + 1);
        assert_eq!(overlay.held_keys(), vec![2]);
    }

    #[test]
    fn test_out_of_range_toggle_is_noop() {
        let mut overlay = build(TOTAL_KEY_COUNT);
        overlay.set_key_held(0, true);
        let before = overlay.renderer().visibility_requests();

        overlay.set_key_held(-1, true);
        overlay.set_key_held(15, true);
        overlay.set_key_held(i32::MAX, false);
        overlay.set_key_held(i32::MIN, false);

        assert_eq!(overlay.held_keys(), vec![0]);
        assert_eq!(overlay.renderer().visibility_requests(), before);
    }

    #[test]
    fn test_query_uses_toggle_index() {
        let mut overlay = build(TOTAL_KEY_COUNT);
        let last = overlay.white_key_count() as i32 - 1;

        overlay.set_key_held(last, true);
        assert!(overlay.is_key_held(last));

        assert!(!overlay.is_key_held(-1));
        assert!(!overlay.is_key_held(last + 1));
        assert!(!overlay.is_key_held(i32::MIN));
    }

    #[test]
    fn test_chromatic_toggle() {
        let mut overlay = build(TOTAL_KEY_COUNT);

        // E is the third white key
        overlay.set_chromatic_key_held(4, true);
        assert_eq!(overlay.held_keys(), vec![2]);

        // Black keys and keys past the end do nothing
        overlay.set_chromatic_key_held(1, true);
        overlay.set_chromatic_key_held(25, true);
        assert_eq!(overlay.held_keys(), vec![2]);

        overlay.set_chromatic_key_held(24, true);
        assert_eq!(overlay.held_keys(), vec![2, 14]);
    }

    #[test]
    fn test_missing_texture_fails_before_materializing() {
        let config = OverlayConfig {
            edge_gradient_texture: None,
            ..OverlayConfig::default()
        };
        let result = KeyOverlay::initialize(
            RefusingRenderer { refuse: usize::MAX },
            &config,
            &ProKeysColors::default(),
            FadeRegion::default(),
        );
        assert!(matches!(
            result,
            Err(OverlayError::MissingResource("edge_gradient_texture"))
        ));
    }

    #[test]
    fn test_invalid_fade_and_key_count() {
        let result = KeyOverlay::initialize(
            LoggingRenderer::new(),
            &OverlayConfig::default(),
            &ProKeysColors::default(),
            FadeRegion::new(f32::NAN, 1.0),
        );
        assert!(matches!(result, Err(OverlayError::InvalidConfig(_))));

        let result = KeyOverlay::with_key_count(
            LoggingRenderer::new(),
            0,
            &OverlayConfig::default(),
            &ProKeysColors::default(),
            FadeRegion::default(),
        );
        assert!(matches!(result, Err(OverlayError::InvalidConfig(_))));
    }

    #[test]
    fn test_render_failure_reports_key() {
        let result = KeyOverlay::initialize(
            RefusingRenderer { refuse: 6 },
            &OverlayConfig::default(),
            &ProKeysColors::default(),
            FadeRegion::default(),
        );
        match result {
            Err(OverlayError::Render { key, source }) => {
                assert_eq!(key, 6);
                assert_eq!(source.0, "prefab has no highlight renderer");
            }
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("expected render failure"),
        }
    }
}
