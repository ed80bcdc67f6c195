//! Rendering collaborator boundary
//!
//! The overlay never owns render resources. It describes each key with a
//! [`VisualDescriptor`], asks an [`OverlayRenderer`] to materialize it, and
//! keeps only the opaque handle returned for the key's highlight element.

use crate::color::Rgba;
use crate::layout::WhiteKeySlot;
use std::fmt;

/// Name of a texture owned by the rendering side
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureHandle(String);

impl TextureHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TextureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fade region near the track's vanishing point
///
/// Reported by the gameplay side and passed through unchanged to every key.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FadeRegion {
    /// Track position where overlays are fully faded
    pub zero_fade_position: f32,
    /// Length of the fade
    pub fade_size: f32,
}

impl FadeRegion {
    pub fn new(zero_fade_position: f32, fade_size: f32) -> Self {
        Self {
            zero_fade_position,
            fade_size,
        }
    }
}

/// Texture applied to the idle overlay of a key
#[derive(Debug, Clone, PartialEq)]
pub enum TextureSelection {
    /// Plain color, no texture
    Solid,
    /// Band edge gradient; `scale_x` is -1.0 when mirrored
    EdgeGradient { texture: TextureHandle, scale_x: f32 },
}

/// Everything the renderer needs to build one key's overlay
#[derive(Debug, Clone, PartialEq)]
pub struct VisualDescriptor {
    pub slot: WhiteKeySlot,
    /// Local x position on the track
    pub x_offset: f32,
    pub idle_color: Rgba,
    pub idle_texture: TextureSelection,
    pub highlight_color: Rgba,
    pub highlight_texture: TextureHandle,
    pub fade: FadeRegion,
}

/// Error reported by a renderer while materializing a key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct RenderError(pub String);

/// Rendering collaborator
///
/// Implemented by the engine layer that turns descriptors into meshes and
/// materials.
pub trait OverlayRenderer {
    /// Handle to a materialized highlight element
    type Handle;

    /// Build the idle overlay and highlight element for one key
    fn materialize(&mut self, descriptor: &VisualDescriptor) -> Result<Self::Handle, RenderError>;

    /// Show or hide a previously materialized highlight
    fn set_highlight_visible(&mut self, handle: &Self::Handle, visible: bool);
}

/// Renderer that records requests and logs them
///
/// Used by the `overlay-layout` tool and handy for tests.
#[derive(Debug, Default)]
pub struct LoggingRenderer {
    materialized: Vec<VisualDescriptor>,
    highlight_visible: Vec<bool>,
    visibility_requests: usize,
}

impl LoggingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptors in the order they were materialized
    pub fn materialized(&self) -> &[VisualDescriptor] {
        &self.materialized
    }

    /// Current visibility of a highlight element, by handle
    pub fn is_highlight_visible(&self, handle: usize) -> bool {
        self.highlight_visible.get(handle).copied().unwrap_or(false)
    }

    /// Number of show/hide requests received
    pub fn visibility_requests(&self) -> usize {
        self.visibility_requests
    }
}

impl OverlayRenderer for LoggingRenderer {
    type Handle = usize;

    fn materialize(&mut self, descriptor: &VisualDescriptor) -> Result<usize, RenderError> {
        log::debug!(
            "materialize: key {} at x={:.3} ({:?})",
            descriptor.slot.sequential_index,
            descriptor.x_offset,
            descriptor.idle_texture
        );
        let handle = self.materialized.len();
        self.materialized.push(descriptor.clone());
        self.highlight_visible.push(true);
        Ok(handle)
    }

    fn set_highlight_visible(&mut self, handle: &usize, visible: bool) {
        self.visibility_requests += 1;
        if let Some(slot) = self.highlight_visible.get_mut(*handle) {
            *slot = visible;
        }
    }
}
