//! Error types for overlay construction

use crate::render::RenderError;

/// Error building the key overlay
///
/// All variants are configuration errors raised during initialization.
/// Highlight toggles never fail.
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("Missing required overlay resource: {0}")]
    MissingResource(&'static str),

    #[error("Invalid overlay configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to materialize overlay for key {key}: {source}")]
    Render {
        key: usize,
        #[source]
        source: RenderError,
    },
}
