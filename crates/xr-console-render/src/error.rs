//! Render pass errors

use thiserror::Error;
use xr_console_core::Severity;

/// Errors raised by the drawing surface
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Drawing surface unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to publish surface image: {0}")]
    Publish(String),
}

/// Errors that abort a render pass
///
/// A failed pass leaves the renderer dirty, so the next scheduled pass
/// tries again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("No color configured for severity `{0}`")]
    InvalidSeverity(Severity),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
