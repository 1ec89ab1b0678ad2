//! Error types for render pass lifecycle operations.
//!
//! Drawing itself never fails; these only cover acquiring the framebuffer.

use thiserror::Error;

/// Result type alias using [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised while beginning a render pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The graphics context could not hand out its framebuffer.
    #[error("framebuffer capture failed: {0}")]
    CaptureFailed(String),

    /// `begin_render` was called while a pass was already active.
    #[error("a render pass is already active")]
    PassActive,

    /// The captured layout cannot address its own rows.
    #[error("invalid framebuffer layout: {width}x{height} with stride {stride}")]
    InvalidLayout {
        width: usize,
        height: usize,
        stride: usize,
    },

    /// The captured buffer is shorter than `stride * height`.
    #[error("framebuffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}
