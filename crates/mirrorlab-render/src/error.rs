//! Rendering error types.

use thiserror::Error;

/// Errors that can occur while building or writing a scene.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The view box has no area.
    #[error("invalid view box {width}x{height}")]
    InvalidViewBox { width: f32, height: f32 },

    /// The output file extension is not one we can write.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Writing the document failed.
    #[error("failed to write scene: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
