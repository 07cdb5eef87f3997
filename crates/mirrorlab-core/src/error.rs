//! Error types for mirrorlab.

use thiserror::Error;

/// The main error type for mirrorlab operations.
///
/// Geometry itself never fails; these cover the edges of the system where
/// user-supplied names, configuration and files come in.
#[derive(Error, Debug)]
pub enum MirrorlabError {
    /// No lesson is registered under the given key.
    #[error("unknown lesson '{0}'")]
    UnknownLesson(String),

    /// A configuration value is outside its legal range.
    #[error("invalid option '{name}': {reason}")]
    InvalidOption { name: &'static str, reason: String },

    /// A color or filter name could not be parsed.
    #[error("unknown color '{0}'")]
    UnknownColor(String),

    /// A mirror orientation name could not be parsed.
    #[error("unknown mirror kind '{0}'")]
    UnknownMirrorKind(String),

    /// Rendering or writing a scene failed.
    #[error("render error: {0}")]
    RenderError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for mirrorlab operations.
pub type Result<T> = std::result::Result<T, MirrorlabError>;
