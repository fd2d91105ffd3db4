//! Error types for format conversion

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// The format exists but cannot perform the requested operation
    #[error("{0}")]
    NotSupported(String),

    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The engine wrote into its output buffer and failed
    #[error("render failed: {0}")]
    Render(#[from] std::io::Error),

    #[error("rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
