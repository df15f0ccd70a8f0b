//! Error types for advision-renderer.

use thiserror::Error;

/// All errors that can arise from listing rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON serialization error (building tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown listing format '{0}'; expected: html, markdown, json")]
    UnknownFormat(String),
}
