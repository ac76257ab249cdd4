//! Handler error types.

use crate::config::ConfigError;
use crate::issues::IssueError;
use crate::templates::TemplateError;
use thiserror::Error;

/// Every way a submission can fail.
///
/// All variants currently map to the same response shape; the kind is kept
/// so status codes can be differentiated later.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The request body is not a JSON object.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The request body is not UTF-8 text.
    #[error("Invalid request body: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// The request body could not be read from the connection.
    #[error("Invalid request body: {0}")]
    UnreadableBody(String),

    /// Required settings are missing.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The issue body could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The GitHub call failed.
    #[error(transparent)]
    Issue(#[from] IssueError),
}

impl HandlerError {
    /// HTTP status code reported for this error.
    pub fn status_code(&self) -> u16 {
        500
    }
}
