//! Issue creation error types.

use thiserror::Error;

/// Errors that can occur while creating an issue.
#[derive(Debug, Error)]
pub enum IssueError {
    /// GitHub answered with a non-success status.
    #[error("GitHub API Error: {status} - {body}")]
    Api {
        /// Numeric HTTP status code.
        status: u16,
        /// Raw response text.
        body: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("GitHub request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// GitHub answered with success but the issue could not be decoded.
    #[error("Invalid GitHub response: {0}")]
    Decode(#[source] reqwest::Error),
}
