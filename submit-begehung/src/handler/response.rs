//! Function response types.

use super::HandlerError;
use serde_json::{json, Value};

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The issue was created.
    Created {
        /// Browser URL of the issue.
        issue: String,
        /// Issue number.
        number: u64,
    },

    /// The submission failed.
    Failed {
        /// Error message.
        error: String,
    },
}

/// Status code and JSON body returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionResponse {
    /// HTTP status code.
    pub status_code: u16,

    /// Response outcome.
    pub outcome: SubmissionOutcome,
}

impl FunctionResponse {
    /// A 200 response for a created issue.
    pub fn created(issue: impl Into<String>, number: u64) -> Self {
        Self {
            status_code: 200,
            outcome: SubmissionOutcome::Created {
                issue: issue.into(),
                number,
            },
        }
    }

    /// A failure response.
    pub fn failed(status_code: u16, error: impl Into<String>) -> Self {
        Self {
            status_code,
            outcome: SubmissionOutcome::Failed {
                error: error.into(),
            },
        }
    }

    /// Whether the issue was created.
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, SubmissionOutcome::Created { .. })
    }

    /// The JSON body.
    pub fn body(&self) -> Value {
        match &self.outcome {
            SubmissionOutcome::Created { issue, number } => json!({
                "ok": true,
                "issue": issue,
                "number": number,
            }),
            SubmissionOutcome::Failed { error } => json!({
                "ok": false,
                "error": error,
            }),
        }
    }

    /// The JSON body as text.
    pub fn body_string(&self) -> String {
        self.body().to_string()
    }
}

impl From<&HandlerError> for FunctionResponse {
    fn from(error: &HandlerError) -> Self {
        Self::failed(error.status_code(), error.to_string())
    }
}
