//! Issue payload and response types.

use serde::{Deserialize, Serialize};

/// Payload of the issue-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    /// Issue title.
    pub title: String,

    /// Rendered Markdown body.
    pub body: String,

    /// Labels applied to the issue.
    pub labels: Vec<String>,
}

/// The fields of a created issue the function reports back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    /// Browser URL of the issue.
    pub html_url: String,

    /// Issue number within the repository.
    pub number: u64,
}
