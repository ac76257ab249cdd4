//! GitHub issue creation.
//!
//! This module sends the single outbound request of the function: a POST to
//! the issues endpoint of the configured repository. Non-success answers are
//! passed through as [`IssueError::Api`] carrying the raw response text.

mod error;
mod types;

pub use error::IssueError;
pub use types::{CreatedIssue, NewIssue};

use crate::config::FunctionConfig;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use tracing::{debug, trace};

/// Media type GitHub recommends for REST requests.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Creates issues in a repository.
#[async_trait]
pub trait IssueCreator: Send + Sync {
    /// Creates `issue` in the repository named by `config`.
    async fn create_issue(
        &self,
        config: &FunctionConfig,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, IssueError>;
}

/// [`IssueCreator`] backed by the GitHub REST API.
#[derive(Debug, Clone, Default)]
pub struct GitHubIssues {
    client: reqwest::Client,
}

impl GitHubIssues {
    /// Creates a client with default HTTP settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client reusing an existing HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IssueCreator for GitHubIssues {
    async fn create_issue(
        &self,
        config: &FunctionConfig,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, IssueError> {
        let url = config.issues_url();
        debug!(url = %url, title = %issue.title, "Creating GitHub issue");

        let response = self
            .client
            .post(&url)
            .bearer_auth(config.token())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(USER_AGENT, concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .json(issue)
            .send()
            .await
            .map_err(IssueError::Http)?;

        let status = response.status();
        trace!(status = status.as_u16(), "GitHub responded");

        if !status.is_success() {
            let body = response.text().await.map_err(IssueError::Http)?;
            return Err(IssueError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<CreatedIssue>().await.map_err(IssueError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_embeds_status_and_text() {
        let err = IssueError::Api {
            status: 422,
            body: "validation failed".to_string(),
        };
        assert_eq!(err.to_string(), "GitHub API Error: 422 - validation failed");
    }

    #[test]
    fn new_issue_serializes_as_github_payload() {
        let issue = NewIssue {
            title: "Begehung – 2024-05-02".to_string(),
            body: "**Ort:** -".to_string(),
            labels: vec!["begehung".to_string()],
        };
        let json = serde_json::to_value(&issue).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "Begehung – 2024-05-02",
                "body": "**Ort:** -",
                "labels": ["begehung"],
            })
        );
    }

    #[test]
    fn created_issue_ignores_extra_fields() {
        let issue: CreatedIssue = serde_json::from_str(
            r#"{"id": 9, "html_url": "https://github.com/x/y/issues/1", "number": 1, "state": "open"}"#,
        )
        .unwrap();

        assert_eq!(issue.html_url, "https://github.com/x/y/issues/1");
        assert_eq!(issue.number, 1);
    }
}
