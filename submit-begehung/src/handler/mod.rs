//! The submission function.
//!
//! One invocation parses the request body, checks the configuration, renders
//! the issue and creates it with a single call to the [`IssueCreator`]. Every
//! failure ends the invocation and is reported as `{"ok": false, "error": ..}`.

mod error;
mod response;

pub use error::HandlerError;
pub use response::{FunctionResponse, SubmissionOutcome};

use crate::config::{ConfigError, FunctionConfig};
use crate::issues::{CreatedIssue, IssueCreator, NewIssue};
use crate::submission::Submission;
use crate::templates::{generate_issue_title, TemplateError, TemplateRenderer};
use tracing::{debug, error, info, info_span, warn, Instrument, Span};

/// Handles one function invocation.
///
/// `body` is the raw request body; `None` means the request had none.
pub async fn handle(
    body: Option<&str>,
    config: &FunctionConfig,
    creator: &dyn IssueCreator,
) -> FunctionResponse {
    async { respond(submit(body, config, creator).await) }
        .instrument(invocation_span(config))
        .await
}

/// Handles one function invocation from the undecoded request body.
///
/// A body that is not UTF-8 fails like any other invalid body.
pub async fn handle_bytes(
    body: &[u8],
    config: &FunctionConfig,
    creator: &dyn IssueCreator,
) -> FunctionResponse {
    match std::str::from_utf8(body) {
        Ok(text) => handle(Some(text), config, creator).await,
        Err(e) => invocation_span(config).in_scope(|| respond(Err(HandlerError::from(e)))),
    }
}

fn invocation_span(config: &FunctionConfig) -> Span {
    info_span!(
        "submit_begehung",
        repo = %format!("{}/{}", config.repo_owner(), config.repo_name())
    )
}

fn respond(result: Result<CreatedIssue, HandlerError>) -> FunctionResponse {
    match result {
        Ok(issue) => {
            info!(issue_number = issue.number, url = %issue.html_url, "Issue created");
            FunctionResponse::created(issue.html_url, issue.number)
        }
        Err(e) => {
            match &e {
                HandlerError::Config(ConfigError::Incomplete { missing }) => {
                    warn!(?missing, "GitHub configuration incomplete");
                }
                _ => error!(error = %e, "Submission failed"),
            }
            FunctionResponse::from(&e)
        }
    }
}

/// Runs a submission and returns the created issue.
///
/// # Errors
///
/// Returns [`HandlerError`] for an invalid body, incomplete configuration,
/// a rendering failure, or a failed GitHub call. No call is made unless the
/// body parsed and the configuration is complete.
pub async fn submit(
    body: Option<&str>,
    config: &FunctionConfig,
    creator: &dyn IssueCreator,
) -> Result<CreatedIssue, HandlerError> {
    let submission = Submission::from_body(body)?;
    config.validate()?;

    let issue = render_issue(&submission, config, &TemplateRenderer::new())?;
    debug!(title = %issue.title, "Rendered issue");

    Ok(creator.create_issue(config, &issue).await?)
}

/// Builds the issue payload for a submission.
///
/// # Errors
///
/// Returns an error if the body template fails to render.
pub fn render_issue(
    submission: &Submission,
    config: &FunctionConfig,
    renderer: &TemplateRenderer,
) -> Result<NewIssue, TemplateError> {
    Ok(NewIssue {
        title: generate_issue_title(submission),
        body: renderer.render_issue_body(submission)?,
        labels: vec![config.default_label().to_string()],
    })
}
