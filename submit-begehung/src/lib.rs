#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod handler;
pub mod issues;
pub mod report;
pub mod submission;
pub mod templates;

pub use config::{ConfigError, FunctionConfig};
pub use handler::{
    handle, handle_bytes, render_issue, submit, FunctionResponse, HandlerError, SubmissionOutcome,
};
pub use issues::{CreatedIssue, GitHubIssues, IssueCreator, IssueError, NewIssue};
pub use report::{render_report, write_report, Defect, Report, ReportError};
pub use submission::{CategoryEntry, Submission};
pub use templates::{
    create_handlebars_registry, generate_issue_title, render_category_rows, TemplateError,
    TemplateRenderer,
};
