//! Issue title and body rendering.
//!
//! The body is a fixed Markdown template rendered with Handlebars. The
//! category table rows are formatted here and handed to the template as a
//! single pre-rendered value.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer, ISSUE_BODY_TEMPLATE};

use crate::submission::{CategoryEntry, Submission};

/// Table row used when a submission has no categories.
pub const EMPTY_CATEGORY_ROW: &str = "| - | - | - |";

/// Generates the issue title for a submission.
///
/// Format: "{title} – {datum}"
#[must_use]
pub fn generate_issue_title(submission: &Submission) -> String {
    format!(
        "{} – {}",
        submission.title(),
        submission.datum_or_unknown()
    )
}

/// Formats the rows of the assessment table, one per category.
///
/// Returns [`EMPTY_CATEGORY_ROW`] when there are no categories.
#[must_use]
pub fn render_category_rows(categories: &[CategoryEntry]) -> String {
    if categories.is_empty() {
        return EMPTY_CATEGORY_ROW.to_string();
    }

    categories
        .iter()
        .map(|c| format!("| {} | {} | {} |", c.label(), c.status(), c.remark()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_issue_title_defaults() {
        let title = generate_issue_title(&Submission::default());
        assert_eq!(title, "Begehung – Unbekanntes Datum");
    }

    #[test]
    fn test_generate_issue_title() {
        let submission = Submission {
            title: Some("Baustelle Nord".to_string()),
            datum: Some("2024-05-02".to_string()),
            ..Default::default()
        };
        assert_eq!(generate_issue_title(&submission), "Baustelle Nord – 2024-05-02");
    }

    #[test]
    fn test_generate_issue_title_partial() {
        let submission = Submission {
            datum: Some("2024-05-02".to_string()),
            ..Default::default()
        };
        assert_eq!(generate_issue_title(&submission), "Begehung – 2024-05-02");
    }

    #[test]
    fn test_render_category_rows_empty() {
        assert_eq!(render_category_rows(&[]), "| - | - | - |");
    }

    #[test]
    fn test_render_category_rows() {
        let rows = render_category_rows(&[
            CategoryEntry {
                label: Some("Gerüste & Leitern".to_string()),
                status: Some("Mangel".to_string()),
                remark: Some("Bordbrett fehlt".to_string()),
            },
            CategoryEntry {
                status: Some("ok".to_string()),
                ..Default::default()
            },
        ]);
        assert_eq!(
            rows,
            "| Gerüste & Leitern | Mangel | Bordbrett fehlt |\n|  | ok |  |"
        );
    }
}
