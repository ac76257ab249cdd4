//! Template renderer.

use super::render_category_rows;
use crate::submission::Submission;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Markdown body of a submitted inspection issue.
///
/// `rows` is pre-rendered by [`render_category_rows`].
pub const ISSUE_BODY_TEMPLATE: &str = "\
**Ort:** {{ort}}
**Datum:** {{datum}}
**Sifa:** {{sifa}}
**Wetter:** {{wetter}}
**Zusammenfassung:** {{summary}}

---
### Bewertung
| Kategorie | Status | Bemerkung |
|------------|--------|------------|
{{rows}}
";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders issue bodies for inspection submissions.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the issue body for a submission.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_issue_body(&self, submission: &Submission) -> Result<String, super::TemplateError> {
        let data = json!({
            "ort": submission.ort(),
            "datum": submission.datum(),
            "sifa": submission.sifa(),
            "wetter": submission.wetter(),
            "summary": submission.summary(),
            "rows": render_category_rows(submission.categories()),
        });

        self.render_template(ISSUE_BODY_TEMPLATE, &data)
    }

    fn render_template(&self, template: &str, data: &Value) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
