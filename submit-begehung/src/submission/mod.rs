//! Inspection form submissions.
//!
//! Every field of a submission is optional. Values are read leniently so a
//! sloppy form client can never make the request fail: anything that is not
//! usable display text is treated as absent and replaced by the field's
//! placeholder when rendering.

mod lenient;

use serde::Deserialize;
use serde_json::Value;

/// Title used when the submission has none.
pub const DEFAULT_TITLE: &str = "Begehung";
/// Date text used in the issue title when the submission has no date.
pub const UNKNOWN_DATE: &str = "Unbekanntes Datum";
/// Placeholder for empty fields in the issue body header.
pub const PLACEHOLDER: &str = "-";

/// A submitted inspection form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Submission {
    /// Free-form title of the inspection.
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,

    /// Date of the inspection, as entered.
    #[serde(default, deserialize_with = "lenient::text")]
    pub datum: Option<String>,

    /// Location or construction site.
    #[serde(default, deserialize_with = "lenient::text")]
    pub ort: Option<String>,

    /// Safety officer who carried out the inspection.
    #[serde(default, deserialize_with = "lenient::text")]
    pub sifa: Option<String>,

    /// Weather conditions.
    #[serde(default, deserialize_with = "lenient::text")]
    pub wetter: Option<String>,

    /// Overall summary.
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: Option<String>,

    /// Per-category assessment, in form order.
    #[serde(default, deserialize_with = "lenient::categories")]
    pub categories: Option<Vec<CategoryEntry>>,
}

/// Assessment of a single checklist category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub remark: Option<String>,
}

impl Submission {
    /// Parses a request body.
    ///
    /// A missing or empty body is an empty submission. A key given more than
    /// once keeps its last value.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the body is present but is not a JSON
    /// object.
    pub fn from_body(body: Option<&str>) -> Result<Self, serde_json::Error> {
        let text = match body {
            Some(text) if !text.is_empty() => text,
            _ => return Ok(Self::default()),
        };

        match serde_json::from_str::<Value>(text)? {
            Value::Object(fields) => serde_json::from_value(Value::Object(fields)),
            other => Err(serde::de::Error::custom(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Title, or [`DEFAULT_TITLE`].
    pub fn title(&self) -> &str {
        or_default(self.title.as_deref(), DEFAULT_TITLE)
    }

    /// Date for the issue title, or [`UNKNOWN_DATE`].
    pub fn datum_or_unknown(&self) -> &str {
        or_default(self.datum.as_deref(), UNKNOWN_DATE)
    }

    /// Date for the issue body, or [`PLACEHOLDER`].
    pub fn datum(&self) -> &str {
        or_default(self.datum.as_deref(), PLACEHOLDER)
    }

    /// Location, or [`PLACEHOLDER`].
    pub fn ort(&self) -> &str {
        or_default(self.ort.as_deref(), PLACEHOLDER)
    }

    /// Safety officer, or [`PLACEHOLDER`].
    pub fn sifa(&self) -> &str {
        or_default(self.sifa.as_deref(), PLACEHOLDER)
    }

    /// Weather, or [`PLACEHOLDER`].
    pub fn wetter(&self) -> &str {
        or_default(self.wetter.as_deref(), PLACEHOLDER)
    }

    /// Summary, or [`PLACEHOLDER`].
    pub fn summary(&self) -> &str {
        or_default(self.summary.as_deref(), PLACEHOLDER)
    }

    /// Category entries; empty when none were submitted.
    pub fn categories(&self) -> &[CategoryEntry] {
        self.categories.as_deref().unwrap_or_default()
    }
}

impl CategoryEntry {
    /// Category label, or empty.
    pub fn label(&self) -> &str {
        or_default(self.label.as_deref(), "")
    }

    /// Category status, or empty.
    pub fn status(&self) -> &str {
        or_default(self.status.as_deref(), "")
    }

    /// Category remark, or empty.
    pub fn remark(&self) -> &str {
        or_default(self.remark.as_deref(), "")
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}
