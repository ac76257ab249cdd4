//! Forgiving deserializers for form fields.

use super::CategoryEntry;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a field as display text.
///
/// Non-empty strings are kept, non-zero numbers and `true` keep their JSON
/// text. Everything else counts as absent.
pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_text(&value))
}

/// Reads the category list.
///
/// A non-array value counts as absent; array elements that are not objects
/// become empty entries.
pub(super) fn categories<'de, D>(deserializer: D) -> Result<Option<Vec<CategoryEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(None);
    };

    Ok(Some(items.iter().map(category_entry).collect()))
}

fn category_entry(item: &Value) -> CategoryEntry {
    let field = |key: &str| item.get(key).and_then(value_text);
    match item {
        Value::Object(_) => CategoryEntry {
            label: field("label"),
            status: field("status"),
            remark: field("remark"),
        },
        _ => CategoryEntry::default(),
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
