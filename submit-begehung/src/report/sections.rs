//! Issue form section extraction.

use regex::Regex;
use std::sync::LazyLock;

/// What GitHub writes for an issue form field left empty.
const NO_RESPONSE: &str = "_No response_";

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("valid line break pattern"));

static MARKDOWN_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image pattern"));

/// The body of an issue created through an issue form.
///
/// Each form field is rendered by GitHub as a `### <label>` heading followed
/// by the entered value.
#[derive(Debug, Clone, Copy)]
pub struct IssueSections<'a> {
    body: &'a str,
}

impl<'a> IssueSections<'a> {
    /// Wraps an issue body.
    pub fn new(body: &'a str) -> Self {
        Self { body }
    }

    /// Returns the trimmed text below the heading `### <header>`.
    ///
    /// The section ends at the next line starting with `###`. Missing
    /// headings and unanswered fields yield an empty string.
    pub fn grab(&self, header: &str) -> String {
        let mut lines = self.body.lines();

        let found = lines.by_ref().any(|line| {
            line.strip_prefix("###")
                .is_some_and(|rest| rest.trim() == header)
        });
        if !found {
            return String::new();
        }

        let content = lines
            .take_while(|line| !line.starts_with("###"))
            .collect::<Vec<_>>()
            .join("\n");
        let content = content.trim();

        if content == NO_RESPONSE {
            String::new()
        } else {
            content.to_string()
        }
    }

    /// [`grab`](Self::grab) followed by [`clean_one_line`].
    pub fn grab_line(&self, header: &str) -> String {
        clean_one_line(&self.grab(header))
    }
}

/// Reduces text to one line and escapes pipes for use in a table cell.
pub fn clean_one_line(text: &str) -> String {
    LINE_BREAKS
        .replace_all(text.trim(), " ")
        .replace('|', r"\|")
}

/// Returns the URLs of all Markdown images in `text`.
pub fn find_images(text: &str) -> Vec<&str> {
    MARKDOWN_IMAGE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
