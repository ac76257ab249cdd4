//! Inspection report rendering.
//!
//! Turns the body of an inspection issue created through the GitHub issue
//! form into a Pandoc-ready Markdown report (checklist, photos, defects) and a
//! CSV to-do list of the recorded defects.

mod checklist;
mod defects;
mod error;
mod sections;

pub use checklist::{
    build_checklist_table, build_photo_blocks, photo_header, remark_header, status_cell,
    CHECKLIST_CATEGORIES,
};
pub use defects::{build_defects_table, collect_defects, todos_csv, Defect, MAX_DEFECTS};
pub use error::ReportError;
pub use sections::{clean_one_line, find_images, IssueSections};

use checklist::EMPTY_CELL;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the to-do list inside the output directory.
pub const TODOS_FILE: &str = "todos.csv";

/// A rendered inspection report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Report source for Pandoc.
    pub markdown: String,

    /// Defects found in the issue body.
    pub defects: Vec<Defect>,
}

impl Report {
    /// The to-do list as CSV.
    pub fn todos_csv(&self) -> String {
        todos_csv(&self.defects)
    }
}

/// Renders the report for an issue body.
///
/// `today` is used as the inspection date when the form has none.
pub fn render_report(body: &str, today: NaiveDate) -> Report {
    let sections = IssueSections::new(body);

    let ort = sections.grab_line("Ort / Baustelle");
    let sifa = sections.grab_line("Sifa / Ersteller");
    let wetter = sections.grab_line("Wetterbedingungen");
    let mut datum = sections.grab_line("Datum");
    if datum.is_empty() {
        datum = today.to_string();
    }

    let defects = collect_defects(&sections);

    // Blocks are joined with a newline, so the weather line follows the header
    // after an empty hard-break line.
    let mut blocks = vec![
        "# Baustellenbegehung\n".to_string(),
        format!(
            "**Ort:** {}  \n**Datum:** {datum}  \n**Sifa/Ersteller:** {}",
            or_dash(&ort),
            or_dash(&sifa)
        ),
    ];
    if !wetter.is_empty() {
        blocks.push(format!("  \n**Wetter:** {wetter}"));
    }
    blocks.extend([
        "\n".to_string(),
        build_checklist_table(&sections),
        "\n".to_string(),
        build_photo_blocks(&sections),
        "\n".to_string(),
        build_defects_table(&defects),
    ]);
    let markdown = blocks.join("\n");

    Report { markdown, defects }
}

/// Writes the report Markdown to `markdown_path` and the to-do list to
/// `out_dir/todos.csv`.
///
/// Returns the path of the written CSV file.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if a directory or file cannot be written.
pub async fn write_report(
    report: &Report,
    markdown_path: &Path,
    out_dir: &Path,
) -> Result<PathBuf, ReportError> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|e| ReportError::io(out_dir, e))?;

    tokio::fs::write(markdown_path, &report.markdown)
        .await
        .map_err(|e| ReportError::io(markdown_path, e))?;

    let csv_path = out_dir.join(TODOS_FILE);
    tokio::fs::write(&csv_path, report.todos_csv())
        .await
        .map_err(|e| ReportError::io(&csv_path, e))?;

    info!(
        report = %markdown_path.display(),
        todos = %csv_path.display(),
        defects = report.defects.len(),
        "Wrote inspection report"
    );
    Ok(csv_path)
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_CELL
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    #[test]
    fn header_uses_form_values() {
        let body = "### Ort / Baustelle\n\nKai 3\n\n### Datum\n\n2024-04-30\n\n### Sifa / Ersteller\n\nM. Muster\n\n### Wetterbedingungen\n\nRegen\n";
        let report = render_report(body, today());

        assert!(report.markdown.starts_with("# Baustellenbegehung\n\n**Ort:** Kai 3  \n**Datum:** 2024-04-30  \n**Sifa/Ersteller:** M. Muster\n  \n**Wetter:** Regen\n\n\n**Legende:**"));
    }

    #[test]
    fn missing_values_fall_back() {
        let report = render_report("", today());

        assert!(report
            .markdown
            .contains("**Ort:** –  \n**Datum:** 2024-05-02  \n**Sifa/Ersteller:** –\n"));
        assert!(!report.markdown.contains("**Wetter:**"));
        assert!(report.markdown.contains("### 1.1 Checkliste"));
        assert!(report.markdown.ends_with("| – | – | – | – | – | – |"));
        assert!(report.defects.is_empty());
    }

    #[test]
    fn unanswered_form_fields_are_left_out() {
        let body = "### Wetterbedingungen\n\n_No response_\n\n### Mangel 1 – Schweregrad\n\n_No response_\n";
        let report = render_report(body, today());

        assert!(!report.markdown.contains("_No response_"));
        assert!(!report.markdown.contains("**Wetter:**"));
        assert!(report.defects.is_empty());
    }
}
