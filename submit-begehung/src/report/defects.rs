//! Defect list and to-do CSV.

use super::checklist::EMPTY_CELL;
use super::sections::IssueSections;

/// Number of defect slots in the inspection form.
pub const MAX_DEFECTS: usize = 10;

const CSV_HEADER: [&str; 6] = [
    "Nr",
    "Schweregrad",
    "Ort/Bereich",
    "Beschreibung/Maßnahme",
    "Verantwortlich",
    "Frist",
];

/// A defect recorded in the inspection form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defect {
    /// Slot number in the form, starting at 1.
    pub number: usize,
    pub severity: String,
    pub area: String,
    /// Description and corrective measure.
    pub description: String,
    pub responsible: String,
    /// Deadline, as entered (expected `YYYY-MM-DD`).
    pub deadline: String,
}

impl Defect {
    fn fields(&self) -> [&str; 5] {
        [
            &self.severity,
            &self.area,
            &self.description,
            &self.responsible,
            &self.deadline,
        ]
    }

    fn is_empty(&self) -> bool {
        self.fields().iter().all(|field| field.is_empty())
    }
}

/// Reads all filled defect slots from the issue body.
///
/// Slots where every field is empty are skipped.
pub fn collect_defects(sections: &IssueSections<'_>) -> Vec<Defect> {
    (1..=MAX_DEFECTS)
        .map(|i| Defect {
            number: i,
            severity: sections.grab_line(&format!("Mangel {i} – Schweregrad")),
            area: sections.grab_line(&format!("Mangel {i} – Ort/Bereich")),
            description: sections.grab_line(&format!("Mangel {i} – Beschreibung & Maßnahme")),
            responsible: sections.grab_line(&format!("Mangel {i} – Verantwortlich")),
            deadline: sections.grab_line(&format!("Mangel {i} – Frist (YYYY-MM-DD)")),
        })
        .filter(|defect| !defect.is_empty())
        .collect()
}

/// Builds the defect section with one table row per defect.
pub fn build_defects_table(defects: &[Defect]) -> String {
    let mut lines = vec![
        "## 1.2 Mängel\n".to_string(),
        "| Nr. | Schweregrad | Ort/Bereich | Beschreibung / Maßnahme | Verantwortlich | Frist |"
            .to_string(),
        "|---:|---|---|---|---|---|".to_string(),
    ];

    for defect in defects {
        let cells = defect
            .fields()
            .map(|field| if field.is_empty() { EMPTY_CELL } else { field });
        lines.push(format!("| {} | {} |", defect.number, cells.join(" | ")));
    }

    if defects.is_empty() {
        lines.push(format!("|{}", format!(" {EMPTY_CELL} |").repeat(6)));
    }

    lines.join("\n")
}

/// Renders the to-do list as `;`-separated CSV with a header row.
pub fn todos_csv(defects: &[Defect]) -> String {
    let mut out = csv_record(CSV_HEADER.iter().map(|s| (*s).to_string()));
    for defect in defects {
        let number = defect.number.to_string();
        out.push_str(&csv_record(
            std::iter::once(number).chain(defect.fields().map(str::to_string)),
        ));
    }
    out
}

fn csv_record(fields: impl Iterator<Item = String>) -> String {
    let mut record = fields.map(|f| csv_field(&f)).collect::<Vec<_>>().join(";");
    record.push_str("\r\n");
    record
}

fn csv_field(field: &str) -> String {
    if field.contains([';', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
