//! Checklist table and photo blocks.

use super::sections::{clean_one_line, find_images, IssueSections};

/// Checklist categories of the inspection form, in form order.
pub const CHECKLIST_CATEGORIES: [&str; 9] = [
    "PSA & Zutritt",
    "Ordnung & Sauberkeit",
    "Verkehrswege & Absperrungen",
    "Erdarbeiten / Gräben / Wasserbau",
    "Gerüste & Leitern",
    "Krane & Hebezeuge / Anschlagmittel",
    "Maschinen & Geräte (inkl. Teleskopstapler)",
    "Elektrik & Beleuchtung",
    "Gefahrstoffe / Umweltschutz",
];

/// Cell text for an empty remark or defect field.
pub const EMPTY_CELL: &str = "–";

const LEGEND: &str = r"**Legende:** (\cellcolor{ok} OK) (\cellcolor{warn} Hinweis) (\cellcolor{fail} Mangel) (\cellcolor{na} n.\,a.)";

/// Heading of the remark field belonging to a category.
pub fn remark_header(category: &str) -> String {
    format!("{category} – Bemerkungen")
}

/// Heading of the photo field belonging to a category.
pub fn photo_header(category: &str) -> String {
    format!("{category} – Fotos/Nachweise")
}

/// Maps a status answer to a colored LaTeX table cell.
///
/// Unknown answers are kept as plain text.
pub fn status_cell(value: &str) -> String {
    match value.trim().to_lowercase().as_str() {
        "ok" | "i.o." | "io" => r"\cellcolor{ok}\textbf{OK}".to_string(),
        "hinweis" | "mittel" | "warnung" | "warn" => r"\cellcolor{warn} Hinweis".to_string(),
        "mangel" | "hoch" | "kritisch" => r"\cellcolor{fail}\textbf{Mangel}".to_string(),
        "na" | "n.a." | "nicht zutreffend" | "-" | "k.a." | "ka" | "keine angabe" => {
            r"\cellcolor{na} n.\,a.".to_string()
        }
        _ => clean_one_line(value),
    }
}

/// Builds the checklist section: legend, heading and status table.
pub fn build_checklist_table(sections: &IssueSections<'_>) -> String {
    let mut lines = vec![
        format!("{LEGEND}\n"),
        "### 1.1 Checkliste\n".to_string(),
        "| Kategorie | Status | Bemerkungen |".to_string(),
        "|---|---:|---|".to_string(),
    ];

    for category in CHECKLIST_CATEGORIES {
        let status = sections.grab_line(category);
        let remark = sections.grab_line(&remark_header(category));
        let remark = if remark.is_empty() {
            EMPTY_CELL.to_string()
        } else {
            remark
        };
        lines.push(format!("| {category} | {} | {remark} |", status_cell(&status)));
    }

    lines.join("\n")
}

/// Builds one photo block per category that has images attached.
///
/// Images are laid out two per line at half page width.
pub fn build_photo_blocks(sections: &IssueSections<'_>) -> String {
    let mut blocks = Vec::new();

    for category in CHECKLIST_CATEGORIES {
        let text = sections.grab(&photo_header(category));
        let images = find_images(&text);
        if images.is_empty() {
            continue;
        }

        blocks.push(format!("#### {category} – Fotos\n"));
        for pair in images.chunks(2) {
            blocks.push(
                pair.iter()
                    .map(|url| format!("![]({url}){{ width=48% }}"))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }
        blocks.push(String::new());
    }

    blocks.join("\n")
}
