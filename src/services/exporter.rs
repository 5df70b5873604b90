//! Document exporter: serializes an assembled toolkit into a markdown
//! artifact with a fixed, deterministic layout.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{AppError, SalesToolkit};

const DOCUMENT_TITLE: &str = "Sales Toolkit";

/// Render the toolkit as a markdown document.
///
/// Layout: title and date header, each section under a bold label in
/// generation order, then the discovery questions as bullets. Empty sections
/// keep their label with no body; section text is emitted literally.
pub fn render(toolkit: &SalesToolkit, generated_on: NaiveDate) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", DOCUMENT_TITLE));
    out.push_str(&format!("_Generated on {}_\n", generated_on.format("%Y-%m-%d")));

    for section in &toolkit.sections {
        out.push_str(&format!("\n**{}**\n", section.label.title()));
        if !section.body.is_empty() {
            out.push_str(&format!("\n{}\n", section.body));
        }
    }

    out.push_str("\n**Discovery Questions**\n\n");
    for question in &toolkit.discovery_questions {
        out.push_str(&format!("- {}\n", question));
    }

    out
}

/// Write an already-rendered document to `path`.
///
/// Takes the rendered text rather than re-rendering, so the exported file is
/// byte-identical to what the caller displayed. An I/O failure here is an
/// export error only; the caller still holds the text.
pub fn export_to_file(document: &str, path: &Path) -> Result<(), AppError> {
    fs::write(path, document).map_err(|err| AppError::Export {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}
