//! Report rendering for check results.

use std::fmt::Write as _;

use console::style;

use crate::checker::{CheckReport, DocumentReport};
use crate::error::Result;

/// Render a check report as human-readable text.
///
/// One block per document, followed by a summary line.
#[must_use]
pub fn render_text(report: &CheckReport) -> String {
    let mut out = String::new();

    for document in &report.documents {
        write_document(&mut out, document);
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "Checked {} document(s), {} record(s): {} entries, {} parse failure(s), {} structural error(s)",
        report.documents.len(),
        report.records,
        report.entry_count(),
        report.parse_failure_count(),
        report.structural_error_count(),
    );

    if report.is_clean() {
        let _ = writeln!(out, "{}", style("All numbering is well-formed").green().bold());
    } else {
        let _ = writeln!(
            out,
            "{}",
            style(format!("Found {} error(s)", report.error_count()))
                .yellow()
                .bold()
        );
    }

    out
}

/// Render a check report as pretty-printed JSON.
pub fn render_json(report: &CheckReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Heading for a document block, e.g. `第2部分 GB/T 1 第2部分：编写 (ID: 7)`.
fn document_heading(document: &DocumentReport) -> String {
    let mut heading = String::new();

    if let Some(part) = document.part_number {
        let _ = write!(heading, "第{part}部分 ");
    }
    match &document.document_name {
        Some(name) => heading.push_str(name),
        None => heading.push_str("Document"),
    }
    let _ = write!(heading, " (ID: {})", document.document_id);

    heading
}

fn write_document(out: &mut String, document: &DocumentReport) {
    let _ = writeln!(
        out,
        "=== {} ===",
        style(document_heading(document)).bold()
    );

    if document.is_clean() {
        let _ = writeln!(
            out,
            "  {} numbering structure OK ({} entries)",
            style("✓").green(),
            document.entries
        );
        return;
    }

    let _ = writeln!(
        out,
        "  {} {} error(s):",
        style("⚠").yellow(),
        document.error_count()
    );
    for failure in &document.parse_failures {
        let _ = writeln!(out, "  - [{}] {}", failure.code(), failure);
    }
    for error in &document.structural_errors {
        let _ = writeln!(out, "  - [{}] {}", error.code(), error);
    }
}
