//! Terminal rendering of the sync status report
//!
//! Builds the whole report as a `String` so rendering stays pure and
//! testable; the binary writes it to stdout in one shot. The `colored`
//! crate suppresses escape codes automatically when stdout is not a
//! terminal, so piped output is plain text.

use colored::Colorize;

use crate::report::SyncReport;

/// Marker prefixing each component line
const ENTRY_MARKER: &str = "  - ";

/// Render the full status report: title, both component sections, and
/// the summary block.
#[must_use]
pub fn render_report(report: &SyncReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(
        "=== FORM COMPONENT DATABASE SYNC STATUS ==="
            .bold()
            .cyan()
            .to_string(),
    );
    lines.push(String::new());

    lines.push(
        "✅ UPDATED FORMS (Database Sync Implemented):"
            .green()
            .bold()
            .to_string(),
    );
    push_entries(&mut lines, &report.updated);

    lines.push(String::new());
    lines.push(
        format!(
            "⏳ REMAINING FORMS TO UPDATE ({}):",
            report.remaining_count()
        )
        .yellow()
        .bold()
        .to_string(),
    );
    push_entries(&mut lines, &report.remaining);

    lines.push(String::new());
    lines.push("📊 SUMMARY:".bold().to_string());
    lines.push(format!("  Total Forms: {}", report.total()));
    lines.push(format!("  Updated: {}", report.updated_count()));
    lines.push(format!("  Remaining: {}", report.remaining_count()));
    lines.push(format!(
        "  Progress: {} ({:.1}%)",
        report.progress_fraction(),
        report.progress_percent()
    ));

    lines.join("\n")
}

/// Append one marker-prefixed line per component name.
fn push_entries(lines: &mut Vec<String>, names: &[String]) {
    for name in names {
        lines.push(format!("{ENTRY_MARKER}{name}"));
    }
}
