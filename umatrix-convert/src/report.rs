use colored::Colorize;

use crate::dispatch::ConversionOutcome;
use crate::inspect::InspectReport;
use crate::parser::Entry;

/// Render one conversion outcome for terminal output.
///
/// Zero written rules is a valid outcome but usually means the wrong file
/// was supplied, so it renders as a warning color rather than a success.
pub fn render_outcome(outcome: &ConversionOutcome) -> String {
    let line = format!(
        "{}: {} rule{} appended",
        outcome.format,
        outcome.rules_written,
        if outcome.rules_written == 1 { "" } else { "s" }
    );
    if outcome.rules_written == 0 {
        line.yellow().to_string()
    } else {
        line.green().to_string()
    }
}

/// Render a failed input for terminal output.
pub fn render_failure(format: &str, error: &str) -> String {
    format!("{format}: {error}").red().to_string()
}

/// Render an inspect report for terminal output.
pub fn render_inspect(report: &InspectReport, verbose: bool) -> String {
    let mut out = Vec::new();
    out.push(format!("format={}", report.format));

    if report.sections.is_empty() {
        out.push("(no sections)".to_string());
    }
    for section in &report.sections {
        out.push(format!(
            "- [{}] {} entr{}",
            section.name,
            section.entries,
            if section.entries == 1 { "y" } else { "ies" }
        ));
        if verbose {
            for entry in &section.content {
                out.push(format!("  {}", render_entry(entry)));
            }
        }
    }

    out.join("\n")
}

fn render_entry(entry: &Entry) -> String {
    match entry {
        Entry::Host(host) => host.clone(),
        Entry::Pair {
            origin,
            destination,
        } => format!("{origin} -> {destination}"),
    }
}
