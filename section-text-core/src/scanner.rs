use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Matches a whole line of the form `[section-name]`.
static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.*)\]$").expect("section header pattern is valid"));

/// Errors that can occur while scanning a section-delimited export.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Failed to read the input file.
    #[error("failed to read export file: {0}")]
    Io(#[from] std::io::Error),
    /// Input bytes were not valid UTF-8 text.
    #[error("export is not valid UTF-8 text: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// One line of a section-delimited export, classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Directive {
    /// A `[name]` header line opening a new section.
    Header(String),
    /// Any other line, verbatim, with the line terminator removed.
    Data(String),
}

/// Classify export bytes into one [`Directive`] per line.
///
/// Line terminators (`\n` or `\r\n`) are stripped; blank lines are kept as
/// empty [`Directive::Data`] entries so callers decide how to treat them.
pub fn scan(text: &[u8]) -> Result<Vec<Directive>, ScanError> {
    let text = std::str::from_utf8(text)?;
    Ok(text.lines().map(classify_line).collect())
}

/// Read and classify an export file.
pub fn scan_file(path: &Path) -> Result<Vec<Directive>, ScanError> {
    let bytes = fs::read(path)?;
    scan(&bytes)
}

fn classify_line(line: &str) -> Directive {
    match SECTION_HEADER.captures(line) {
        Some(caps) => Directive::Header(caps[1].to_string()),
        None => Directive::Data(line.to_string()),
    }
}
