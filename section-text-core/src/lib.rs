//! Generic parsing primitives for section-delimited text exports.
//!
//! Several browser add-ons dump their settings as plain text where a
//! `[name]` line opens a section and every other line is a data line
//! belonging to the current section. This crate provides the format-agnostic
//! pieces: a line scanner that classifies such a file into directives, and a
//! set-backed map for accumulating parsed entries per section. Everything
//! add-on specific lives in higher-level crates.

pub mod map;
pub mod scanner;

pub use map::SectionMap;
pub use scanner::{scan, scan_file, Directive, ScanError};
