//! Conversion of browser privacy add-on exports to uMatrix rules.
//!
//! RequestPolicy, NoScript and Cookie Monster each persist their
//! configuration in a different shape: a section-delimited whitelist of
//! origin/destination relationships, a section-delimited list of trusted and
//! untrusted script hosts, and a table of per-origin cookie permissions
//! inside Firefox's `permissions.sqlite`. uMatrix understands none of them.
//! This library parses each export and rewrites its facts as uMatrix rule
//! lines (`origin destination type action`), all appended to one shared
//! rules file.
//!
//! # Architecture
//!
//! - [`parser`] — the three format parsers behind the common
//!   [`parser::ConfigParser`] contract; each accumulates entries into a
//!   section map and is read-only after one `read_file` call
//! - [`host`] — shared origin-to-hostname normalization
//! - [`rules`] — the uMatrix rule model and the append-mode rule writer
//! - [`convert`] — one converter per format, walking sections in a fixed
//!   policy order
//! - [`dispatch`] — format selection and the `parse_and_convert` entry point
//! - [`inspect`] — section/entry reports for a single parsed export
//! - [`report`] — terminal rendering of outcomes and reports
//! - [`error`] — the input/output error taxonomy
//!
//! Conversions are synchronous and single-writer: every converter call opens
//! the output in append mode, writes its lines, and closes it again, so a
//! session can feed several exports into the same artifact one after the
//! other without a failing input corrupting lines already written.
//!
//! # Built on section-text-core
//!
//! The two text formats share the line/`[section]` scanning primitive from
//! `section-text-core`. All add-on-specific interpretation lives here.

pub mod convert;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod inspect;
pub mod parser;
pub mod report;
pub mod rules;
