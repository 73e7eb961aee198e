use std::fmt::Display;
use std::io;
use std::path::Path;

use section_text_core::ScanError;
use thiserror::Error;

/// Errors surfaced by parsers, converters and the dispatch entry point.
///
/// Anything softer than these (an unrecognized line, a host that fails
/// normalization, an unknown permission code, an empty section) is skipped
/// silently so partially odd exports still convert.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input path missing or unopenable; for the permissions format, also a
    /// database without a queryable table of the expected shape.
    #[error("unreadable input {path}: {reason}")]
    UnreadableInput { path: String, reason: String },
    /// Input structure is unrecoverable for the selected parser, e.g. binary
    /// bytes handed to a line-oriented format.
    #[error("malformed input {path}: {reason}")]
    MalformedInput { path: String, reason: String },
    /// Failed to open, append to, or flush the output rules file.
    #[error("failed to append rules to {path}: {source}")]
    OutputIo {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    pub(crate) fn unreadable(path: &Path, reason: impl Display) -> Self {
        Self::UnreadableInput {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn malformed(path: &Path, reason: impl Display) -> Self {
        Self::MalformedInput {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn output(path: &Path, source: io::Error) -> Self {
        Self::OutputIo {
            path: path.display().to_string(),
            source,
        }
    }

    /// Map a scan failure on `path` into the input taxonomy: I/O problems
    /// mean the file could not be read, decode problems mean it is not the
    /// text format the parser expects.
    pub(crate) fn from_scan(path: &Path, err: ScanError) -> Self {
        match err {
            ScanError::Io(source) => Self::unreadable(path, source),
            ScanError::Utf8(source) => Self::malformed(path, source),
        }
    }
}
