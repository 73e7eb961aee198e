use std::fmt::{self, Display, Formatter};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Request types understood by uMatrix, plus the `*` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Any,
    Xhr,
    Frame,
    Cookie,
    Media,
    Image,
    Css,
    Script,
}

impl Display for RequestType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let token = match self {
            RequestType::Any => "*",
            RequestType::Xhr => "xhr",
            RequestType::Frame => "frame",
            RequestType::Cookie => "cookie",
            RequestType::Media => "media",
            RequestType::Image => "image",
            RequestType::Css => "css",
            RequestType::Script => "script",
        };
        write!(f, "{token}")
    }
}

/// Rule verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    Allow,
    Block,
}

impl Display for RuleAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let token = match self {
            RuleAction::Allow => "allow",
            RuleAction::Block => "block",
        };
        write!(f, "{token}")
    }
}

/// A hostname or the `*` wildcard on either side of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPattern {
    Any,
    Host(String),
}

impl HostPattern {
    pub fn host(value: impl Into<String>) -> Self {
        Self::Host(value.into())
    }
}

impl Display for HostPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HostPattern::Any => write!(f, "*"),
            HostPattern::Host(host) => write!(f, "{host}"),
        }
    }
}

/// One uMatrix rule line: `origin destination type action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine {
    pub origin: HostPattern,
    pub destination: HostPattern,
    pub request: RequestType,
    pub action: RuleAction,
}

impl RuleLine {
    pub fn new(
        origin: HostPattern,
        destination: HostPattern,
        request: RequestType,
        action: RuleAction,
    ) -> Self {
        Self {
            origin,
            destination,
            request,
            action,
        }
    }
}

impl Display for RuleLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.origin, self.destination, self.request, self.action
        )
    }
}

/// Append-mode writer for the shared rules artifact.
///
/// Each converter call opens its own appender and closes it when done, so a
/// failing conversion cannot corrupt lines a previous conversion already
/// wrote to the same file. The file handle is released on drop even when a
/// write fails midway.
pub struct RuleAppender {
    writer: BufWriter<File>,
    path: PathBuf,
    written: usize,
}

impl RuleAppender {
    /// Open `path` for appending, creating the file if needed.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ConvertError::output(path, source))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            written: 0,
        })
    }

    /// Append one newline-terminated rule.
    pub fn append(&mut self, rule: &RuleLine) -> Result<(), ConvertError> {
        writeln!(self.writer, "{rule}")
            .map_err(|source| ConvertError::output(&self.path, source))?;
        self.written += 1;
        Ok(())
    }

    /// Flush and close, returning how many rules were appended.
    pub fn finish(mut self) -> Result<usize, ConvertError> {
        self.writer
            .flush()
            .map_err(|source| ConvertError::output(&self.path, source))?;
        Ok(self.written)
    }
}
