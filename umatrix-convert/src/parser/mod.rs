//! Add-on export parsers.
//!
//! Exactly three formats exist and no plugin extensibility is wanted, so the
//! parsers are a closed set behind one small contract: populate from a file,
//! then answer section lookups. A parser instance is single-use — one
//! [`ConfigParser::read_file`] call fills it and nothing mutates it
//! afterwards.

mod noscript;
mod permissions;
mod request_policy;

pub use noscript::NoScriptParser;
pub use permissions::{
    FirefoxPermissionsParser, PermissionSource, SqlitePermissions, ALLOW_SECTION, BLOCK_SECTION,
};
pub use request_policy::RequestPolicyParser;

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::error::ConvertError;

/// Section for data lines seen before any `[section]` header.
pub const DEFAULT_SECTION: &str = "UKN";

/// A single parsed entry within a section.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// A bare hostname.
    Host(String),
    /// An origin paired with a destination (RequestPolicy exports).
    Pair { origin: String, destination: String },
}

impl Entry {
    pub fn host(value: impl Into<String>) -> Self {
        Self::Host(value.into())
    }

    pub fn pair(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::Pair {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Common contract implemented by every export parser.
pub trait ConfigParser {
    /// Consume the input at `path` completely, accumulating entries per
    /// section. Fails with [`ConvertError::UnreadableInput`] if the source
    /// cannot be opened and [`ConvertError::MalformedInput`] if its structure
    /// is unrecoverable; an input that merely yields no entries is not an
    /// error.
    fn read_file(&mut self, path: &Path) -> Result<(), ConvertError>;

    /// Names of all populated sections.
    fn sections(&self) -> Vec<&str>;

    /// Entries of the named section; an empty set if it never appeared.
    fn section(&self, name: &str) -> &BTreeSet<Entry>;
}
