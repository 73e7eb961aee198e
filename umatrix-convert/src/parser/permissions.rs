use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use section_text_core::SectionMap;

use crate::error::ConvertError;
use crate::host::normalize_host;
use crate::parser::{ConfigParser, Entry};

/// Cookie permission codes stored by Firefox in `moz_perms`.
const PERMISSION_ALLOW: i64 = 1;
const PERMISSION_BLOCK: i64 = 2;
const PERMISSION_ALLOW_SESSION: i64 = 8;

/// Section holding origins whose cookies are allowed.
pub const ALLOW_SECTION: &str = "allow";
/// Section holding origins whose cookies are blocked.
pub const BLOCK_SECTION: &str = "block";

/// Narrow row-source capability for the permissions format: cookie-type
/// permission rows as `(origin, permission-code)` tuples. The parser depends
/// on nothing else about the backing store.
pub trait PermissionSource {
    fn cookie_permissions(&mut self) -> Result<Vec<(String, i64)>, ConvertError>;
}

/// Row source backed by a Firefox `permissions.sqlite` database.
pub struct SqlitePermissions {
    path: PathBuf,
}

impl SqlitePermissions {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl PermissionSource for SqlitePermissions {
    fn cookie_permissions(&mut self) -> Result<Vec<(String, i64)>, ConvertError> {
        // Read-only open: a missing path must fail instead of silently
        // creating an empty database.
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|err| ConvertError::unreadable(&self.path, err))?;

        let mut stmt = conn
            .prepare("SELECT origin, permission FROM moz_perms WHERE type = 'cookie'")
            .map_err(|err| ConvertError::unreadable(&self.path, err))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))
            .map_err(|err| ConvertError::unreadable(&self.path, err))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ConvertError::unreadable(&self.path, err))?;

        Ok(rows)
    }
}

/// Parser for Firefox cookie permissions as exported by Cookie Monster.
///
/// Cookie Monster is a thin wrapper over Firefox's own permission store, so
/// the "export" is the `permissions.sqlite` database itself. Rows are
/// classified into [`ALLOW_SECTION`] and [`BLOCK_SECTION`] by permission
/// code; allow-for-session has no counterpart in uMatrix rules and is folded
/// into block. Unknown codes and origins that yield no hostname are skipped.
#[derive(Debug, Default)]
pub struct FirefoxPermissionsParser {
    content: SectionMap<Entry>,
}

impl FirefoxPermissionsParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify already-projected permission rows.
    pub fn read_rows<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = (String, i64)>,
    {
        for (origin, permission) in rows {
            let Some(host) = normalize_host(&origin) else {
                continue;
            };
            match permission {
                PERMISSION_ALLOW => self.content.insert(ALLOW_SECTION, Entry::host(host)),
                PERMISSION_BLOCK | PERMISSION_ALLOW_SESSION => {
                    self.content.insert(BLOCK_SECTION, Entry::host(host));
                }
                _ => {}
            }
        }
    }

    /// Populate from any row source.
    pub fn read_source(&mut self, source: &mut dyn PermissionSource) -> Result<(), ConvertError> {
        let rows = source.cookie_permissions()?;
        self.read_rows(rows);
        Ok(())
    }
}

impl ConfigParser for FirefoxPermissionsParser {
    fn read_file(&mut self, path: &Path) -> Result<(), ConvertError> {
        let mut source = SqlitePermissions::new(path);
        self.read_source(&mut source)
    }

    fn sections(&self) -> Vec<&str> {
        self.content.sections()
    }

    fn section(&self, name: &str) -> &BTreeSet<Entry> {
        self.content.section(name)
    }
}
