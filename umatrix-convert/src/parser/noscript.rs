use std::collections::BTreeSet;
use std::path::Path;

use section_text_core::{scan_file, Directive, SectionMap};

use crate::error::ConvertError;
use crate::host::normalize_host;
use crate::parser::{ConfigParser, Entry, DEFAULT_SECTION};

/// Parser for NoScript whitelist exports.
///
/// Trusted hosts appear before any header and land in [`DEFAULT_SECTION`];
/// distrusted hosts appear under `[UNTRUSTED]`. Every data line is reduced
/// to a bare hostname; lines that cannot be reduced (`about:blank` style
/// values, ports, blanks) are dropped silently.
#[derive(Debug, Default)]
pub struct NoScriptParser {
    content: SectionMap<Entry>,
}

impl NoScriptParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigParser for NoScriptParser {
    fn read_file(&mut self, path: &Path) -> Result<(), ConvertError> {
        let directives = scan_file(path).map_err(|err| ConvertError::from_scan(path, err))?;

        let mut section = DEFAULT_SECTION.to_string();
        for directive in directives {
            match directive {
                Directive::Header(name) => section = name,
                Directive::Data(line) => {
                    if let Some(host) = normalize_host(&line) {
                        self.content.insert(&section, Entry::host(host));
                    }
                }
            }
        }

        Ok(())
    }

    fn sections(&self) -> Vec<&str> {
        self.content.sections()
    }

    fn section(&self, name: &str) -> &BTreeSet<Entry> {
        self.content.section(name)
    }
}

#[cfg(test)]
mod tests {
    use super::NoScriptParser;
    use crate::parser::{ConfigParser, Entry, DEFAULT_SECTION};
    use std::fs;

    const EXPORT: &str = "\
trusted.example
https://other.example/some/page
about:blank
chrome:
[UNTRUSTED]
http://evil.example
tracker.example
";

    fn parse(content: &str) -> NoScriptParser {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("noscript-whitelist.txt");
        fs::write(&path, content).expect("write export");

        let mut parser = NoScriptParser::new();
        parser.read_file(&path).expect("read export");
        parser
    }

    #[test]
    fn hosts_are_normalized_and_unparsable_values_dropped() {
        let parser = parse(EXPORT);

        assert_eq!(
            parser.section(DEFAULT_SECTION).iter().collect::<Vec<_>>(),
            vec![
                &Entry::host("other.example"),
                &Entry::host("trusted.example"),
            ]
        );
        assert_eq!(
            parser.section("UNTRUSTED").iter().collect::<Vec<_>>(),
            vec![&Entry::host("evil.example"), &Entry::host("tracker.example")]
        );
    }

    #[test]
    fn export_without_headers_accumulates_under_default_section() {
        let parser = parse("one.example\ntwo.example\n");

        assert_eq!(parser.sections(), vec![DEFAULT_SECTION]);
        assert_eq!(parser.section(DEFAULT_SECTION).len(), 2);
    }

    #[test]
    fn blank_lines_do_not_become_entries() {
        let parser = parse("\n\nhost.example\n\n");
        assert_eq!(parser.section(DEFAULT_SECTION).len(), 1);
    }
}
