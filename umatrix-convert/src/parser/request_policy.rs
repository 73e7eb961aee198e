use std::collections::BTreeSet;
use std::path::Path;

use section_text_core::{scan_file, Directive, SectionMap};

use crate::error::ConvertError;
use crate::parser::{ConfigParser, Entry, DEFAULT_SECTION};

/// Parser for RequestPolicy whitelist exports.
///
/// The export groups directives under `[origins-to-destinations]`,
/// `[destinations]` and `[origins]`. Within a section, a line containing the
/// `|` separator is an origin/destination pair; any other non-empty line is
/// a bare host. Lines before the first header land in [`DEFAULT_SECTION`].
#[derive(Debug, Default)]
pub struct RequestPolicyParser {
    content: SectionMap<Entry>,
}

impl RequestPolicyParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigParser for RequestPolicyParser {
    fn read_file(&mut self, path: &Path) -> Result<(), ConvertError> {
        let directives = scan_file(path).map_err(|err| ConvertError::from_scan(path, err))?;

        let mut section = DEFAULT_SECTION.to_string();
        for directive in directives {
            match directive {
                Directive::Header(name) => section = name,
                Directive::Data(line) => {
                    if line.is_empty() {
                        continue;
                    }
                    // Split at the first separator only; the pair is a 2-tuple.
                    let entry = match line.split_once('|') {
                        Some((origin, destination)) => Entry::pair(origin, destination),
                        None => Entry::host(line),
                    };
                    self.content.insert(&section, entry);
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
    use super::RequestPolicyParser;
    use crate::parser::{ConfigParser, Entry, DEFAULT_SECTION};
    use std::fs;

    const EXPORT: &str = "\
stray.example
[origins-to-destinations]
a.example|b.example
a.example|b.example
[destinations]
c.example

[origins]
d.example
";

    fn parse(content: &str) -> RequestPolicyParser {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("requestpolicy-settings.txt");
        fs::write(&path, content).expect("write export");

        let mut parser = RequestPolicyParser::new();
        parser.read_file(&path).expect("read export");
        parser
    }

    #[test]
    fn pairs_hosts_and_default_section_are_separated() {
        let parser = parse(EXPORT);

        assert_eq!(
            parser
                .section("origins-to-destinations")
                .iter()
                .collect::<Vec<_>>(),
            vec![&Entry::pair("a.example", "b.example")]
        );
        assert_eq!(
            parser.section("destinations").iter().collect::<Vec<_>>(),
            vec![&Entry::host("c.example")]
        );
        assert_eq!(
            parser.section("origins").iter().collect::<Vec<_>>(),
            vec![&Entry::host("d.example")]
        );
        assert_eq!(
            parser.section(DEFAULT_SECTION).iter().collect::<Vec<_>>(),
            vec![&Entry::host("stray.example")]
        );
    }

    #[test]
    fn duplicate_lines_collapse_into_one_entry() {
        let parser = parse(EXPORT);
        assert_eq!(parser.section("origins-to-destinations").len(), 1);
    }

    #[test]
    fn reparsing_the_same_file_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("export.txt");
        fs::write(&path, EXPORT).expect("write export");

        let mut parser = RequestPolicyParser::new();
        parser.read_file(&path).expect("first read");
        let first: Vec<Entry> = parser
            .section("origins-to-destinations")
            .iter()
            .cloned()
            .collect();

        parser.read_file(&path).expect("second read");
        let second: Vec<Entry> = parser
            .section("origins-to-destinations")
            .iter()
            .cloned()
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn extra_separators_split_at_the_first_one() {
        let parser = parse("[origins-to-destinations]\na.example|b.example|c.example\n");

        assert_eq!(
            parser
                .section("origins-to-destinations")
                .iter()
                .collect::<Vec<_>>(),
            vec![&Entry::pair("a.example", "b.example|c.example")]
        );
    }

    #[test]
    fn missing_file_is_unreadable() {
        let mut parser = RequestPolicyParser::new();
        let err = parser
            .read_file(std::path::Path::new("/nonexistent/export.txt"))
            .expect_err("missing file should fail");
        assert!(matches!(
            err,
            crate::error::ConvertError::UnreadableInput { .. }
        ));
    }

    #[test]
    fn binary_file_is_malformed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("export.bin");
        fs::write(&path, [0x00u8, 0xff, 0xfe, 0x01]).expect("write binary");

        let mut parser = RequestPolicyParser::new();
        let err = parser.read_file(&path).expect_err("binary should fail");
        assert!(matches!(
            err,
            crate::error::ConvertError::MalformedInput { .. }
        ));
    }
}
