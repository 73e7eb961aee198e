use std::path::Path;

use serde::Serialize;

use crate::dispatch::SourceFormat;
use crate::error::ConvertError;
use crate::parser::{
    ConfigParser, Entry, FirefoxPermissionsParser, NoScriptParser, RequestPolicyParser,
};

/// Sections and entries of one parsed export.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub format: SourceFormat,
    pub sections: Vec<SectionSummary>,
}

#[derive(Debug, Serialize)]
pub struct SectionSummary {
    pub name: String,
    pub entries: usize,
    pub content: Vec<Entry>,
}

/// Parse `input` as `format` and summarize what was found, without
/// generating any rule.
pub fn build_inspect_report(
    format: SourceFormat,
    input: &Path,
) -> Result<InspectReport, ConvertError> {
    let mut parser: Box<dyn ConfigParser> = match format {
        SourceFormat::RequestPolicy => Box::new(RequestPolicyParser::new()),
        SourceFormat::NoScript => Box::new(NoScriptParser::new()),
        SourceFormat::CookieMonster => Box::new(FirefoxPermissionsParser::new()),
    };
    parser.read_file(input)?;

    let sections = parser
        .sections()
        .into_iter()
        .map(|name| SectionSummary {
            name: name.to_string(),
            entries: parser.section(name).len(),
            content: parser.section(name).iter().cloned().collect(),
        })
        .collect();

    Ok(InspectReport { format, sections })
}
