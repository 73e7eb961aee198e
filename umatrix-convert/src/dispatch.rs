use std::fmt::{self, Display, Formatter};
use std::path::Path;

use serde::Serialize;

use crate::convert::{cookie_monster_converter, noscript_converter, request_policy_converter};
use crate::error::ConvertError;
use crate::parser::{
    ConfigParser, FirefoxPermissionsParser, NoScriptParser, RequestPolicyParser,
};

/// The three supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    RequestPolicy,
    #[serde(rename = "noscript")]
    NoScript,
    CookieMonster,
}

impl SourceFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceFormat::RequestPolicy => "request-policy",
            SourceFormat::NoScript => "noscript",
            SourceFormat::CookieMonster => "cookie-monster",
        }
    }
}

impl Display for SourceFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one input's conversion.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConversionOutcome {
    pub format: SourceFormat,
    pub rules_written: usize,
}

/// Parse one export and append its rules to `output`.
///
/// A fresh parser is constructed per call and discarded afterwards;
/// `advanced` only affects the RequestPolicy converter. Nothing is appended
/// for an input that fails to parse, and the returned outcome carries the
/// appended line count so callers can tell a clean parse that produced zero
/// rules apart from a failure.
pub fn parse_and_convert(
    format: SourceFormat,
    input: &Path,
    output: &Path,
    advanced: bool,
) -> Result<ConversionOutcome, ConvertError> {
    let rules_written = match format {
        SourceFormat::RequestPolicy => {
            let mut parser = RequestPolicyParser::new();
            parser.read_file(input)?;
            request_policy_converter(&parser, output, advanced)?
        }
        SourceFormat::NoScript => {
            let mut parser = NoScriptParser::new();
            parser.read_file(input)?;
            noscript_converter(&parser, output)?
        }
        SourceFormat::CookieMonster => {
            let mut parser = FirefoxPermissionsParser::new();
            parser.read_file(input)?;
            cookie_monster_converter(&parser, output)?
        }
    };

    Ok(ConversionOutcome {
        format,
        rules_written,
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_and_convert, SourceFormat};
    use crate::error::ConvertError;
    use std::collections::BTreeSet;
    use std::fs;

    #[test]
    fn sequential_conversions_append_to_one_artifact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let noscript = dir.path().join("noscript-whitelist.txt");
        fs::write(&noscript, "x.example\n").expect("write noscript export");
        let request_policy = dir.path().join("requestpolicy-settings.txt");
        fs::write(&request_policy, "[destinations]\nc.example\n").expect("write rp export");
        let output = dir.path().join("rules.txt");

        let first = parse_and_convert(SourceFormat::NoScript, &noscript, &output, false)
            .expect("noscript conversion");
        let second =
            parse_and_convert(SourceFormat::RequestPolicy, &request_policy, &output, false)
                .expect("request policy conversion");

        assert_eq!(first.rules_written, 1);
        assert_eq!(second.rules_written, 1);
        let lines: BTreeSet<String> = fs::read_to_string(&output)
            .expect("read rules")
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(
            lines,
            BTreeSet::from([
                "x.example x.example script allow".to_string(),
                "* c.example * allow".to_string(),
            ])
        );
    }

    #[test]
    fn failed_input_appends_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("rules.txt");

        let err = parse_and_convert(
            SourceFormat::NoScript,
            &dir.path().join("missing.txt"),
            &output,
            false,
        )
        .expect_err("missing input should fail");

        assert!(matches!(err, ConvertError::UnreadableInput { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn zero_rule_outcome_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("empty.txt");
        fs::write(&input, "").expect("write export");
        let output = dir.path().join("rules.txt");

        let outcome = parse_and_convert(SourceFormat::NoScript, &input, &output, false)
            .expect("empty export converts");

        assert_eq!(outcome.rules_written, 0);
    }
}
