use std::path::Path;

use crate::error::ConvertError;
use crate::parser::{ConfigParser, Entry, NoScriptParser, DEFAULT_SECTION};
use crate::rules::{HostPattern, RequestType, RuleAction, RuleAppender, RuleLine};

const UNTRUSTED_SECTION: &str = "UNTRUSTED";

/// Convert a populated [`NoScriptParser`] to uMatrix rules.
///
/// NoScript only governs script execution, so every emitted rule uses the
/// `script` type. Default-trusted hosts become self-referential allow rules
/// (trust is scoped to scripts a host loads from itself); `[UNTRUSTED]`
/// hosts are blocked as script destinations regardless of origin.
pub fn noscript_converter(parser: &NoScriptParser, output: &Path) -> Result<usize, ConvertError> {
    let mut rules = RuleAppender::open(output)?;

    for entry in parser.section(DEFAULT_SECTION) {
        let Entry::Host(host) = entry else {
            continue;
        };

        rules.append(&RuleLine::new(
            HostPattern::host(host),
            HostPattern::host(host),
            RequestType::Script,
            RuleAction::Allow,
        ))?;
    }

    for entry in parser.section(UNTRUSTED_SECTION) {
        let Entry::Host(host) = entry else {
            continue;
        };

        rules.append(&RuleLine::new(
            HostPattern::Any,
            HostPattern::host(host),
            RequestType::Script,
            RuleAction::Block,
        ))?;
    }

    rules.finish()
}
