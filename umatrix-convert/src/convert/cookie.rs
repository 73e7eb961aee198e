use std::path::Path;

use crate::error::ConvertError;
use crate::parser::{
    ConfigParser, Entry, FirefoxPermissionsParser, ALLOW_SECTION, BLOCK_SECTION,
};
use crate::rules::{HostPattern, RequestType, RuleAction, RuleAppender, RuleLine};

/// Convert a populated [`FirefoxPermissionsParser`] to uMatrix rules.
///
/// Each classified origin becomes a `host * cookie <action>` rule; the allow
/// block is written before the block block.
pub fn cookie_monster_converter(
    parser: &FirefoxPermissionsParser,
    output: &Path,
) -> Result<usize, ConvertError> {
    let mut rules = RuleAppender::open(output)?;

    for (section, action) in [
        (ALLOW_SECTION, RuleAction::Allow),
        (BLOCK_SECTION, RuleAction::Block),
    ] {
        for entry in parser.section(section) {
            let Entry::Host(host) = entry else {
                continue;
            };

            rules.append(&RuleLine::new(
                HostPattern::host(host),
                HostPattern::Any,
                RequestType::Cookie,
                action,
            ))?;
        }
    }

    rules.finish()
}
