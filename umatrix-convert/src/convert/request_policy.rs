use std::path::Path;

use crate::error::ConvertError;
use crate::parser::{ConfigParser, Entry, RequestPolicyParser};
use crate::rules::{HostPattern, RequestType, RuleAction, RuleAppender, RuleLine};

const PAIRS_SECTION: &str = "origins-to-destinations";
const DESTINATIONS_SECTION: &str = "destinations";
const ORIGINS_SECTION: &str = "origins";

/// Convert a populated [`RequestPolicyParser`] to uMatrix rules.
///
/// Every rule is `allow`: the export is a whitelist, and anything not listed
/// stays blocked by uMatrix's default policy, so no explicit `block` line is
/// ever emitted. Sections are walked pairs, then destinations, then origins.
///
/// Basic mode emits one wildcard-type rule per entry. Advanced mode narrows
/// pairs to `xhr` and `script` and destinations to `xhr`, and emits nothing
/// at all for bare origins: an `origin * ...` rule is considered too broad
/// to be expressed safely there.
pub fn request_policy_converter(
    parser: &RequestPolicyParser,
    output: &Path,
    advanced: bool,
) -> Result<usize, ConvertError> {
    let mut rules = RuleAppender::open(output)?;

    for entry in parser.section(PAIRS_SECTION) {
        let Entry::Pair {
            origin,
            destination,
        } = entry
        else {
            continue;
        };

        if advanced {
            for request in [RequestType::Xhr, RequestType::Script] {
                rules.append(&RuleLine::new(
                    HostPattern::host(origin),
                    HostPattern::host(destination),
                    request,
                    RuleAction::Allow,
                ))?;
            }
        } else {
            rules.append(&RuleLine::new(
                HostPattern::host(origin),
                HostPattern::host(destination),
                RequestType::Any,
                RuleAction::Allow,
            ))?;
        }
    }

    for entry in parser.section(DESTINATIONS_SECTION) {
        let Entry::Host(destination) = entry else {
            continue;
        };

        let request = if advanced {
            RequestType::Xhr
        } else {
            RequestType::Any
        };
        rules.append(&RuleLine::new(
            HostPattern::Any,
            HostPattern::host(destination),
            request,
            RuleAction::Allow,
        ))?;
    }

    if !advanced {
        for entry in parser.section(ORIGINS_SECTION) {
            let Entry::Host(origin) = entry else {
                continue;
            };

            rules.append(&RuleLine::new(
                HostPattern::host(origin),
                HostPattern::Any,
                RequestType::Any,
                RuleAction::Allow,
            ))?;
        }
    }

    rules.finish()
}
