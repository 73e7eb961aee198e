use once_cell::sync::Lazy;
use regex::Regex;

/// Optional scheme prefix followed by a colon-free remainder.
static HOST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:https?://)?([^:]*)$").expect("host pattern is valid"));

/// Reduce an exported origin to a bare hostname.
///
/// Strips an optional `http://` or `https://` prefix, then everything from
/// the first `/` on. Values that still contain a `:` after prefix stripping
/// (a port, or a non-host scheme such as `about:blank`) cannot be reduced to
/// a hostname and yield `None`, as do values that reduce to nothing.
pub fn normalize_host(raw: &str) -> Option<String> {
    let caps = HOST_PATTERN.captures(raw)?;
    let stripped = caps.get(1).map(|m| m.as_str())?;
    let host = stripped.split('/').next().unwrap_or("");
    if host.is_empty() {
        return None;
    }
    Some(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::normalize_host;

    #[test]
    fn protocol_and_path_variants_normalize_to_the_same_host() {
        for raw in ["http://h.example/path", "https://h.example/path", "h.example"] {
            assert_eq!(normalize_host(raw).as_deref(), Some("h.example"), "{raw}");
        }
    }

    #[test]
    fn ports_and_non_host_schemes_are_rejected() {
        assert_eq!(normalize_host("h.example:8080"), None);
        assert_eq!(normalize_host("https://h.example:8080"), None);
        assert_eq!(normalize_host("about:blank"), None);
    }

    #[test]
    fn empty_values_are_rejected() {
        assert_eq!(normalize_host(""), None);
        assert_eq!(normalize_host("https://"), None);
        assert_eq!(normalize_host("/just/a/path"), None);
    }

    #[test]
    fn bare_hosts_pass_through() {
        assert_eq!(
            normalize_host("cdn.example.net").as_deref(),
            Some("cdn.example.net")
        );
    }
}
