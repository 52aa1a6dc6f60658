use url::Url;

/// Prepends `https://` unless the input already carries an `http://` or
/// `https://` scheme.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Parses the normalized form of `raw`, returning it when it is an absolute
/// URL with a host.
pub fn parse_link_url(raw: &str) -> Option<String> {
    let normalized = normalize_url(raw);
    let parsed = Url::parse(&normalized).ok()?;
    if parsed.host_str().is_none() {
        return None;
    }
    Some(normalized)
}

fn has_http_scheme(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::{normalize_url, parse_link_url};

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(
            normalize_url("  example.com/a?b=1 "),
            "https://example.com/a?b=1"
        );
    }

    #[test]
    fn existing_scheme_is_kept() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("HTTPS://Example.com"), "HTTPS://Example.com");
    }

    #[test]
    fn http_prefix_without_scheme_is_not_a_scheme() {
        assert_eq!(normalize_url("httpbin.org"), "https://httpbin.org");
    }

    #[test]
    fn rejects_unparseable_input() {
        assert_eq!(parse_link_url("not a url"), None);
        assert_eq!(parse_link_url("https://"), None);
        assert_eq!(
            parse_link_url("example.com").as_deref(),
            Some("https://example.com")
        );
    }
}
