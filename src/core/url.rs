//! URL normalization and query encoding.
//!
//! - `normalize_url`: http(s) URLs get lowercased scheme/host, collapsed
//!   dot segments and no trailing slash; other schemes pass through verbatim
//! - `join_base`: append an output path to the site base URL
//! - `encode_component`: percent-encode a query value

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in query values (same set as `encodeURIComponent`).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Normalize an absolute http(s) URL.
///
/// Unparseable input and non-http schemes (`mailto:`, `data:`, ...) are
/// opaque and returned unchanged.
///
/// # Examples
/// ```
/// use assetref::core::normalize_url;
/// assert_eq!(normalize_url("http://x.com/"), "http://x.com");
/// assert_eq!(normalize_url("HTTPS://X.com/a/./b/../c/"), "https://x.com/a/c");
/// assert_eq!(normalize_url("mailto:Me@X.com"), "mailto:Me@X.com");
/// ```
pub fn normalize_url(raw: &str) -> String {
    let Ok(parsed) = url::Url::parse(raw) else {
        return raw.to_string();
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return raw.to_string();
    }

    let serialized = parsed.as_str();
    if parsed.query().is_none() && parsed.fragment().is_none() {
        serialized.strip_suffix('/').unwrap_or(serialized).to_string()
    } else {
        serialized.to_string()
    }
}

/// Join an output path onto the base URL and normalize the result.
pub fn join_base(base_url: &str, path: &str) -> String {
    normalize_url(&join_raw(base_url, path))
}

/// Join without normalization (used when the path carries a revv token).
pub fn join_raw(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Percent-encode a query value.
#[inline]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize_url("http://x.com/"), "http://x.com");
        assert_eq!(normalize_url("http://x.com"), "http://x.com");
        assert_eq!(normalize_url("https://x.com/blog/"), "https://x.com/blog");
    }

    #[test]
    fn test_normalize_lowercases_scheme_and_host() {
        assert_eq!(
            normalize_url("HTTPS://Example.COM/Path/File.PNG"),
            "https://example.com/Path/File.PNG"
        );
    }

    #[test]
    fn test_normalize_collapses_dot_segments() {
        assert_eq!(normalize_url("http://x.com/a/./b/../c.png"), "http://x.com/a/c.png");
    }

    #[test]
    fn test_normalize_keeps_query_verbatim() {
        assert_eq!(normalize_url("http://x.com/?a=1"), "http://x.com/?a=1");
        assert_eq!(normalize_url("http://x.com/p/#top"), "http://x.com/p/#top");
    }

    #[test]
    fn test_normalize_opaque_schemes() {
        assert_eq!(normalize_url("data:image/png;base64,AAA="), "data:image/png;base64,AAA=");
        assert_eq!(normalize_url("ftp://X.com/"), "ftp://X.com/");
        assert_eq!(normalize_url("not a url"), "not a url");
    }

    #[test]
    fn test_join_base() {
        assert_eq!(
            join_base("http://localhost:5277", "blog/a.png"),
            "http://localhost:5277/blog/a.png"
        );
        assert_eq!(join_base("https://x.com/", "/a.png"), "https://x.com/a.png");
        assert_eq!(join_base("https://x.com", ""), "https://x.com");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(
            encode_component("https://x.com/a b.png?x=1&y=2"),
            "https%3A%2F%2Fx.com%2Fa%20b.png%3Fx%3D1%26y%3D2"
        );
        assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
    }
}
