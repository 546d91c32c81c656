//! Target classification.

/// Syntactic classification of an author-written asset reference.
///
/// Classification is a pure function of the string: no normalization,
/// no filesystem access, case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// Absolute URL with a scheme (https://, mailto:, data:, etc.)
    RemoteUrl(&'a str),
    /// Output-root-relative path (/about, /assets/logo.png).
    RootRelative(&'a str),
    /// Page-relative path (./image.png, ../other, image.png, or empty).
    FileRelative(&'a str),
}

impl<'a> Target<'a> {
    /// Classify a target string into its syntactic kind.
    #[inline]
    pub fn classify(target: &'a str) -> Self {
        if is_url(target) {
            Self::RemoteUrl(target)
        } else if is_from_root(target) {
            Self::RootRelative(target)
        } else {
            Self::FileRelative(target)
        }
    }

    /// The raw string as written.
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        match self {
            Self::RemoteUrl(s) | Self::RootRelative(s) | Self::FileRelative(s) => s,
        }
    }

    /// Whether the target lives in the output tree.
    #[inline]
    pub const fn is_local(&self) -> bool {
        !matches!(self, Self::RemoteUrl(_))
    }
}

/// Check if a target parses as an absolute URL with a scheme.
///
/// Bare domains (`example.com`) and protocol-relative references
/// (`//cdn.example.com/x`) have no scheme and are not URLs.
///
/// # Examples
/// ```
/// use assetref::core::is_url;
/// assert!(is_url("https://example.com"));
/// assert!(is_url("mailto:user@example.com"));
/// assert!(!is_url("example.com"));
/// assert!(!is_url("/about"));
/// ```
#[inline]
pub fn is_url(target: &str) -> bool {
    has_scheme(target) && url::Url::parse(target).is_ok()
}

/// Check if a target is output-root-relative (starts with `/`).
#[inline]
pub fn is_from_root(target: &str) -> bool {
    target.starts_with('/')
}

/// Cheap pre-check: at least one scheme character before a colon.
#[inline]
fn has_scheme(target: &str) -> bool {
    target.find(':').is_some_and(|pos| {
        pos > 0
            && target[..pos].starts_with(|c: char| c.is_ascii_alphabetic())
            && target[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
