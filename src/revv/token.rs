//! Deferred-hash placeholder tokens.
//!
//! Grammar: `{revv: <path>}` in plain ASCII. The path carries a leading `/`
//! when the original reference was root-relative. There is no escaping, so
//! paths containing `}` cannot be revved.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::encode_component;

const OPEN: &str = "{revv: ";
const CLOSE: char = '}';

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{revv: ([^}]*)\}").expect("valid revv token regex"));

/// A pending content-hash substitution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevvToken {
    /// Path relative to the output root, without leading slash.
    path: String,
    /// Whether the hashed result is re-anchored at the output root.
    root_relative: bool,
}

impl RevvToken {
    /// Create a token for an output-root-relative path.
    pub fn new(path_from_root: impl Into<String>, root_relative: bool) -> Self {
        let path = path_from_root.into();
        let path = match path.strip_prefix('/') {
            Some(stripped) => stripped.to_string(),
            None => path,
        };
        Self {
            path,
            root_relative,
        }
    }

    /// Path relative to the output root, without leading slash.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub const fn is_root_relative(&self) -> bool {
        self.root_relative
    }

    /// Parse a complete token (`{revv: /a.css}`).
    pub fn parse(text: &str) -> Option<Self> {
        let inner = text.strip_prefix(OPEN)?.strip_suffix(CLOSE)?;
        if inner.contains(CLOSE) {
            return None;
        }
        Some(Self::from_inner(inner))
    }

    /// Iterate over every token embedded in `text`.
    pub fn scan(text: &str) -> impl Iterator<Item = Self> + '_ {
        TOKEN_RE
            .captures_iter(text)
            .map(|caps| Self::from_inner(&caps[1]))
    }

    /// Replace embedded tokens with the value returned by `resolve`.
    ///
    /// Tokens for which `resolve` returns `None` are left in place.
    pub fn rewrite<F>(text: &str, mut resolve: F) -> Cow<'_, str>
    where
        F: FnMut(&Self) -> Option<String>,
    {
        TOKEN_RE.replace_all(text, |caps: &Captures| {
            let token = Self::from_inner(&caps[1]);
            resolve(&token).unwrap_or_else(|| caps[0].to_string())
        })
    }

    fn from_inner(inner: &str) -> Self {
        match inner.strip_prefix('/') {
            Some(path) => Self::new(path, true),
            None => Self::new(inner, false),
        }
    }
}

impl fmt::Display for RevvToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slash = if self.root_relative { "/" } else { "" };
        write!(f, "{OPEN}{slash}{}{CLOSE}", self.path)
    }
}

/// Percent-encode a query value but keep embedded revv tokens verbatim,
/// so the resolution pass still finds them inside `url=` parameters.
pub fn encode_component_keeping_tokens(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last = 0;
    for token in TOKEN_RE.find_iter(value) {
        out.push_str(&encode_component(&value[last..token.start()]));
        out.push_str(token.as_str());
        last = token.end();
    }
    out.push_str(&encode_component(&value[last..]));
    out
}
