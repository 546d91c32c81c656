//! Revving: the only bridge to the content-hashing pass.

use std::fmt;

use super::RevvToken;
use crate::core::{Target, relative_from_file, relative_from_root};
use crate::debug;
use crate::resolve::Resolver;

/// A reference as it will be written into output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    /// Emitted verbatim (dev mode, or a remote URL).
    Plain(String),
    /// Substituted by the hashing pass once every file exists.
    Revv(RevvToken),
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(path) => f.write_str(path),
            Self::Revv(token) => fmt::Display::fmt(token, f),
        }
    }
}

impl Resolver<'_> {
    /// Tagged form of [`revv`](Self::revv).
    ///
    /// Production registers the root-relative path with the hashing pass and
    /// returns a token; development returns the page-relative path.
    pub fn revv_ref(&self, target: &str, anchor: &str) -> AssetRef {
        let root_relative = match Target::classify(target) {
            Target::RemoteUrl(url) => return AssetRef::Plain(url.to_string()),
            Target::RootRelative(_) => true,
            Target::FileRelative(_) => false,
        };

        if !self.ctx().is_production() {
            return AssetRef::Plain(relative_from_file(target, anchor));
        }

        let path = relative_from_root(target, anchor);
        debug!("revv"; "pending {path}");
        self.registry().register(&path);
        AssetRef::Revv(RevvToken::new(path, root_relative))
    }

    /// Resolve `target` for emission, deferring the content hash in production.
    ///
    /// Never fails: a target that does not exist yields a token the hashing
    /// pass cannot satisfy.
    pub fn revv(&self, target: &str, anchor: &str) -> String {
        self.revv_ref(target, anchor).to_string()
    }
}
