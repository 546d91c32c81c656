//! Plain (never revved) links.

use super::Resolver;
use crate::core::{Target, normalize_url, relative_from_file};

impl Resolver<'_> {
    /// Link from `anchor` to `target`.
    ///
    /// Remote targets are normalized; local targets become page-relative,
    /// with `"."` standing in for a link to the anchor's own directory.
    pub fn link(&self, target: &str, anchor: &str) -> String {
        match Target::classify(target) {
            Target::RemoteUrl(url) => normalize_url(url),
            Target::RootRelative(_) | Target::FileRelative(_) => {
                let path = relative_from_file(target, anchor);
                if path.is_empty() { ".".to_string() } else { path }
            }
        }
    }
}
