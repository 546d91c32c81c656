//! Absolute production URLs.

use super::Resolver;
use crate::core::{Target, join_base, join_raw, normalize_url, relative_from_root};

/// Conventional root page used to anchor root-relative revving.
const ROOT_ANCHOR: &str = "index";

impl Resolver<'_> {
    /// Absolute URL for `target`, revved in production.
    ///
    /// Local targets are re-anchored at the output root; in production the
    /// path is revved from the root page so the token is root-relative.
    pub fn remote_url(&self, target: &str, anchor: &str) -> String {
        match Target::classify(target) {
            Target::RemoteUrl(url) => normalize_url(url),
            Target::RootRelative(_) | Target::FileRelative(_) => {
                let path_from_root = relative_from_root(target, anchor);
                let base = self.ctx().base_url();
                if self.ctx().is_production() {
                    let revved = self.revv(&format!("/{path_from_root}"), ROOT_ANCHOR);
                    join_raw(base, &revved)
                } else {
                    join_base(base, &path_from_root)
                }
            }
        }
    }

    /// Stable absolute URL of an output page. Never revved.
    ///
    /// Used for canonical and Open Graph URLs and screenshot targets.
    pub fn page_url(&self, output_path: &str) -> String {
        join_base(self.ctx().base_url(), output_path)
    }
}
