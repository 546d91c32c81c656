//! Progressive image loading: full image plus low-quality placeholder.

use serde::Serialize;

use super::ImageOptions;
use crate::core::Target;
use crate::resolve::Resolver;

/// URL pair for progressive loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LazyloadResult {
    pub full: String,
    pub placeholder: String,
}

impl Resolver<'_> {
    /// Full and placeholder URLs for `target`.
    ///
    /// `full == placeholder` when `options.disable` is set, or for local
    /// targets in development. Otherwise the placeholder is always built
    /// from the absolute (revved in production) address, so it resolves
    /// without a live preview server.
    pub fn lazyload(&self, target: &str, anchor: &str, options: &ImageOptions) -> LazyloadResult {
        let full = self.proxied(target, anchor, &options.transform());

        let local = Target::classify(target).is_local();
        if options.disable || (local && !self.ctx().is_production()) {
            return LazyloadResult {
                placeholder: full.clone(),
                full,
            };
        }

        let source = self.remote_url(target, anchor);
        let placeholder = self.proxy_url(&source, &options.placeholder_options());
        LazyloadResult { full, placeholder }
    }
}
