//! Delivery through the remote image-transformation proxy.

use super::ImageOptions;
use crate::core::{Target, encode_component, relative_from_file};
use crate::resolve::Resolver;
use crate::revv::encode_component_keeping_tokens;

impl Resolver<'_> {
    /// Image URL for `target`, proxied with `options` where appropriate.
    ///
    /// Remote targets are always proxied. Local targets stay page-relative
    /// in development and go through the proxy via their revved absolute
    /// URL in production.
    pub fn proxied(&self, target: &str, anchor: &str, options: &ImageOptions) -> String {
        match Target::classify(target) {
            Target::RemoteUrl(url) => self.proxy_url(url, options),
            Target::RootRelative(_) | Target::FileRelative(_) if !self.ctx().is_production() => {
                relative_from_file(target, anchor)
            }
            Target::RootRelative(_) | Target::FileRelative(_) => {
                self.proxy_url(&self.remote_url(target, anchor), options)
            }
        }
    }

    /// `<proxy>?url=<source>&<sorted options>` for an absolute source URL.
    pub(crate) fn proxy_url(&self, source: &str, options: &ImageOptions) -> String {
        let mut query = format!("url={}", encode_component_keeping_tokens(source));
        for (key, value) in options.query_pairs() {
            query.push('&');
            query.push_str(key);
            if let Some(value) = value {
                query.push('=');
                query.push_str(&encode_component(&value));
            }
        }
        format!("{}?{query}", self.ctx().services().image_proxy)
    }
}
