//! Page screenshots from a third-party capture service.

use super::ImageOptions;
use crate::core::{Target, encode_component};
use crate::resolve::Resolver;

/// Rendered width of screenshot images.
const SCREENSHOT_WIDTH: u32 = 800;

impl Resolver<'_> {
    /// Proxied screenshot image of `target` (the anchor page when absent).
    ///
    /// Output paths are resolved with [`page_url`](Self::page_url); remote
    /// URLs are captured verbatim. The git revision rides along as a
    /// cache-bust parameter so the service re-captures after each deploy.
    pub fn screenshot(&self, target: Option<&str>, anchor: &str) -> String {
        let page = match target.filter(|t| !t.is_empty()).map(Target::classify) {
            Some(Target::RemoteUrl(url)) => url.to_string(),
            Some(Target::RootRelative(path) | Target::FileRelative(path)) => self.page_url(path),
            None => self.page_url(anchor),
        };

        let services = self.ctx().services();
        let mut service_url = format!(
            "{}?embed=screenshot.url&meta=false&screenshot=true&url={}",
            services.screenshot,
            encode_component(&page)
        );
        let revision = self.ctx().git_revision();
        if !revision.is_empty() {
            service_url.push_str(&format!(
                "&{}={}",
                services.cache_bust_key,
                encode_component(revision)
            ));
        }

        self.proxied(
            &service_url,
            anchor,
            &ImageOptions::default().with_width(SCREENSHOT_WIDTH),
        )
    }
}
