//! Read-only build context shared by every resolution call.

use std::path::{Path, PathBuf};

/// Output mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Local preview: no revving, no proxying of local files.
    #[default]
    Development,
    /// Published deployment: revv tokens and absolute URLs.
    Production,
}

impl BuildMode {
    #[inline]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[inline]
    pub const fn is_dev(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Third-party endpoints used for remote image delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    /// Image transformation proxy (`?url=...&w=...`).
    pub image_proxy: String,
    /// Page screenshot service.
    pub screenshot: String,
    /// Query key carrying the git revision on screenshot URLs.
    pub cache_bust_key: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            image_proxy: "https://images.weserv.nl/".into(),
            screenshot: "https://api.microlink.io/".into(),
            cache_bust_key: "v".into(),
        }
    }
}

/// Immutable per-session build context.
///
/// Constructed once at the start of a build or watch session (see
/// [`SiteConfig::into_context`](super::SiteConfig::into_context)) and
/// passed by reference into every resolution call.
#[derive(Debug, Clone)]
pub struct BuildContext {
    output_root: PathBuf,
    source_root: PathBuf,
    theme_root: Option<PathBuf>,
    mode: BuildMode,
    base_url: String,
    git_revision: String,
    services: ServiceEndpoints,
}

impl BuildContext {
    /// Create a context with the given mode and base URL.
    ///
    /// Roots default to the current directory; use the `with_*` builders.
    pub fn new(mode: BuildMode, base_url: impl Into<String>) -> Self {
        Self {
            output_root: PathBuf::new(),
            source_root: PathBuf::new(),
            theme_root: None,
            mode,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            git_revision: String::new(),
            services: ServiceEndpoints::default(),
        }
    }

    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = root.into();
        self
    }

    pub fn with_theme_root(mut self, root: Option<PathBuf>) -> Self {
        self.theme_root = root;
        self
    }

    pub fn with_git_revision(mut self, revision: impl Into<String>) -> Self {
        self.git_revision = revision.into();
        self
    }

    pub fn with_services(mut self, services: ServiceEndpoints) -> Self {
        self.services = services;
        self
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn theme_root(&self) -> Option<&Path> {
        self.theme_root.as_deref()
    }

    pub const fn mode(&self) -> BuildMode {
        self.mode
    }

    #[inline]
    pub const fn is_production(&self) -> bool {
        self.mode.is_production()
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Short commit id, empty when unknown.
    pub fn git_revision(&self) -> &str {
        &self.git_revision
    }

    pub fn services(&self) -> &ServiceEndpoints {
        &self.services
    }
}
