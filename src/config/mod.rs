//! Site configuration and the per-session [`BuildContext`].
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── context    # BuildContext, BuildMode, ServiceEndpoints
//! ├── error      # ConfigError
//! ├── git        # short HEAD revision
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                           |
//! |--------------|---------------------------------------------------|
//! | `[site]`     | Published site URL                                |
//! | `[build]`    | Source, output and theme directories              |
//! | `[serve]`    | Development server port (dev base URL)            |
//! | `[services]` | Image proxy and screenshot endpoints              |

mod context;
mod error;
pub mod git;

pub use context::{BuildContext, BuildMode, ServiceEndpoints};
pub use error::ConfigError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::debug;

// ============================================================================
// sections
// ============================================================================

/// `[site]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Published site URL (e.g., "https://example.com"). Required for production.
    pub url: Option<String>,
}

/// `[build]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Source directory (project tree).
    pub source: PathBuf,
    /// Output directory all pages are written under.
    pub output: PathBuf,
    /// Optional theme directory, lower precedence than `source`.
    pub theme: Option<PathBuf>,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            source: "src".into(),
            output: "public".into(),
            theme: None,
        }
    }
}

/// `[serve]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeSection {
    /// HTTP port of the local preview server.
    pub port: u16,
}

impl Default for ServeSection {
    fn default() -> Self {
        Self { port: 5277 }
    }
}

/// `[services]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesSection {
    pub image_proxy: String,
    pub screenshot: String,
    pub cache_bust_key: String,
}

impl Default for ServicesSection {
    fn default() -> Self {
        let defaults = ServiceEndpoints::default();
        Self {
            image_proxy: defaults.image_proxy,
            screenshot: defaults.screenshot,
            cache_bust_key: defaults.cache_bust_key,
        }
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub build: BuildSection,
    #[serde(default)]
    pub serve: ServeSection,
    #[serde(default)]
    pub services: ServicesSection,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Resolve the base URL for the given mode.
    ///
    /// Development serves from loopback; production needs `site.url`.
    pub fn base_url(&self, mode: BuildMode) -> Result<String, ConfigError> {
        match mode {
            BuildMode::Development => Ok(format!("http://localhost:{}", self.serve.port)),
            BuildMode::Production => {
                let url = self.site.url.as_deref().ok_or_else(|| {
                    ConfigError::Validation("[site] url is required for production builds".into())
                })?;
                let parsed = url::Url::parse(url).map_err(|err| {
                    ConfigError::Validation(format!("[site] url `{url}` is invalid: {err}"))
                })?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(ConfigError::Validation(format!(
                        "[site] url `{url}` must use http or https"
                    )));
                }
                Ok(url.trim_end_matches('/').to_string())
            }
        }
    }

    /// Build the immutable context, anchoring relative directories at `root`.
    pub fn into_context(
        self,
        root: &Path,
        mode: BuildMode,
        git_revision: impl Into<String>,
    ) -> Result<BuildContext, ConfigError> {
        let base_url = self.base_url(mode)?;
        debug!("config"; "base url {base_url}");

        let services = ServiceEndpoints {
            image_proxy: self.services.image_proxy,
            screenshot: self.services.screenshot,
            cache_bust_key: self.services.cache_bust_key,
        };

        Ok(BuildContext::new(mode, base_url)
            .with_source_root(root.join(self.build.source))
            .with_output_root(root.join(self.build.output))
            .with_theme_root(self.build.theme.map(|theme| root.join(theme)))
            .with_git_revision(git_revision)
            .with_services(services))
    }
}

impl BuildContext {
    /// Load the config file and build the context for one session.
    ///
    /// The project root is the config file's parent directory. A missing
    /// git repository is not an error: the revision is left empty.
    pub fn load(config_path: &Path, mode: BuildMode) -> Result<Self> {
        let config = SiteConfig::from_path(config_path)?;
        let root = config_path.parent().unwrap_or(Path::new("."));

        let revision = git::short_revision(root).unwrap_or_else(|err| {
            debug!("config"; "no git revision: {err:#}");
            String::new()
        });

        Ok(config.into_context(root, mode, revision)?)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.site.url, None);
        assert_eq!(config.build.source, PathBuf::from("src"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.theme, None);
        assert_eq!(config.serve.port, 5277);
        assert_eq!(config.services.image_proxy, "https://images.weserv.nl/");
    }

    #[test]
    fn test_full_config() {
        let config = SiteConfig::from_str(
            r#"
            [site]
            url = "https://example.com/"

            [build]
            source = "content"
            output = "dist"
            theme = "themes/base"

            [serve]
            port = 8080

            [services]
            image_proxy = "https://img.example.net/"
            cache_bust_key = "rev"
            "#,
        )
        .unwrap();

        let ctx = config
            .into_context(Path::new("/site"), BuildMode::Production, "abc1234")
            .unwrap();
        assert_eq!(ctx.base_url(), "https://example.com");
        assert_eq!(ctx.source_root(), Path::new("/site/content"));
        assert_eq!(ctx.output_root(), Path::new("/site/dist"));
        assert_eq!(ctx.theme_root(), Some(Path::new("/site/themes/base")));
        assert_eq!(ctx.git_revision(), "abc1234");
        assert_eq!(ctx.services().image_proxy, "https://img.example.net/");
        assert_eq!(ctx.services().screenshot, "https://api.microlink.io/");
        assert_eq!(ctx.services().cache_bust_key, "rev");
    }

    #[test]
    fn test_dev_base_url_uses_port() {
        let config =
            SiteConfig::from_str("[site]\nurl = \"https://example.com\"\n[serve]\nport = 3000")
                .unwrap();
        assert_eq!(
            config.base_url(BuildMode::Development).unwrap(),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_production_requires_site_url() {
        let config = SiteConfig::from_str("").unwrap();
        let err = config.base_url(BuildMode::Production).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_production_rejects_bad_url() {
        let config = SiteConfig::from_str("[site]\nurl = \"example.com\"").unwrap();
        assert!(config.base_url(BuildMode::Production).is_err());

        let config = SiteConfig::from_str("[site]\nurl = \"ftp://example.com\"").unwrap();
        assert!(config.base_url(BuildMode::Production).is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = SiteConfig::from_str("[serve]\nport = \"high\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[build]\noutput = \"out\"\n").unwrap();

        let ctx = BuildContext::load(&path, BuildMode::Development).unwrap();
        assert_eq!(ctx.output_root(), dir.path().join("out"));
        assert_eq!(ctx.base_url(), "http://localhost:5277");
        assert_eq!(ctx.git_revision(), "");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = BuildContext::load(&dir.path().join("nope.toml"), BuildMode::Development)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }
}
