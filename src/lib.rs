//! assetref - asset-reference resolution for static site generators.
//!
//! Turns an author-written reference (image, stylesheet, page, remote URL)
//! into the string to emit for the page being rendered, accounting for:
//! - local vs remote targets
//! - development preview vs production deployment
//! - the nesting depth of the emitting page
//! - deferred content hashing ("revving") via `{revv: ...}` placeholders
//!
//! # Example
//!
//! ```
//! use assetref::{BuildContext, BuildMode, PendingRevvs, Resolver};
//!
//! let ctx = BuildContext::new(BuildMode::Production, "https://example.com");
//! let pending = PendingRevvs::new();
//! let resolver = Resolver::new(&ctx, &pending);
//!
//! assert_eq!(resolver.revv("/site.css", "blog/index.html"), "{revv: /site.css}");
//! assert_eq!(resolver.link("/about/", "blog/index.html"), "../about/");
//! assert!(pending.contains("site.css"));
//! ```

pub mod logger;

pub mod config;
pub mod core;
pub mod image;
pub mod resolve;
pub mod revv;
mod theme;

pub use config::{BuildContext, BuildMode, ConfigError, ServiceEndpoints, SiteConfig};
pub use self::core::Target;
pub use image::{ImageOptions, LazyloadResult, OptionValue};
pub use resolve::Resolver;
pub use revv::{AssetRef, PendingRevvs, RevvRegistry, RevvToken};
