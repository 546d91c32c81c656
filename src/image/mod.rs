//! Image delivery helpers built on the resolver.
//!
//! - [`options`]: `ImageOptions` and the proxy query table
//! - `proxy`: `Resolver::proxied`
//! - `lazyload`: `Resolver::lazyload`
//! - `screenshot`: `Resolver::screenshot`
//!
//! Proxy query table (keys sorted in output):
//!
//! | Option      | Query            |
//! |-------------|------------------|
//! | `width`     | `w=<n>`          |
//! | `height`    | `h=<n>`          |
//! | `quality`   | `q=<n>`          |
//! | `blur`      | `blur` / `blur=<n>` |
//! | `grayscale` | `filt=greyscale` |

mod lazyload;
pub mod options;
mod proxy;
mod screenshot;


pub use lazyload::LazyloadResult;
pub use options::{ImageOptions, OptionValue};
