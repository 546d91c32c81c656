//! Core types - pure path and URL arithmetic shared across the crate.

mod path;
mod target;
mod url;

pub use path::{relative_from_file, relative_from_root};
pub use target::{Target, is_from_root, is_url};
pub use self::url::{encode_component, join_base, join_raw, normalize_url};
