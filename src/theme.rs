//! Project-over-theme file lookup.

use std::path::{Path, PathBuf};

use crate::config::BuildContext;
use crate::debug;

impl BuildContext {
    /// Resolve a logical asset path to a concrete file.
    ///
    /// The project source tree wins over the theme tree. `None` is a normal
    /// outcome; callers decide whether a missing file is fatal.
    pub fn find_file(&self, relative_path: impl AsRef<Path>) -> Option<PathBuf> {
        let relative = strip_root(relative_path.as_ref());

        let project = self.source_root().join(relative);
        if project.exists() {
            return Some(project);
        }

        let themed = self.theme_root()?.join(relative);
        if themed.exists() {
            debug!("theme"; "using theme copy of {}", relative.display());
            return Some(themed);
        }
        None
    }
}

/// Logical paths may be written root-relative (`/layouts/base.html`).
fn strip_root(path: &Path) -> &Path {
    path.strip_prefix("/").unwrap_or(path)
}
