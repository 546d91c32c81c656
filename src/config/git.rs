//! Git revision lookup for cache-busting.

use std::path::Path;

use anyhow::{Context, Result};

/// Hex digits kept from the HEAD commit id.
const SHORT_LEN: usize = 7;

/// Short HEAD commit id of the repository containing `root`.
pub fn short_revision(root: &Path) -> Result<String> {
    let repo = gix::discover(root)
        .with_context(|| format!("no git repository at `{}`", root.display()))?;
    let head = repo.head_id().context("repository has no HEAD commit")?;
    Ok(head.detach().to_hex_with_len(SHORT_LEN).to_string())
}
