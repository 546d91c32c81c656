//! Pending revv registrations.
//!
//! Pages render in parallel, so registration is a concurrent set insert.
//! Registering the same path twice is a no-op.

use dashmap::DashSet;
use rustc_hash::FxBuildHasher;

/// Sink for paths that the hashing pass must fingerprint.
pub trait RevvRegistry: Send + Sync {
    /// Record an output-root-relative path (no leading slash).
    fn register(&self, path: &str);
}

/// Build-wide set of paths awaiting content hashing.
#[derive(Debug, Default)]
pub struct PendingRevvs {
    paths: DashSet<String, FxBuildHasher>,
}

impl PendingRevvs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Sorted copy of the pending paths.
    pub fn snapshot(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.paths.iter().map(|p| p.key().clone()).collect();
        paths.sort_unstable();
        paths
    }

    /// Take every pending path (sorted), leaving the set empty.
    pub fn drain(&self) -> Vec<String> {
        let paths = self.snapshot();
        for path in &paths {
            self.paths.remove(path);
        }
        paths
    }
}

impl RevvRegistry for PendingRevvs {
    fn register(&self, path: &str) {
        if !self.paths.contains(path) {
            self.paths.insert(path.to_string());
        }
    }
}
