//! File-based store.
//!
//! [`FileStore`] keeps each key in its own file under a root directory:
//!
//! ```text
//! {root}/
//! +-- sidebar        # value for key "sidebar"
//! +-- demo-nav       # value for key "demo-nav"
//! ```
//!
//! The directory is created lazily on first write. Read and write failures
//! are logged and otherwise ignored, so a read-only or missing directory
//! behaves like an empty store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::KvStore;

/// File-based [`KvStore`] rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. Nothing is touched on disk yet.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> Option<PathBuf> {
        // Keys are flat names; anything that could escape the root is refused.
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return None;
        }
        Some(self.root.join(key))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.entry_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read state file");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &[u8]) {
        let Some(path) = self.entry_path(key) else {
            tracing::warn!(key = %key, "Refusing to store state under invalid key");
            return;
        };

        if let Err(e) = fs::create_dir_all(&self.root) {
            tracing::warn!(path = %self.root.display(), error = %e, "Failed to create state directory");
            return;
        }

        if let Err(e) = fs::write(&path, value) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to write state file");
        }
    }
}
