//! Document map.
//!
//! Documents are keyed by id: the path relative to the source directory,
//! without the `.md` extension, using `/` separators:
//!
//! ```text
//! docs/
//! +-- index.md                -> "index"
//! +-- 01_intro.md             -> "01_intro"
//! +-- guide/02_setup.md       -> "guide/02_setup"
//! ```
//!
//! The map is loaded fully before the menu is built and never changes
//! afterwards.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Id of the document substituted for missing ones.
pub const INDEX_ID: &str = "index";

/// Error loading documents from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Source directory does not exist.
    #[error("Source directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Directory or file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Document returned by [`Documents::get_or_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// Id of the document actually returned.
    pub id: &'a str,
    /// Raw document text.
    pub raw: &'a str,
    /// True when the requested id was missing and the index was substituted.
    pub fallback: bool,
}

/// Ordered map of document id to raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documents {
    entries: BTreeMap<String, String>,
}

impl Documents {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, builder style.
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, raw: impl Into<String>) -> Self {
        self.insert(id, raw);
        self
    }

    /// Add or replace a document.
    pub fn insert(&mut self, id: impl Into<String>, raw: impl Into<String>) {
        self.entries.insert(id.into(), raw.into());
    }

    /// Raw text of document `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Document `id`, or the `"index"` document when `id` is missing.
    ///
    /// Returns `None` only when neither exists.
    #[must_use]
    pub fn get_or_index(&self, id: &str) -> Option<Resolved<'_>> {
        if let Some((id, raw)) = self.entries.get_key_value(id) {
            return Some(Resolved {
                id,
                raw,
                fallback: false,
            });
        }

        let (index_id, raw) = self.entries.get_key_value(INDEX_ID)?;
        tracing::debug!(requested = %id, "Document not found, falling back to index");
        Some(Resolved {
            id: index_id,
            raw,
            fallback: true,
        })
    }

    /// Iterate `(id, raw)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, raw)| (id.as_str(), raw.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load every `*.md` file under `dir`, recursively.
    ///
    /// Hidden files and directories (leading `.`) are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if `dir` does not exist and
    /// [`LoadError::Io`] if a directory or file cannot be read.
    pub fn load_dir(dir: &Path) -> Result<Self, LoadError> {
        if !dir.is_dir() {
            return Err(LoadError::NotFound(dir.to_path_buf()));
        }

        let mut documents = Self::new();
        documents.scan_directory(dir, "")?;
        tracing::debug!(dir = %dir.display(), count = documents.len(), "Loaded documents");
        Ok(documents)
    }

    fn scan_directory(&mut self, dir: &Path, id_prefix: &str) -> Result<(), LoadError> {
        let io_error = |source: std::io::Error| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        };

        for entry in fs::read_dir(dir).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

            if is_dir {
                let child_prefix = join_id(id_prefix, &name);
                self.scan_directory(&path, &child_prefix)?;
            } else if let Some(stem) = name.strip_suffix(".md") {
                let raw = fs::read_to_string(&path).map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                self.insert(join_id(id_prefix, stem), raw);
            }
        }

        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Documents {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut documents = Self::new();
        for (id, raw) in iter {
            documents.insert(id, raw);
        }
        documents
    }
}

fn join_id(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}/{name}")
    }
}
