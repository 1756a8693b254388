//! Persisted view state for docnav.
//!
//! This crate decouples view state from where it is kept. Two pieces form the
//! core API:
//!
//! - [`KvStore`]: byte-oriented key-value store, the injected persistence seam
//! - [`CollapsedSections`]: folder id → collapsed flag, persisted as one JSON
//!   object under a storage key
//!
//! # Implementations
//!
//! - [`NullStore`]: never persists (every read misses)
//! - [`MemoryStore`]: process-local, shareable between views
//! - [`FileStore`]: one file per key under a directory
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use docnav_state::{CollapsedSections, KvStore, MemoryStore};
//!
//! let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
//!
//! let mut sections = CollapsedSections::load(Arc::clone(&store), "sidebar");
//! assert!(!sections.is_collapsed("design-guide"));
//! sections.toggle("design-guide");
//!
//! let reloaded = CollapsedSections::load(store, "sidebar");
//! assert!(reloaded.is_collapsed("design-guide"));
//! ```

mod collapsed;
mod ext;
mod file;
mod memory;

pub use collapsed::CollapsedSections;
pub use ext::KvStoreExt;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Byte-oriented key-value store.
///
/// Keys are storage namespaces chosen by the caller (e.g. `"sidebar"`).
/// Writes overwrite, last write wins. Implementations swallow their own I/O
/// failures: persistence is best effort and must never break rendering.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `None` when nothing is stored or the value cannot be read.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]);
}

/// No-op [`KvStore`] that never stores or retrieves data.
///
/// Use when state should not survive the process.
pub struct NullStore;

impl KvStore for NullStore {
    fn get(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    fn set(&self, _key: &str, _value: &[u8]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_store_always_misses() {
        let store = NullStore;

        assert_eq!(store.get("sidebar"), None);

        store.set("sidebar", b"{}");
        assert_eq!(store.get("sidebar"), None);
    }

    #[test]
    fn test_null_store_all_keys_miss() {
        let store = NullStore;

        for key in &["sidebar", "toc", "demo-nav"] {
            store.set(key, b"data");
            assert_eq!(store.get(key), None, "key {key} should miss");
        }
    }
}
