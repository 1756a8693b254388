//! Extension trait for [`KvStore`] with typed convenience methods.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::KvStore;

/// Typed convenience methods for [`KvStore`].
///
/// Provides `get_json`/`set_json` for serde types and
/// `get_string`/`set_string` for UTF-8 strings, so that [`KvStore`] stays
/// object-safe and implementors only handle raw bytes.
///
/// # Example
///
/// ```
/// use docnav_state::{KvStoreExt, MemoryStore};
/// use std::collections::BTreeMap;
///
/// let store = MemoryStore::new();
/// let mut state = BTreeMap::new();
/// state.insert("components".to_owned(), true);
///
/// store.set_json("sidebar", &state);
/// let loaded: Option<BTreeMap<String, bool>> = store.get_json("sidebar");
/// assert_eq!(loaded, Some(state));
/// ```
pub trait KvStoreExt: KvStore {
    /// Retrieve a JSON-deserialized value.
    ///
    /// Returns `None` on miss or deserialization failure.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = self.get(key)?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Store a value as JSON.
    ///
    /// Logs and skips the write if serialization fails.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_vec(value) {
            Ok(bytes) => self.set(key, &bytes),
            Err(e) => tracing::warn!(key = %key, error = %e, "Failed to serialize state"),
        }
    }

    /// Retrieve a UTF-8 string.
    ///
    /// Returns `None` on miss or invalid UTF-8.
    fn get_string(&self, key: &str) -> Option<String> {
        let bytes = self.get(key)?;
        String::from_utf8(bytes).ok()
    }

    /// Store a string value.
    fn set_string(&self, key: &str, value: &str) {
        self.set(key, value.as_bytes());
    }
}

impl<S: KvStore + ?Sized> KvStoreExt for S {}
