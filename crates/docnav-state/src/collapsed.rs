//! Collapsed menu sections.
//!
//! State is a JSON object of folder id → collapsed flag, stored under one key
//! of a [`KvStore`]:
//!
//! ```json
//! {"components": true, "design-guide": false}
//! ```
//!
//! Missing entries mean expanded. State is read once when loading and
//! written back after every toggle.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{KvStore, KvStoreExt};

/// Folder id → collapsed flag for one storage key.
pub struct CollapsedSections {
    store: Arc<dyn KvStore>,
    storage_key: String,
    state: BTreeMap<String, bool>,
}

impl CollapsedSections {
    /// Load state stored under `storage_key`.
    ///
    /// Missing or corrupt state loads as "nothing collapsed".
    #[must_use]
    pub fn load(store: Arc<dyn KvStore>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();

        let state = match store.get(&storage_key) {
            None => {
                tracing::debug!(key = %storage_key, "No collapsed-section state stored");
                BTreeMap::new()
            }
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(key = %storage_key, error = %e, "Ignoring unreadable collapsed-section state");
                    BTreeMap::new()
                }
            },
        };

        Self {
            store,
            storage_key,
            state,
        }
    }

    /// Whether folder `id` is collapsed. Unknown ids are expanded.
    #[must_use]
    pub fn is_collapsed(&self, id: &str) -> bool {
        self.state.get(id).copied().unwrap_or(false)
    }

    /// Collapse state as seen by a view.
    ///
    /// When the view is not `collapsible`, folders always render expanded and
    /// the stored state is ignored.
    #[must_use]
    pub fn is_collapsed_in(&self, id: &str, collapsible: bool) -> bool {
        collapsible && self.is_collapsed(id)
    }

    /// Flip folder `id` and persist. Returns the new collapsed flag.
    pub fn toggle(&mut self, id: &str) -> bool {
        let collapsed = !self.is_collapsed(id);
        self.state.insert(id.to_owned(), collapsed);
        self.store.set_json(&self.storage_key, &self.state);
        tracing::debug!(key = %self.storage_key, id = %id, collapsed, "Toggled section");
        collapsed
    }

    /// Storage key this state persists under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// All stored entries, including expanded ones.
    #[must_use]
    pub fn entries(&self) -> &BTreeMap<String, bool> {
        &self.state
    }
}

impl std::fmt::Debug for CollapsedSections {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollapsedSections")
            .field("storage_key", &self.storage_key)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
