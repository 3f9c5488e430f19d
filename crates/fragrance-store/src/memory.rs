//! # In-Memory Store
//!
//! A key-value map of JSON blobs, the same shape as browser local storage.
//! Clones share one map, so a test can hand one clone to the app and keep
//! another to inspect what was written.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use fragrance_core::Snapshot;

use crate::error::StoreResult;
use crate::{decode_snapshot, encode_snapshot, SnapshotStore, STORAGE_KEY};

/// In-memory [`SnapshotStore`].
#[derive(Debug, Clone)]
pub struct MemoryStore {
    blobs: Rc<RefCell<HashMap<String, String>>>,
    key: String,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            blobs: Rc::default(),
            key: STORAGE_KEY.to_string(),
        }
    }

    /// A store that already holds `raw` under the default key, parsed or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = MemoryStore::new();
        store.set_raw(raw);
        store
    }

    /// Overwrites the stored blob with arbitrary text.
    pub fn set_raw(&self, raw: impl Into<String>) {
        self.blobs.borrow_mut().insert(self.key.clone(), raw.into());
    }

    /// The stored blob, exactly as written.
    pub fn raw(&self) -> Option<String> {
        self.blobs.borrow().get(&self.key).cloned()
    }

    pub fn clear(&self) {
        self.blobs.borrow_mut().remove(&self.key);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<Snapshot>> {
        match self.raw() {
            Some(raw) => decode_snapshot(&self.key, &raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let raw = encode_snapshot(snapshot)?;
        self.set_raw(raw);
        Ok(())
    }
}
