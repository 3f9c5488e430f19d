//! # JSON File Store
//!
//! Keeps the snapshot as `<dir>/<key>.json`.
//!
//! ## Atomic Writes
//! ```text
//! save(snapshot)
//!      │
//!      ▼
//! <dir>/.<key>-<uuid>.tmp   ← full JSON written here first
//!      │
//!      ▼ rename (atomic on the same filesystem)
//! <dir>/<key>.json          ← readers only ever see a complete blob
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fragrance_core::Snapshot;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::{decode_snapshot, encode_snapshot, SnapshotStore, STORAGE_KEY};

/// File-backed [`SnapshotStore`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    key: String,
}

impl JsonFileStore {
    /// Stores under `dir` with the default storage key.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            dir: dir.into(),
            key: STORAGE_KEY.to_string(),
        }
    }

    /// Uses a different key (file stem).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Full path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    fn ensure_dir(&self) -> StoreResult<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;
        }
        Ok(())
    }

    fn write_atomic(&self, target: &Path, content: &str) -> StoreResult<()> {
        let tmp = self.dir.join(format!(".{}-{}.tmp", self.key, Uuid::new_v4()));
        fs::write(&tmp, content).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, target).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            StoreError::io(target, e)
        })
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Snapshot>> {
        let path = self.path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?path, "No saved snapshot");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let snapshot = decode_snapshot(&self.key, &raw)?;
        debug!(
            ?path,
            products = snapshot.products.len(),
            sales = snapshot.sales_history.len(),
            "Loaded snapshot"
        );
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        self.ensure_dir()?;
        let content = encode_snapshot(snapshot)?;
        let path = self.path();
        self.write_atomic(&path, &content)?;

        debug!(?path, bytes = content.len(), "Saved snapshot");
        Ok(())
    }
}
