//! # Store Error Types
//!
//! Error types for snapshot persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the storage key for context           │
//! │       │                                                                 │
//! │       ├── load: app falls back to the default catalog                  │
//! │       └── save: app logs it; in-memory state stays as is               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A blob exists under the key but is not a valid snapshot.
    ///
    /// ## When This Occurs
    /// - The file was truncated or hand-edited
    /// - An incompatible format was saved under the same key
    #[error("Stored data under '{key}' is unreadable: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding the snapshot failed.
    #[error("Failed to serialize snapshot: {0}")]
    Serialization(#[source] serde_json::Error),

    /// No platform data directory could be determined.
    #[error("Could not determine a data directory")]
    NoDataDirectory,
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the blob exists but cannot be decoded.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
