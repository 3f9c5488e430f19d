//! # fragrance-store: Snapshot Persistence for Royal Fragrances POS
//!
//! The whole application state that survives a restart is one JSON blob:
//!
//! ```json
//! { "products": [ ... ], "salesHistory": [ ... ] }
//! ```
//!
//! It lives under the key [`STORAGE_KEY`]. The cart is never persisted.
//!
//! ## Backends
//! - [`JsonFileStore`] - one file per key, written atomically
//! - [`MemoryStore`] - shared in-memory map, for tests and embedding
//!
//! Both implement [`SnapshotStore`]. Deciding what to do when a load fails
//! (fall back to the default catalog) is left to the caller.

pub mod error;
pub mod file;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use fragrance_core::Snapshot;

/// Key the snapshot is saved under.
pub const STORAGE_KEY: &str = "royal_fragrances_data";

/// Somewhere a [`Snapshot`] can be saved and loaded.
pub trait SnapshotStore {
    /// Reads the saved snapshot.
    ///
    /// `Ok(None)` means nothing was ever saved. A blob that exists but
    /// cannot be decoded is [`StoreError::Corrupt`].
    fn load(&self) -> StoreResult<Option<Snapshot>>;

    /// Replaces the saved snapshot.
    fn save(&self, snapshot: &Snapshot) -> StoreResult<()>;
}

/// Serializes a snapshot to its stored JSON text.
pub fn encode_snapshot(snapshot: &Snapshot) -> StoreResult<String> {
    serde_json::to_string(snapshot).map_err(StoreError::Serialization)
}

/// Parses stored JSON text. Missing top-level keys decode as empty lists.
pub fn decode_snapshot(key: &str, raw: &str) -> StoreResult<Snapshot> {
    serde_json::from_str(raw).map_err(|source| StoreError::Corrupt {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fragrance_core::{Catalog, Category};

    #[test]
    fn test_encode_uses_camel_case_keys() {
        let snapshot = Snapshot {
            products: Catalog::default_catalog().products().to_vec(),
            sales_history: Vec::new(),
        };

        let raw = encode_snapshot(&snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert!(value.get("salesHistory").unwrap().as_array().unwrap().is_empty());
        assert_eq!(value["products"][0]["name"], "Oud Majestic");
        assert_eq!(value["products"][2]["category"], "men");
    }

    #[test]
    fn test_decode_hand_written_blob() {
        let raw = r#"{
            "products": [{
                "id": 7,
                "name": "Amber Night",
                "price": 2500,
                "stock": 4,
                "category": "women",
                "image": "https://example.com/a.jpg",
                "description": "Warm amber"
            }],
            "salesHistory": []
        }"#;

        let snapshot = decode_snapshot(STORAGE_KEY, raw).unwrap();
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.products[0].category, Category::Women);
        assert_eq!(snapshot.products[0].price.cents(), 2500);
    }

    #[test]
    fn test_decode_wrong_shape_is_corrupt() {
        let err = decode_snapshot(STORAGE_KEY, r#"{"products": 3}"#).unwrap_err();
        assert!(err.is_corrupt());
    }
}
