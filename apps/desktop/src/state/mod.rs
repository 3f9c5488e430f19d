//! # State Module
//!
//! Owns everything a command can touch.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    AppState Lifecycle                                   │
//! │                                                                         │
//! │  AppState::load(store, config)                                          │
//! │       │                                                                 │
//! │       ├── Ok(Some(snapshot)), valid ──► catalog + ledger from snapshot │
//! │       ├── Ok(None) ───────────────────► default catalog, empty ledger  │
//! │       └── Err / invalid snapshot ─────► default catalog + warn!        │
//! │                                                                         │
//! │  (nothing is written while seeding)                                     │
//! │                                                                         │
//! │  mutating command ──► persist() ──► store.save(snapshot)                │
//! │                                       │                                 │
//! │                                       └── Err ──► error! (kept in RAM)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::ConfigState;

use tracing::{debug, error, info, warn};

use fragrance_core::{Cart, Catalog, CoreResult, Ledger, Snapshot};
use fragrance_store::SnapshotStore;

/// Catalog, cart, ledger, store and config in one place.
pub struct AppState {
    pub(crate) catalog: Catalog,
    pub(crate) cart: Cart,
    pub(crate) ledger: Ledger,
    store: Box<dyn SnapshotStore>,
    pub(crate) config: ConfigState,
}

impl AppState {
    /// Restores saved state from `store`, or seeds the default catalog.
    ///
    /// Never fails: an unreadable or inconsistent snapshot is logged and
    /// replaced by the seed. The cart always starts empty.
    pub fn load(store: impl SnapshotStore + 'static, config: ConfigState) -> Self {
        let (catalog, ledger) = restore(&store);
        info!(
            products = catalog.len(),
            sales = ledger.len(),
            "Application state ready"
        );

        AppState {
            catalog,
            cart: Cart::new(),
            ledger,
            store: Box::new(store),
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// The persisted view of the current state. The cart is not part of it.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            products: self.catalog.products().to_vec(),
            sales_history: self.ledger.records().to_vec(),
        }
    }

    /// Saves the current snapshot.
    ///
    /// A failed save is logged and swallowed; the in-memory change stands
    /// and the next successful save overwrites the stale blob.
    pub fn persist(&self) {
        match self.store.save(&self.snapshot()) {
            Ok(()) => debug!("Snapshot saved"),
            Err(e) => error!(error = %e, "Failed to save snapshot"),
        }
    }
}

fn restore(store: &dyn SnapshotStore) -> (Catalog, Ledger) {
    let seed = || (Catalog::default_catalog(), Ledger::new());

    match store.load() {
        Ok(Some(snapshot)) => match rebuild(snapshot) {
            Ok(restored) => restored,
            Err(e) => {
                warn!(error = %e, "Saved data is inconsistent, using default catalog");
                seed()
            }
        },
        Ok(None) => {
            info!("No saved data, using default catalog");
            seed()
        }
        Err(e) => {
            warn!(error = %e, "Could not load saved data, using default catalog");
            seed()
        }
    }
}

fn rebuild(snapshot: Snapshot) -> CoreResult<(Catalog, Ledger)> {
    let catalog = Catalog::from_products(snapshot.products)?;
    let ledger = Ledger::from_records(snapshot.sales_history)?;
    Ok((catalog, ledger))
}
