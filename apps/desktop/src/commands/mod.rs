//! # Commands Module
//!
//! Everything the presentation layer can ask for.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── product.rs    ◄─── Add, list, restock, delete
//! ├── cart.rs       ◄─── Cart manipulation
//! ├── sale.rs       ◄─── Checkout, sales history
//! └── dashboard.rs  ◄─── Counts and low-stock alerts
//! ```
//!
//! ## Conventions
//! - Read-only commands take `&AppState`, mutating ones `&mut AppState`
//! - Failures are `ApiError`; the state is unchanged when one is returned
//! - Commands that change products or sales call `AppState::persist`
//!   (cart changes are never persisted)

pub mod cart;
pub mod dashboard;
pub mod product;
pub mod sale;

#[cfg(test)]
pub(crate) mod test_support {
    use fragrance_store::MemoryStore;

    use crate::state::{AppState, ConfigState};

    /// Default-catalog state over a fresh in-memory store.
    pub fn seeded_state() -> (AppState, MemoryStore) {
        let store = MemoryStore::new();
        let state = AppState::load(store.clone(), ConfigState::default());
        (state, store)
    }
}
