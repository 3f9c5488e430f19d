//! # fragrance-core: Pure Business Logic for Royal Fragrances POS
//!
//! This crate is the **heart** of the point-of-sale. It contains the catalog,
//! the cart state machine and the sales ledger as plain in-memory logic with
//! zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Royal Fragrances Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend                                 │   │
//! │  │  Dashboard ──► Catalog ──► Sale ──► Stock ──► Admin form        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    fragrance-desktop                            │   │
//! │  │    add_product, add_to_cart, complete_sale, ...                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ fragrance-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │  ledger   │  │  report   │  │   │
//! │  │   │  Product  │  │ CartLine  │  │SaleRecord │  │ Summary   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO RENDERING                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              fragrance-store (snapshot persistence)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, SaleRecord, Snapshot)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Catalog Store: add, adjust stock, remove, list
//! - [`cart`] - Cart state machine
//! - [`ledger`] - Sales Ledger and checkout
//! - [`report`] - Dashboard counts and low-stock alerts
//! - [`validation`] - Product form validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use fragrance_core::{Cart, Catalog, Ledger};
//!
//! let mut catalog = Catalog::default_catalog();
//! let mut cart = Cart::new();
//! let mut ledger = Ledger::new();
//!
//! cart.add_item(&catalog, 3).unwrap();
//! cart.add_item(&catalog, 3).unwrap();
//!
//! let sale = ledger.complete_sale(&mut cart, &mut catalog).unwrap();
//! assert_eq!(sale.total.to_string(), "$99.98");
//! assert_eq!(catalog.get(3).unwrap().stock, 13);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::Ledger;
pub use money::Money;
pub use report::InventorySummary;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Image used when a product is added without one.
pub const DEFAULT_PRODUCT_IMAGE: &str = "https://images.unsplash.com/photo-1590736969955-1eb1ca6c4c1c?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80";

/// Products at or below this many units show up as low-stock alerts.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Longest accepted product name, in characters.
pub const MAX_NAME_LEN: usize = 200;

/// Highest accepted unit price ($1,000,000.00).
///
/// With [`MAX_STOCK`] this caps a line at 10^14 cents, so cart totals and
/// ledger revenue stay far inside `i64`.
pub const MAX_PRICE: Money = Money::from_cents(100_000_000);

/// Most units one product may hold, and the largest single restock.
pub const MAX_STOCK: i64 = 1_000_000;
