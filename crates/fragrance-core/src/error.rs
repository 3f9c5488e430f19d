//! # Error Types
//!
//! Domain-specific error types for fragrance-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fragrance-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog / cart / checkout failures             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  fragrance-store errors (separate crate)                               │
//! │  └── StoreError       - Snapshot load/save failures                    │
//! │                                                                         │
//! │  Desktop command errors (in app)                                       │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Notice                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable: the operation that raised it left the
//! catalog, cart and ledger untouched.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Why a catalog, cart or checkout operation was refused.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Product id is not in the catalog.
    ///
    /// ## When This Occurs
    /// - Stock adjustment or delete for an unknown id
    /// - Adding an unknown id to the cart
    /// - Checkout of a line whose product was deleted after it was added
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The requested cart quantity would exceed live stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart: Mandarine Sky x15, stock 15
    ///      │
    ///      ▼
    /// increment(3)
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Mandarine Sky", available: 15, requested: 16 }
    ///      │
    ///      ▼
    /// UI notice: "Not enough stock for Mandarine Sky"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        name: String,
        available: i64,
        requested: i64,
    },

    /// Checkout was requested with no lines in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Bad input, see [`ValidationError`].
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Rejected form or snapshot input.
///
/// Raised when form input for a new product or a restock quantity doesn't
/// meet requirements.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Blank where a value is needed.
    #[error("{field} is required")]
    Required { field: String },

    /// Field is not a number at all.
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Zero or negative where only > 0 makes sense.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Number outside the accepted bounds.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. three decimals on a price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Not one of the accepted values (e.g. an unknown category).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g. two products with one id in a snapshot).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result of a catalog, cart or ledger operation.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
