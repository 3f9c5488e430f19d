//! # Cart Commands
//!
//! Commands for the in-progress sale. The cart lives only in memory, so none
//! of these persist anything.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│ Completed│                         │
//! │  │  Cart    │     │          │     │   Sale   │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │                        │            complete_sale                       │
//! │                   add_to_cart       (sale.rs)                           │
//! │                   increase/decrease                                     │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────► (back to empty)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{AppState, ConfigState};
use fragrance_core::{Cart, CartLine, Money, ProductId};

/// Totals shown under the cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub total: Money,
    pub total_display: String,
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartResponse {
    pub fn new(cart: &Cart, config: &ConfigState) -> Self {
        let total = cart.total();
        CartResponse {
            items: cart.lines().to_vec(),
            totals: CartTotals {
                line_count: cart.line_count(),
                total_quantity: cart.total_quantity(),
                total,
                total_display: config.format_currency(total),
            },
        }
    }
}

fn respond(state: &AppState) -> CartResponse {
    CartResponse::new(&state.cart, &state.config)
}

pub fn get_cart(state: &AppState) -> CartResponse {
    debug!("get_cart command");
    respond(state)
}

/// Adds one unit of a product to the sale.
///
/// ## Behavior
/// - Product already in cart: quantity + 1
/// - Otherwise: new line at quantity 1, name/price/image frozen
/// - Fails with INSUFFICIENT_STOCK rather than exceed stock
pub fn add_to_cart(state: &mut AppState, product_id: ProductId) -> Result<CartResponse, ApiError> {
    debug!(product_id, "add_to_cart command");

    state.cart.add_item(&state.catalog, product_id)?;
    Ok(respond(state))
}

/// The "+" button on a cart line.
pub fn increase_quantity(
    state: &mut AppState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, "increase_quantity command");

    state.cart.increment(&state.catalog, product_id)?;
    Ok(respond(state))
}

/// The "-" button on a cart line. At quantity 1 the line goes away.
pub fn decrease_quantity(state: &mut AppState, product_id: ProductId) -> CartResponse {
    debug!(product_id, "decrease_quantity command");

    state.cart.decrement(product_id);
    respond(state)
}

pub fn remove_from_cart(state: &mut AppState, product_id: ProductId) -> CartResponse {
    debug!(product_id, "remove_from_cart command");

    state.cart.remove_item(product_id);
    respond(state)
}

pub fn clear_cart(state: &mut AppState) -> CartResponse {
    debug!("clear_cart command");

    state.cart.clear();
    respond(state)
}
