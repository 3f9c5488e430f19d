//! # Sale Commands
//!
//! Checkout and the sales history.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  complete_sale                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ledger::complete_sale                                                  │
//! │    empty cart? ─────────────────────► EMPTY_CART                        │
//! │    any line deleted / over stock? ──► NOT_FOUND / INSUFFICIENT_STOCK    │
//! │       │                               (nothing changed)                 │
//! │       ▼                                                                 │
//! │  record appended, stock reduced, cart cleared                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  persist ──► SaleReceipt { saleId, date, total }                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{AppState, ConfigState};
use fragrance_core::{Money, SaleId, SaleRecord};

/// What the sale screen shows after checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleReceipt {
    pub sale_id: SaleId,
    pub date: NaiveDate,
    pub total: Money,
    pub total_display: String,
    pub units: i64,
}

impl SaleReceipt {
    pub fn new(record: &SaleRecord, config: &ConfigState) -> Self {
        SaleReceipt {
            sale_id: record.id,
            date: record.date,
            total: record.total,
            total_display: config.format_currency(record.total),
            units: record.total_quantity(),
        }
    }

    /// Success notice text, e.g. "Sale completed for $99.98".
    pub fn summary(&self) -> String {
        format!("Sale completed for {}", self.total_display)
    }
}

/// Checks out the cart, dated today (local time).
pub fn complete_sale(state: &mut AppState) -> Result<SaleReceipt, ApiError> {
    complete_sale_on(state, Local::now().date_naive())
}

/// Checks out the cart with an explicit sale date.
pub fn complete_sale_on(state: &mut AppState, date: NaiveDate) -> Result<SaleReceipt, ApiError> {
    debug!(lines = state.cart.line_count(), %date, "complete_sale command");

    let record = state
        .ledger
        .complete_sale_on(&mut state.cart, &mut state.catalog, date)?;
    let receipt = SaleReceipt::new(record, &state.config);

    state.persist();
    Ok(receipt)
}

/// All completed sales, oldest first.
pub fn sales_history(state: &AppState) -> Vec<SaleRecord> {
    debug!("sales_history command");
    state.ledger.records().to_vec()
}
