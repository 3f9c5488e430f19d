//! # Sales Ledger
//!
//! Append-only history of completed sales, plus the checkout that feeds it.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    complete_sale(cart, catalog)                         │
//! │                                                                         │
//! │  1. cart empty? ──────────────────────────────► EmptyCart              │
//! │  2. every line: product exists? ──────────────► ProductNotFound        │
//! │                 quantity ≤ live stock? ────────► InsufficientStock     │
//! │     ─────────── nothing has changed up to here ───────────             │
//! │  3. total = cart.total()                                               │
//! │  4. record { id: len+1, date, items: copy of lines, total }            │
//! │  5. ledger.push(record)                                                │
//! │  6. catalog.adjust_stock(id, -qty) for every line                      │
//! │  7. cart.clear()                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Step 2 checks all lines before anything is written, so the ledger and the
//! stock levels can never disagree about a sale.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::cart::{check_stock, Cart};
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{SaleId, SaleRecord};

/// Completed sales in the order they happened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<SaleRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Rebuilds the ledger from persisted records.
    ///
    /// Ids must run 1, 2, 3, ... in order; otherwise the next `len + 1` id
    /// could collide with one already on file.
    pub fn from_records(records: Vec<SaleRecord>) -> CoreResult<Self> {
        for (expected, record) in (1..).zip(&records) {
            if record.id != expected {
                return Err(ValidationError::InvalidFormat {
                    field: "sale id".to_string(),
                    reason: format!("expected {}, found {}", expected, record.id),
                }
                .into());
            }
        }
        Ok(Ledger { records })
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn get(&self, id: SaleId) -> Option<&SaleRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Checks out the cart, dated today in local time.
    pub fn complete_sale(
        &mut self,
        cart: &mut Cart,
        catalog: &mut Catalog,
    ) -> CoreResult<&SaleRecord> {
        self.complete_sale_on(cart, catalog, Local::now().date_naive())
    }

    /// Checks out the cart with an explicit completion date.
    ///
    /// On any error the cart, the catalog and the ledger are all unchanged.
    pub fn complete_sale_on(
        &mut self,
        cart: &mut Cart,
        catalog: &mut Catalog,
        date: NaiveDate,
    ) -> CoreResult<&SaleRecord> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        for line in cart.lines() {
            let product = catalog.require(line.product_id)?;
            check_stock(product, line.quantity)?;
        }

        let id = SaleId::try_from(self.records.len() + 1).map_err(|_| {
            CoreError::from(ValidationError::OutOfRange {
                field: "sale id".to_string(),
                min: 1,
                max: SaleId::MAX as i64,
            })
        })?;

        let record = SaleRecord {
            id,
            date,
            items: cart.lines().to_vec(),
            total: cart.total(),
        };

        for line in &record.items {
            catalog.adjust_stock(line.product_id, -line.quantity)?;
        }
        cart.clear();

        info!(
            sale_id = record.id,
            total = %record.total,
            lines = record.items.len(),
            "Sale completed"
        );

        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_checkout_two_mandarine_sky() {
        let mut catalog = Catalog::default_catalog();
        let mut cart = Cart::new();
        let mut ledger = Ledger::new();

        cart.add_item(&catalog, 3).unwrap();
        cart.add_item(&catalog, 3).unwrap();

        let record = ledger.complete_sale_on(&mut cart, &mut catalog, date()).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.total, Money::from_cents(9998));
        assert_eq!(record.date, date());
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].quantity, 2);

        assert_eq!(catalog.get(3).unwrap().stock, 13);
        assert_eq!(ledger.len(), 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_sale_ids_are_sequential() {
        let mut catalog = Catalog::default_catalog();
        let mut cart = Cart::new();
        let mut ledger = Ledger::new();

        for expected in 1..=3 {
            cart.add_item(&catalog, 2).unwrap();
            let id = ledger.complete_sale_on(&mut cart, &mut catalog, date()).unwrap().id;
            assert_eq!(id, expected);
        }
        assert_eq!(catalog.get(2).unwrap().stock, 9);
        assert!(ledger.get(2).is_some());
    }

    #[test]
    fn test_empty_cart_changes_nothing() {
        let mut catalog = Catalog::default_catalog();
        let mut cart = Cart::new();
        let mut ledger = Ledger::new();
        let catalog_before = catalog.clone();

        let err = ledger.complete_sale_on(&mut cart, &mut catalog, date()).unwrap_err();

        assert_eq!(err, CoreError::EmptyCart);
        assert!(ledger.is_empty());
        assert_eq!(catalog, catalog_before);
    }

    #[test]
    fn test_deleted_product_aborts_whole_checkout() {
        let mut catalog = Catalog::default_catalog();
        let mut cart = Cart::new();
        let mut ledger = Ledger::new();

        cart.add_item(&catalog, 1).unwrap();
        cart.add_item(&catalog, 3).unwrap();
        catalog.remove(3).unwrap();
        let cart_before = cart.clone();

        let err = ledger.complete_sale_on(&mut cart, &mut catalog, date()).unwrap_err();

        assert_eq!(err, CoreError::ProductNotFound(3));
        assert!(ledger.is_empty());
        assert_eq!(catalog.get(1).unwrap().stock, 8);
        assert_eq!(cart, cart_before);
    }

    #[test]
    fn test_stock_drop_after_add_aborts_checkout() {
        let mut catalog = Catalog::default_catalog();
        let mut cart = Cart::new();
        let mut ledger = Ledger::new();

        cart.add_item(&catalog, 1).unwrap();
        cart.add_item(&catalog, 1).unwrap();
        cart.add_item(&catalog, 2).unwrap();
        catalog.adjust_stock(1, -7).unwrap(); // only 1 Oud Majestic left

        let err = ledger.complete_sale_on(&mut cart, &mut catalog, date()).unwrap_err();

        assert!(matches!(
            err,
            CoreError::InsufficientStock { product_id: 1, available: 1, requested: 2, .. }
        ));
        assert!(ledger.is_empty());
        assert_eq!(catalog.get(2).unwrap().stock, 12);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_record_is_independent_of_later_catalog_changes() {
        let mut catalog = Catalog::default_catalog();
        let mut cart = Cart::new();
        let mut ledger = Ledger::new();

        cart.add_item(&catalog, 2).unwrap();
        ledger.complete_sale_on(&mut cart, &mut catalog, date()).unwrap();
        catalog.remove(2).unwrap();

        let record = ledger.get(1).unwrap();
        assert_eq!(record.items[0].name, "Yara Candy");
        assert_eq!(record.total.cents(), 11550);
        assert_eq!(record.total_quantity(), 1);
    }

    #[test]
    fn test_from_records_requires_sequential_ids() {
        let record = |id| SaleRecord {
            id,
            date: date(),
            items: Vec::new(),
            total: Money::zero(),
        };
        let ledger = Ledger::from_records(vec![record(1), record(2)]).unwrap();
        assert_eq!(ledger.len(), 2);

        assert!(Ledger::from_records(vec![record(1), record(1)]).is_err());
        assert!(Ledger::from_records(vec![record(2)]).is_err());
    }
}
