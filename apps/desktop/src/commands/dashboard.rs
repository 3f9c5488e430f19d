//! # Dashboard Commands
//!
//! Inventory counters and the low-stock list shown on the landing screen.

use serde::Serialize;
use tracing::debug;

use crate::commands::product::ProductDto;
use crate::state::AppState;
use fragrance_core::report::low_stock;
use fragrance_core::{InventorySummary, Money};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub store_name: String,
    pub summary: InventorySummary,
    /// Products at or below the low-stock threshold, catalog order.
    pub low_stock: Vec<ProductDto>,
    pub sales_count: usize,
    pub revenue: Money,
    pub revenue_display: String,
}

pub fn get_dashboard(state: &AppState) -> DashboardResponse {
    let threshold = state.config.low_stock_threshold;
    debug!(threshold, "get_dashboard command");

    let revenue: Money = state.ledger.records().iter().map(|s| s.total).sum();

    DashboardResponse {
        store_name: state.config.store_name.clone(),
        summary: InventorySummary::from_catalog(&state.catalog, threshold),
        low_stock: low_stock(&state.catalog, threshold)
            .into_iter()
            .map(|p| ProductDto::new(p, &state.config))
            .collect(),
        sales_count: state.ledger.len(),
        revenue,
        revenue_display: state.config.format_currency(revenue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::commands::product::restock_product;
    use crate::commands::sale::complete_sale;
    use crate::commands::test_support::seeded_state;

    #[test]
    fn test_default_catalog_dashboard() {
        let (state, _) = seeded_state();

        let dashboard = get_dashboard(&state);

        assert_eq!(dashboard.summary.total_products, 3);
        assert_eq!(dashboard.summary.men, 1);
        assert_eq!(dashboard.summary.women, 1);
        assert_eq!(dashboard.summary.unisex, 1);
        assert_eq!(dashboard.summary.low_stock, 0);
        assert!(dashboard.low_stock.is_empty());
        assert_eq!(dashboard.revenue_display, "$0.00");
    }

    #[test]
    fn test_low_stock_after_sale() {
        let (mut state, _) = seeded_state();
        for _ in 0..3 {
            add_to_cart(&mut state, 1).unwrap();
        }
        complete_sale(&mut state).unwrap();

        let dashboard = get_dashboard(&state);

        // Oud Majestic: 8 - 3 = 5, which counts as low
        assert_eq!(dashboard.summary.low_stock, 1);
        assert_eq!(dashboard.low_stock[0].id, 1);
        assert_eq!(dashboard.sales_count, 1);
        assert_eq!(dashboard.revenue, Money::from_cents(3 * 11999));

        restock_product(&mut state, 1, 1).unwrap();
        assert!(get_dashboard(&state).low_stock.is_empty());
    }
}
