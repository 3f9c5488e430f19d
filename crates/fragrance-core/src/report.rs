//! # Inventory Reports
//!
//! Read-only views over the catalog for the dashboard: product counts per
//! category and the low-stock alert list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::types::{Category, Product};

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_products: usize,
    pub men: usize,
    pub women: usize,
    pub unisex: usize,
    /// Products with `stock ≤ threshold`.
    pub low_stock: usize,
}

impl InventorySummary {
    pub fn from_catalog(catalog: &Catalog, low_stock_threshold: i64) -> Self {
        catalog
            .products()
            .iter()
            .fold(InventorySummary::default(), |mut summary, product| {
                summary.total_products += 1;
                match product.category {
                    Category::Men => summary.men += 1,
                    Category::Women => summary.women += 1,
                    Category::Unisex => summary.unisex += 1,
                }
                if product.stock <= low_stock_threshold {
                    summary.low_stock += 1;
                }
                summary
            })
    }
}

/// Products at or below `threshold` units, in catalog order.
pub fn low_stock(catalog: &Catalog, threshold: i64) -> Vec<&Product> {
    catalog
        .products()
        .iter()
        .filter(|p| p.stock <= threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LOW_STOCK_THRESHOLD;

    #[test]
    fn test_summary_of_default_catalog() {
        let catalog = Catalog::default_catalog();
        let summary = InventorySummary::from_catalog(&catalog, LOW_STOCK_THRESHOLD);

        assert_eq!(
            summary,
            InventorySummary {
                total_products: 3,
                men: 1,
                women: 1,
                unisex: 1,
                low_stock: 0,
            }
        );
    }

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        let mut catalog = Catalog::default_catalog();
        catalog.adjust_stock(1, -3).unwrap(); // 5 left
        catalog.adjust_stock(3, -9).unwrap(); // 6 left

        let names: Vec<_> = low_stock(&catalog, LOW_STOCK_THRESHOLD)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Oud Majestic"]);
        assert_eq!(
            InventorySummary::from_catalog(&catalog, LOW_STOCK_THRESHOLD).low_stock,
            1
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert_eq!(
            InventorySummary::from_catalog(&catalog, LOW_STOCK_THRESHOLD),
            InventorySummary::default()
        );
        assert!(low_stock(&catalog, LOW_STOCK_THRESHOLD).is_empty());
    }
}
