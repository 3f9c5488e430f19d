//! # Domain Types
//!
//! Core domain types used throughout Royal Fragrances POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │   SaleRecord    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │◄──│  product_id     │   │  id (seq)       │       │
//! │  │  name           │   │  name (frozen)  │   │  date           │       │
//! │  │  price          │   │  price (frozen) │──►│  items (copies) │       │
//! │  │  stock          │   │  quantity       │   │  total          │       │
//! │  │  category       │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Snapshot { products, salesHistory } ── the persisted blob             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Cart lines and sale items freeze the product's name, price and image at
//! the moment the product was added. A later edit or delete of the product
//! never changes what the cart shows or what the ledger recorded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

/// Catalog-assigned product identifier (current max + 1, starting at 1).
pub type ProductId = u32;

/// Ledger-assigned sale identifier (ledger length + 1).
pub type SaleId = u32;

// =============================================================================
// Category
// =============================================================================

/// Who a fragrance is marketed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
    Unisex,
}

impl Category {
    /// Every recognized category, in display order.
    pub const ALL: [Category; 3] = [Category::Men, Category::Women, Category::Unisex];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Men => "men",
            Category::Women => "women",
            Category::Unisex => "unisex",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "category".to_string(),
            });
        }
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

/// Catalog listing filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

/// `"all"` and `""` mean no filter; anything else must be a category.
impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A fragrance in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, never reused while the product exists.
    pub id: ProductId,

    /// Display name shown in the catalog and on sale lines.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Units on hand.
    pub stock: i64,

    pub category: Category,

    /// Image URL.
    pub image: String,

    pub description: String,
}

impl Product {
    /// Checks if `quantity` units can be taken from current stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity <= self.stock
    }

    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// New Product (form input)
// =============================================================================

/// Raw input for adding a product, exactly as the product form submits it.
///
/// Numbers arrive as text so that "abc" in the price box is a
/// [`ValidationError`] here rather than a deserialization failure upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
}

// =============================================================================
// Cart Line
// =============================================================================

/// One product + quantity entry in the cart or in a sale record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product this line was taken from.
    pub product_id: ProductId,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub price: Money,

    /// Product image at time of adding (frozen).
    pub image: String,

    /// Always ≥ 1.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line with quantity 1, freezing the product's display fields.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// A completed sale. Immutable once appended to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: SaleId,

    /// Calendar date of completion.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Deep copy of the cart lines at checkout.
    pub items: Vec<CartLine>,

    /// Σ price × quantity over `items`.
    pub total: Money,
}

impl SaleRecord {
    /// Number of units sold across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// The persisted state: `{ "products": [...], "salesHistory": [...] }`.
///
/// A readable blob that lacks either key loads that key as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub sales_history: Vec<SaleRecord>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn perfume(id: ProductId, category: Category) -> Product {
        Product {
            id,
            name: format!("Perfume {}", id),
            price: Money::from_cents(4999),
            stock: 2,
            category,
            image: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("men".parse::<Category>().unwrap(), Category::Men);
        assert_eq!(" Women ".parse::<Category>().unwrap(), Category::Women);
        assert_eq!("UNISEX".parse::<Category>().unwrap(), Category::Unisex);
        assert!(matches!(
            "kids".parse::<Category>(),
            Err(ValidationError::NotAllowed { .. })
        ));
        assert!(matches!(
            "".parse::<Category>(),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_category_filter() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "men".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Men)
        );

        let filter = CategoryFilter::Only(Category::Women);
        assert!(filter.matches(&perfume(1, Category::Women)));
        assert!(!filter.matches(&perfume(2, Category::Men)));
        assert!(CategoryFilter::All.matches(&perfume(3, Category::Unisex)));
    }

    #[test]
    fn test_cart_line_freezes_product_fields() {
        let mut product = perfume(3, Category::Men);
        let line = CartLine::from_product(&product);

        product.name = "Renamed".to_string();
        product.price = Money::from_cents(1);

        assert_eq!(line.name, "Perfume 3");
        assert_eq!(line.price.cents(), 4999);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_line_total() {
        let mut line = CartLine::from_product(&perfume(3, Category::Men));
        line.quantity = 2;
        assert_eq!(line.line_total().cents(), 9998);
    }

    #[test]
    fn test_snapshot_wire_format() {
        let json = r#"{"products":[{"id":1,"name":"Oud","price":11999,"stock":8,
            "category":"unisex","image":"x","description":"d"}]}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.products[0].category, Category::Unisex);
        assert!(snapshot.sales_history.is_empty());

        let out = serde_json::to_value(&snapshot).unwrap();
        assert!(out.get("salesHistory").is_some());
    }
}
