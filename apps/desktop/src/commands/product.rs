//! # Product Commands
//!
//! Catalog management: the admin form, the stock screen and the catalog
//! listing.
//!
//! ## Admin Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product form submit                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_product(NewProduct { name, price: "49.99", stock: "15", ... })     │
//! │       │                                                                 │
//! │       ├── invalid ──► ApiError VALIDATION_ERROR (catalog unchanged)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  id = max(id) + 1, default image if none ──► persist ──► ProductDto     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{AppState, ConfigState};
use fragrance_core::validation::{
    validate_new_product, validate_restock_quantity, validate_stock_level,
};
use fragrance_core::{Category, CategoryFilter, Money, NewProduct, Product, ProductId};

/// Product as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    /// Price with the configured currency symbol, e.g. "$49.99"
    pub price_display: String,
    pub stock: i64,
    pub category: Category,
    pub image: String,
    pub description: String,
    /// False when stock is 0; the sale screen disables the product
    pub in_stock: bool,
    pub low_stock: bool,
}

impl ProductDto {
    pub fn new(product: &Product, config: &ConfigState) -> Self {
        ProductDto {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            price_display: config.format_currency(product.price),
            stock: product.stock,
            category: product.category,
            image: product.image.clone(),
            description: product.description.clone(),
            in_stock: product.in_stock(),
            low_stock: product.stock <= config.low_stock_threshold,
        }
    }
}

/// Validates the form and appends the product.
pub fn add_product(state: &mut AppState, input: NewProduct) -> Result<ProductDto, ApiError> {
    debug!(name = %input.name, category = %input.category, "add_product command");

    let valid = validate_new_product(&input, &state.config.default_image)?;
    let product = state.catalog.insert(valid)?;
    let dto = ProductDto::new(product, &state.config);

    info!(id = dto.id, name = %dto.name, "Product added");
    state.persist();
    Ok(dto)
}

/// Lists the catalog in insertion order.
///
/// `filter` is `"all"`, `""` or a category name.
pub fn list_products(state: &AppState, filter: &str) -> Result<Vec<ProductDto>, ApiError> {
    debug!(filter = %filter, "list_products command");

    let filter: CategoryFilter = filter.parse()?;
    Ok(state
        .catalog
        .list(filter)
        .map(|p| ProductDto::new(p, &state.config))
        .collect())
}

/// Products with stock left, for the sale screen.
pub fn sellable_products(state: &AppState) -> Vec<ProductDto> {
    debug!("sellable_products command");

    state
        .catalog
        .sellable()
        .map(|p| ProductDto::new(p, &state.config))
        .collect()
}

pub fn get_product(state: &AppState, id: ProductId) -> Result<ProductDto, ApiError> {
    debug!(id, "get_product command");

    let product = state.catalog.require(id)?;
    Ok(ProductDto::new(product, &state.config))
}

/// Adds `quantity` (> 0) units to a product's stock.
///
/// The resulting stock may not exceed `MAX_STOCK`.
pub fn restock_product(
    state: &mut AppState,
    id: ProductId,
    quantity: i64,
) -> Result<ProductDto, ApiError> {
    debug!(id, quantity, "restock_product command");

    validate_restock_quantity(quantity)?;
    let current = state.catalog.require(id)?.stock;
    validate_stock_level(current + quantity)?;

    let product = state.catalog.adjust_stock(id, quantity)?;
    let dto = ProductDto::new(product, &state.config);

    info!(id, quantity, stock = dto.stock, "Product restocked");
    state.persist();
    Ok(dto)
}

/// Removes a product and any cart line for it. Returns the removed product.
///
/// Unconditional: asking the user to confirm happens before this is called.
pub fn delete_product(state: &mut AppState, id: ProductId) -> Result<ProductDto, ApiError> {
    debug!(id, "delete_product command");

    let removed = state.catalog.remove(id)?;
    if state.cart.remove_item(id) {
        debug!(id, "Purged cart line for deleted product");
    }

    info!(id, name = %removed.name, "Product deleted");
    state.persist();
    Ok(ProductDto::new(&removed, &state.config))
}
