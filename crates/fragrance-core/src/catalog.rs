//! # Catalog Store
//!
//! Owns every [`Product`]. All stock changes, including the ones a checkout
//! makes, go through [`Catalog::adjust_stock`].
//!
//! ## Id Assignment
//! ```text
//! ids in catalog      next id
//! ──────────────      ───────
//! (empty)             1
//! 1, 2, 3             4
//! 1, 3   (2 deleted)  4
//! 5                   6
//! ```
//! Ids are `max + 1`, never `len + 1`, so a delete never causes reuse of a
//! live id.

use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Category, CategoryFilter, NewProduct, Product, ProductId};
use crate::validation::{validate_new_product, ValidProduct};
use crate::{DEFAULT_PRODUCT_IMAGE, MAX_PRICE, MAX_STOCK};

/// The set of products, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Rebuilds a catalog from persisted products.
    ///
    /// ## Rejects
    /// - id 0 or a duplicate id
    /// - empty name, price outside `0..=MAX_PRICE`, stock outside `0..=MAX_STOCK`
    ///
    /// A snapshot that fails here is treated like an unreadable one.
    pub fn from_products(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = std::collections::HashSet::with_capacity(products.len());

        for product in &products {
            if product.id == 0 {
                return Err(ValidationError::MustBePositive {
                    field: "product id".to_string(),
                }
                .into());
            }
            if !seen.insert(product.id) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.to_string(),
                }
                .into());
            }
            if product.name.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: "name".to_string(),
                }
                .into());
            }
            if product.price.is_negative() || product.price > MAX_PRICE {
                return Err(ValidationError::OutOfRange {
                    field: format!("product {} price", product.id),
                    min: 0,
                    max: MAX_PRICE.dollars(),
                }
                .into());
            }
            if !(0..=MAX_STOCK).contains(&product.stock) {
                return Err(ValidationError::OutOfRange {
                    field: format!("product {} stock", product.id),
                    min: 0,
                    max: MAX_STOCK,
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// The fixed three-product seed used when there is no saved state.
    pub fn default_catalog() -> Self {
        let seed = [
            (
                "Oud Majestic",
                11999,
                8,
                Category::Unisex,
                "https://www.revolvefragrances.com/cdn/shop/products/MajesticOud100ml_2.jpg?v=1649492020",
                "Exclusive oud perfume with woody and spicy notes, a modern scent for evenings and special occasions.",
            ),
            (
                "Yara Candy",
                11550,
                12,
                Category::Women,
                "https://www.eadistribution.co.uk/wp-content/uploads/2024/11/Yara-candy-2.png",
                "Feminine fragrance with notes of amber, white flowers and a touch of vanilla.",
            ),
            (
                "Mandarine Sky",
                4999,
                15,
                Category::Men,
                "https://perfumesmb.com.ec/wp-content/uploads/2023/07/odyssey-mandarin-sky.jpg",
                "Fresh fragrance with citrus notes for everyday wear.",
            ),
        ];

        let products = seed
            .into_iter()
            .zip(1..)
            .map(|((name, cents, stock, category, image, description), id)| Product {
                id,
                name: name.to_string(),
                price: Money::from_cents(cents),
                stock,
                category,
                image: image.to_string(),
                description: description.to_string(),
            })
            .collect();

        Catalog { products }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`] but unknown ids are an error.
    pub fn require(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Products matching `filter`, in insertion order.
    pub fn list(&self, filter: CategoryFilter) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().filter(move |p| filter.matches(p))
    }

    /// Products with at least one unit on hand (the sale product picker).
    pub fn sellable(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().filter(|p| p.in_stock())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The id the next added product will get.
    pub fn next_id(&self) -> CoreResult<ProductId> {
        match self.products.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                ValidationError::OutOfRange {
                    field: "product id".to_string(),
                    min: 1,
                    max: ProductId::MAX as i64,
                }
                .into()
            }),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validates form input and appends a new product.
    ///
    /// ## Errors
    /// `CoreError::Validation` for an empty name, a price or stock that is not
    /// a non-negative number, or an unknown category. The catalog is
    /// unchanged on error.
    pub fn add(&mut self, input: &NewProduct) -> CoreResult<&Product> {
        let valid = validate_new_product(input, DEFAULT_PRODUCT_IMAGE)?;
        self.insert(valid)
    }

    /// Appends an already validated product under a fresh id.
    pub fn insert(&mut self, valid: ValidProduct) -> CoreResult<&Product> {
        let id = self.next_id()?;

        debug!(id, name = %valid.name, category = %valid.category, "Adding product");

        self.products.push(Product {
            id,
            name: valid.name,
            price: valid.price,
            stock: valid.stock,
            category: valid.category,
            image: valid.image,
            description: valid.description,
        });

        Ok(&self.products[self.products.len() - 1])
    }

    /// Applies `delta` to a product's stock (positive restocks, negative sells).
    ///
    /// There is no clamping at zero; callers that subtract must check stock
    /// first (the ledger does this for every line before it commits).
    pub fn adjust_stock(&mut self, id: ProductId, delta: i64) -> CoreResult<&Product> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        product.stock = product.stock.saturating_add(delta);

        debug!(id, delta, stock = product.stock, "Adjusted stock");
        Ok(product)
    }

    /// Deletes a product outright and returns it.
    ///
    /// Cart lines that reference `id` are NOT touched here; whoever owns both
    /// the catalog and the cart must purge them.
    pub fn remove(&mut self, id: ProductId) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))?;

        debug!(id, "Removing product");
        Ok(self.products.remove(index))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
