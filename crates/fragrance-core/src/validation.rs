//! # Validation Module
//!
//! Input validation for the product form and the restock box.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                │
//! │  ├── required attributes, number inputs                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── text → typed values (Money, i64, Category)                        │
//! │  └── business rules (non-empty name, non-negative price/stock)         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog                                                      │
//! │  └── id assignment and uniqueness                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::{Money, ParseMoneyError};
use crate::types::{Category, NewProduct};
use crate::{MAX_NAME_LEN, MAX_PRICE, MAX_STOCK};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A [`NewProduct`] whose fields have all been checked and typed.
///
/// Only the catalog turns this into a `Product`, because only the catalog
/// can assign the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    pub name: String,
    pub price: Money,
    pub stock: i64,
    pub category: Category,
    pub image: String,
    pub description: String,
}

/// Validates a complete product form.
///
/// `default_image` is used when the image field is absent or blank.
///
/// ```rust
/// use fragrance_core::types::NewProduct;
/// use fragrance_core::validation::validate_new_product;
///
/// let form = NewProduct {
///     name: "Mandarine Sky".into(),
///     price: "49.99".into(),
///     stock: "15".into(),
///     category: "men".into(),
///     image: None,
///     description: "Citrus".into(),
/// };
/// let valid = validate_new_product(&form, "https://img/default.jpg").unwrap();
/// assert_eq!(valid.price.cents(), 4999);
/// assert_eq!(valid.image, "https://img/default.jpg");
/// ```
pub fn validate_new_product(
    input: &NewProduct,
    default_image: &str,
) -> ValidationResult<ValidProduct> {
    validate_product_name(&input.name)?;
    let price = parse_price(&input.price)?;
    let stock = parse_stock(&input.stock)?;
    let category: Category = input.category.parse()?;

    let image = input
        .image
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default_image)
        .to_string();

    Ok(ValidProduct {
        name: input.name.trim().to_string(),
        price,
        stock,
        category,
        image,
        description: input.description.trim().to_string(),
    })
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_NAME_LEN` characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::OutOfRange {
            field: "name length".to_string(),
            min: 1,
            max: MAX_NAME_LEN as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a non-negative price from decimal text.
///
/// ```rust
/// use fragrance_core::validation::parse_price;
///
/// assert_eq!(parse_price("115.50").unwrap().cents(), 11550);
/// assert!(parse_price("0").is_ok());     // free sample
/// assert!(parse_price("-1").is_err());
/// assert!(parse_price("abc").is_err());
/// ```
pub fn parse_price(text: &str) -> ValidationResult<Money> {
    let price: Money = text.parse().map_err(|err| match err {
        ParseMoneyError::Empty => ValidationError::Required {
            field: "price".to_string(),
        },
        ParseMoneyError::Invalid(value) => ValidationError::InvalidNumber {
            field: "price".to_string(),
            value,
        },
        ParseMoneyError::TooManyDecimals => ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "at most two decimal places".to_string(),
        },
        ParseMoneyError::Overflow => price_out_of_range(),
    })?;

    if price.is_negative() || price > MAX_PRICE {
        return Err(price_out_of_range());
    }

    Ok(price)
}

fn price_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "price".to_string(),
        min: 0,
        max: MAX_PRICE.dollars(),
    }
}

/// Parses a whole number of units in `0..=MAX_STOCK`.
pub fn parse_stock(text: &str) -> ValidationResult<i64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "stock".to_string(),
        });
    }

    let stock: i64 = text.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "stock".to_string(),
        value: text.to_string(),
    })?;

    validate_stock_level(stock)?;
    Ok(stock)
}

/// Checks that a stock figure lies in `0..=MAX_STOCK`.
pub fn validate_stock_level(stock: i64) -> ValidationResult<()> {
    if !(0..=MAX_STOCK).contains(&stock) {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: MAX_STOCK,
        });
    }

    Ok(())
}

/// Validates a restock quantity typed into the inventory screen.
///
/// ## Rules
/// - Must be positive (> 0); zero and negatives are rejected
/// - At most `MAX_STOCK` units at once
pub fn validate_restock_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_STOCK {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_STOCK,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
