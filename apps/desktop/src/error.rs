//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Royal Fragrances                       │
//! │                                                                         │
//! │  Command Function -> Result<T, ApiError>                                │
//! │         │                                                               │
//! │         ├── CoreError::ProductNotFound ───► NOT_FOUND                   │
//! │         ├── CoreError::Validation ────────► VALIDATION_ERROR            │
//! │         ├── CoreError::InsufficientStock ─► INSUFFICIENT_STOCK          │
//! │         ├── CoreError::EmptyCart ─────────► EMPTY_CART                  │
//! │         └── StoreError ───────────────────► STORAGE_ERROR               │
//! │                                                                         │
//! │  Presentation layer: shows `message` as an error Notice                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use fragrance_core::{CoreError, ValidationError};
use fragrance_store::StoreError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Not enough stock for Mandarine Sky: 15 available, 16 requested"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id not in the catalog
    NotFound,

    /// Form input rejected
    ValidationError,

    /// Cart quantity would exceed stock
    InsufficientStock,

    /// Checkout with nothing in the cart
    EmptyCart,

    /// Loading or saving the snapshot failed
    StorageError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::Required { .. } => {
            format!("Please fill in all required fields ({})", err)
        }
        _ => err.to_string(),
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::InsufficientStock {
                name,
                available,
                requested,
                ..
            } => ApiError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Not enough stock for {}: {} available, {} requested",
                    name, available, requested
                ),
            ),
            CoreError::EmptyCart => {
                ApiError::new(ErrorCode::EmptyCart, "There are no products in the sale")
            }
            CoreError::Validation(e) => ApiError::validation(validation_message(&e)),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::from(CoreError::from(err))
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Keep paths and parser detail in the log, not in the UI
        tracing::error!(error = %err, "Storage error");
        let message = if err.is_corrupt() {
            "Saved data could not be read"
        } else {
            "Could not access saved data"
        };
        ApiError::new(ErrorCode::StorageError, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_codes() {
        assert_eq!(ApiError::from(CoreError::ProductNotFound(42)).code, ErrorCode::NotFound);
        assert_eq!(ApiError::from(CoreError::EmptyCart).code, ErrorCode::EmptyCart);

        let err = ApiError::from(CoreError::InsufficientStock {
            product_id: 3,
            name: "Mandarine Sky".to_string(),
            available: 15,
            requested: 16,
        });
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(
            err.message,
            "Not enough stock for Mandarine Sky: 15 available, 16 requested"
        );
    }

    #[test]
    fn test_validation_error() {
        let err = ApiError::from(ValidationError::Required {
            field: "name".to_string(),
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.starts_with("Please fill in all required fields"));
    }

    #[test]
    fn test_store_error_hides_detail() {
        let err = ApiError::from(StoreError::NoDataDirectory);
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.message, "Could not access saved data");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::from(CoreError::EmptyCart)).unwrap();
        assert_eq!(json["code"], "EMPTY_CART");
        assert_eq!(json["message"], "There are no products in the sale");
    }
}
