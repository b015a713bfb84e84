//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// No product record is available to act on.
    #[error("Product is not loaded")]
    ProductNotLoaded,

    /// Requested quantity would exceed the stock on hand.
    ///
    /// The display text is the message shown to shoppers.
    #[error("Cannot add more than available stock.")]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_message() {
        let err = CommerceError::InsufficientStock {
            product_id: "p1".to_string(),
            requested: 4,
            available: 3,
        };
        assert_eq!(err.to_string(), "Cannot add more than available stock.");
    }

    #[test]
    fn test_from_serde_error() {
        let err: CommerceError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CommerceError::SerializationError(_)));
    }
}
