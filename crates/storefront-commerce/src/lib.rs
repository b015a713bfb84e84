//! Catalog and cart domain types for the storefront.
//!
//! This crate provides the types shared by the product pages:
//!
//! - **Catalog**: Products, images, stock status
//! - **Cart**: Line items and the cart store that holds them
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let product = Product::new("p1", "R2 Droid", Money::from_decimal(49.99, Currency::USD), 3);
//!
//! let mut cart = Cart::new();
//! cart.upsert(CartLineItem::from_product(&product, 2));
//!
//! assert_eq!(cart.quantity_of(&product.id), Some(2));
//! assert_eq!(cart.subtotal().display(), "$99.98");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Product, ProductImage, StockStatus, DEFAULT_LOW_STOCK_THRESHOLD};

    // Cart
    pub use crate::cart::{Cart, CartLineItem, CartStore};
}
