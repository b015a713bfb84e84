//! Product catalog module.
//!
//! Contains the product record shown on detail pages and stock status.

mod product;
mod stock;

pub use product::{Product, ProductImage};
pub use stock::{StockStatus, DEFAULT_LOW_STOCK_THRESHOLD};
