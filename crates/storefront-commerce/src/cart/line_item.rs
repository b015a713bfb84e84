//! Cart line items.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product's entry in the cart.
///
/// Name, price, image and stock are snapshots taken from the product when
/// the line was last written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Product this line is for.
    pub product: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Representative image (the product's first image).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Stock at the time the line was written.
    pub stock: u32,
    /// Requested quantity.
    pub quantity: u32,
}

impl CartLineItem {
    /// Build a line for `quantity` units of `product`.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.primary_image_url().map(str::to_string),
            stock: product.stock,
            quantity,
        }
    }

    /// Line total (unit price times quantity), or None on overflow.
    pub fn total(&self) -> Option<Money> {
        self.price.try_multiply(i64::from(self.quantity))
    }
}
