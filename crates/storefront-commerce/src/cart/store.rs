//! Cart store trait and the in-memory cart.

use crate::cart::CartLineItem;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A cart that pages read and mutate.
///
/// Lines are keyed by product identifier: a store never holds two lines
/// for the same product.
pub trait CartStore {
    /// Current line items in insertion order.
    fn items(&self) -> &[CartLineItem];

    /// Insert the line, or replace the existing line for the same product.
    ///
    /// Replacement is wholesale: the stored quantity becomes the new
    /// line's quantity, it is not summed.
    fn upsert(&mut self, item: CartLineItem);

    /// Remove the line for a product. Returns whether a line was removed.
    fn remove(&mut self, product_id: &ProductId) -> bool;

    /// Find the line for a product.
    fn find(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items().iter().find(|i| &i.product == product_id)
    }

    /// Quantity currently in the cart for a product.
    fn quantity_of(&self, product_id: &ProductId) -> Option<u32> {
        self.find(product_id).map(|i| i.quantity)
    }
}

/// An in-memory shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart.
    #[serde(default)]
    pub items: Vec<CartLineItem>,
    /// Cart currency.
    #[serde(default)]
    pub currency: Currency,
    /// Unix timestamp of last update.
    #[serde(default)]
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a cart from its JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the cart to a JSON snapshot.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals. Lines in another currency or overflowing are skipped.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .filter_map(CartLineItem::total)
            .filter(|total| total.currency == self.currency)
            .fold(Money::zero(self.currency), |acc, total| {
                acc.try_add(&total).unwrap_or(acc)
            })
    }
}

impl CartStore for Cart {
    fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    fn upsert(&mut self, item: CartLineItem) {
        match self.items.iter_mut().find(|i| i.product == item.product) {
            Some(existing) => {
                tracing::debug!(product_id = %item.product, quantity = item.quantity, "replacing cart line");
                *existing = item;
            }
            None => {
                tracing::debug!(product_id = %item.product, quantity = item.quantity, "adding cart line");
                self.items.push(item);
            }
        }
        self.updated_at = current_timestamp();
    }

    fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(product_id = %product_id, "removed cart line");
            self.updated_at = current_timestamp();
        }
        removed
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
