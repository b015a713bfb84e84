//! Shopping cart module.
//!
//! Contains the cart line item, the store trait pages mutate the cart
//! through, and the in-memory cart implementing it.

mod line_item;
mod store;

pub use line_item::CartLineItem;
pub use store::{Cart, CartStore};
