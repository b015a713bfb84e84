//! Product detail page.
//!
//! Renders one product with its gallery, rating, price, stock status and
//! description, and handles the shopper's actions on it:
//! - Thumbnail selection
//! - Quantity adjustment (never below one)
//! - Add/update cart, rejected when the cart would hold more than stock
//!
//! The page is fed a [`QueryState`](storefront_data::QueryState) by a
//! product query, mutates a [`CartStore`](storefront_commerce::cart::CartStore)
//! and reports problems through a [`Notifier`].
//!
//! # Example
//!
//! ```rust
//! use product_details::{PageConfig, ProductDetailsPage, ToastQueue};
//! use storefront_commerce::prelude::*;
//! use storefront_data::InMemoryProductQuery;
//!
//! let mut query = InMemoryProductQuery::new();
//! query.insert(Product::new("p1", "R2 Unit", Money::new(4999, Currency::USD), 3));
//!
//! let toasts = ToastQueue::new();
//! let mut cart = Cart::new();
//! let mut page = ProductDetailsPage::new("p1", PageConfig::default());
//! page.load(&query, &toasts);
//!
//! page.adjust_quantity(1);
//! page.add_to_cart(&mut cart, &toasts).unwrap();
//! assert_eq!(cart.quantity_of(&ProductId::new("p1")), Some(2));
//!
//! let html = page.render(&cart);
//! assert!(html.contains("Update Cart"));
//! ```

mod config;
mod notify;
mod page;
mod route;
pub mod sections;
mod state;
mod view;

pub use config::{ConfigError, PageConfig};
pub use notify::{LogNotifier, Notifier, Toast, ToastQueue};
pub use page::{CartAction, ProductDetailsPage};
pub use route::{extract_product_id, PRODUCT_ROUTE_PREFIX};
pub use state::{ViewState, MIN_QUANTITY};
pub use view::{active_image, CartButton, DetailView, PageView, QuantityControl, Thumbnail};

/// Wrap a rendered page body in a complete HTML document.
pub fn render_document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | Storefront</title>
    <style>{styles}</style>
</head>
<body>
    <main class="pdp-container">
{body}
    </main>
</body>
</html>"#,
        title = sections::escape_html(title),
        styles = PAGE_STYLES,
        body = body,
    )
}

/// CSS styles for the product page.
const PAGE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #111827; color: white; }
.pdp-container { max-width: 1200px; margin: 0 auto; padding: 1.5rem; }
.product-layout { display: flex; gap: 2rem; flex-wrap: wrap; }
.product-info { flex: 1; min-width: 280px; }

/* Gallery */
.product-gallery { display: flex; gap: 1rem; flex: 1; min-width: 320px; }
.product-thumbnails { display: flex; flex-direction: column; gap: 1rem; width: 20%; background: white; padding: 0.5rem; max-height: 60vh; overflow-y: auto; }
.product-thumbnail { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 6px; border: 2px solid #d1d5db; cursor: pointer; }
.product-thumbnail--active, .product-thumbnail:hover { border-color: black; }
.product-image { flex: 1; display: flex; align-items: center; justify-content: center; }
.product-image-main { width: 100%; max-width: 32rem; border-radius: 8px; box-shadow: 0 10px 15px rgba(0,0,0,0.3); }

/* Summary */
.product-name { font-size: 2.25rem; margin: 0 0 0.75rem 0; }
.product-rating { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.75rem; }
.star { font-size: 1.5rem; }
.star--full, .star--half { color: #ffb829; }
.star--empty { color: #6b7280; }
.product-price { font-size: 1.5rem; font-weight: 600; color: #ef4444; }

/* Purchase */
.quantity-selector { display: flex; align-items: center; margin-bottom: 1rem; }
.btn-quantity { background: #6b7280; color: white; border: none; padding: 0.5rem 1rem; font-size: 1.125rem; cursor: pointer; }
.btn-quantity:disabled { background: #374151; cursor: not-allowed; }
.quantity-value { padding: 0.5rem 1.25rem; font-size: 1.125rem; }
.btn-add-to-cart { background: #374151; color: white; font-weight: bold; border: none; padding: 0.75rem 1.5rem; border-radius: 4px; cursor: pointer; }
.btn-add-to-cart:disabled { opacity: 0.5; cursor: not-allowed; }

/* Status */
.product-status { display: flex; gap: 0.75rem; align-items: center; }
.stock-in { color: #22c55e; }
.stock-out { color: #ef4444; }
.stock-warning { color: #f97316; font-weight: bold; }

/* Loading */
.loader { display: flex; align-items: center; justify-content: center; gap: 0.75rem; min-height: 60vh; }
.loader-spinner { width: 2rem; height: 2rem; border: 4px solid #374151; border-top-color: white; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;
