//! Route parameter extraction.

use storefront_commerce::ProductId;

/// Route prefix of product detail pages.
pub const PRODUCT_ROUTE_PREFIX: &str = "/product/";

/// Extract the product ID from a path like `/product/123`.
pub fn extract_product_id(path: &str) -> Option<ProductId> {
    path.strip_prefix(PRODUCT_ROUTE_PREFIX)
        .and_then(|s| s.split('?').next())
        .and_then(|s| s.split('/').next())
        .filter(|s| !s.is_empty())
        .map(ProductId::from)
}
