//! Cart snapshot files.
//!
//! The cart lives in a JSON file between invocations, the way a browser
//! session keeps its cart between page views.

use std::path::Path;

use anyhow::{Context as _, Result};
use storefront_commerce::cart::Cart;

/// Load a cart, starting empty when the file does not exist yet.
pub fn load(path: &Path) -> Result<Cart> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no cart file, starting empty");
        return Ok(Cart::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cart file: {}", path.display()))?;
    Cart::from_json(&content)
        .with_context(|| format!("Failed to parse cart file: {}", path.display()))
}

/// Write the cart snapshot.
pub fn save(path: &Path, cart: &Cart) -> Result<()> {
    let content = cart.to_json().context("Failed to serialize cart")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write cart file: {}", path.display()))
}
