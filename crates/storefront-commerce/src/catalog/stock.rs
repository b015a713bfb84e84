//! Stock status for product pages.

use serde::{Deserialize, Serialize};

/// Stock at or below this count (and above zero) is shown as low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Stock status derived from units on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    /// Nothing on hand.
    OutOfStock,
    /// On hand, but at or below the low-stock threshold.
    LowStock { remaining: u32 },
    /// On hand above the threshold.
    InStock,
}

impl StockStatus {
    /// Classify a stock count.
    pub fn from_stock(stock: u32, low_stock_threshold: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock <= low_stock_threshold {
            StockStatus::LowStock { remaining: stock }
        } else {
            StockStatus::InStock
        }
    }

    /// Check if the product can be bought at all.
    pub fn is_available(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }

    /// Status label. Low stock still reads as in stock.
    pub fn label(&self) -> &'static str {
        if self.is_available() {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }

    /// Status CSS class.
    pub fn css_class(&self) -> &'static str {
        if self.is_available() {
            "stock-in"
        } else {
            "stock-out"
        }
    }

    /// Warning shown next to the label when stock is running low.
    pub fn low_stock_warning(&self) -> Option<String> {
        match self {
            StockStatus::LowStock { remaining } => {
                Some(format!("Hurry! Only {} left.", remaining))
            }
            _ => None,
        }
    }
}
