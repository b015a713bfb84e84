//! View model derived from the query result and local state.
//!
//! Everything the sections render is computed here, so the markup code
//! only formats and the page rules (disabled controls, labels, fallback
//! images) can be checked without parsing HTML.

use storefront_commerce::catalog::{Product, StockStatus};

use crate::config::PageConfig;
use crate::state::{ViewState, MIN_QUANTITY};

/// What the page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// The product request is in flight.
    Loading,
    /// Product detail, possibly with blank fields if the request failed.
    Ready(DetailView),
}

impl PageView {
    /// The detail view, unless still loading.
    pub fn detail(&self) -> Option<&DetailView> {
        match self {
            PageView::Loading => None,
            PageView::Ready(detail) => Some(detail),
        }
    }
}

/// Product detail as displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub product_id: String,
    pub name: String,
    pub image_alt: String,
    pub price: String,
    pub rating: f32,
    pub rating_stars: u8,
    pub review_count: String,
    pub description: String,
    pub main_image: String,
    pub thumbnails: Vec<Thumbnail>,
    pub quantity: QuantityControl,
    pub cart_button: CartButton,
    pub status: StockStatus,
    pub low_stock_warning: Option<String>,
}

/// A gallery thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub index: usize,
    pub url: String,
    pub active: bool,
}

/// Quantity selector state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityControl {
    /// Number shown between the buttons; 0 when nothing is in stock.
    pub display: u32,
    pub decrease_disabled: bool,
    pub increase_disabled: bool,
}

/// Add/update cart button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartButton {
    pub label: &'static str,
    pub disabled: bool,
}

/// Image shown in the main gallery slot.
///
/// The thumbnail selection wins; otherwise the product's first image;
/// otherwise the configured fallback.
pub fn active_image<'a>(
    product: Option<&'a Product>,
    state: &'a ViewState,
    config: &'a PageConfig,
) -> &'a str {
    state
        .selected_image()
        .or_else(|| product.and_then(Product::primary_image_url))
        .unwrap_or(&config.fallback_image)
}

impl DetailView {
    /// Derive the detail view.
    ///
    /// A missing product (failed request) yields blank text and a page
    /// that behaves as if nothing were in stock.
    pub fn derive(
        product: Option<&Product>,
        state: &ViewState,
        in_cart: bool,
        config: &PageConfig,
    ) -> Self {
        let main_image = active_image(product, state, config).to_string();
        let stock = product.map(|p| p.stock).unwrap_or(0);
        let status = StockStatus::from_stock(stock, config.low_stock_threshold);
        let quantity = state.quantity();

        let thumbnails = product
            .map(|p| {
                (0..p.images.len())
                    .map(|index| {
                        let url = p
                            .image_url(index)
                            .unwrap_or(&config.fallback_image)
                            .to_string();
                        Thumbnail {
                            index,
                            active: url == main_image,
                            url,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let name = product.map(|p| p.name.clone()).unwrap_or_default();
        let image_alt = if name.is_empty() {
            "Product Image".to_string()
        } else {
            name.clone()
        };

        Self {
            product_id: product.map(|p| p.id.to_string()).unwrap_or_default(),
            image_alt,
            name,
            price: product.map(|p| p.price.display()).unwrap_or_default(),
            rating: product.map(|p| p.ratings).unwrap_or(0.0),
            rating_stars: config.rating_stars,
            review_count: product
                .map(|p| p.number_of_reviews.to_string())
                .unwrap_or_default(),
            description: product.map(|p| p.description.clone()).unwrap_or_default(),
            main_image,
            thumbnails,
            quantity: QuantityControl {
                display: if status.is_available() { quantity } else { 0 },
                decrease_disabled: quantity <= MIN_QUANTITY,
                increase_disabled: quantity >= stock,
            },
            cart_button: CartButton {
                label: if in_cart { "Update Cart" } else { "Add to Cart" },
                disabled: !status.is_available(),
            },
            low_stock_warning: status.low_stock_warning(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::{Currency, Money};

    fn product(stock: u32) -> Product {
        Product::new("p1", "Astromech", Money::new(4550, Currency::USD), stock)
            .with_ratings(4.5, 12)
            .with_description("Beeps.")
            .with_image("https://img.example/a.jpg")
            .with_image("https://img.example/b.jpg")
    }

    fn derive(product: Option<&Product>, state: &ViewState) -> DetailView {
        DetailView::derive(product, state, false, &PageConfig::default())
    }

    #[test]
    fn test_full_detail() {
        let p = product(10);
        let view = derive(Some(&p), &ViewState::new());

        assert_eq!(view.product_id, "p1");
        assert_eq!(view.name, "Astromech");
        assert_eq!(view.image_alt, "Astromech");
        assert_eq!(view.price, "$45.50");
        assert_eq!(view.review_count, "12");
        assert_eq!(view.main_image, "https://img.example/a.jpg");
        assert!(view.thumbnails[0].active);
        assert!(!view.thumbnails[1].active);
        assert_eq!(view.cart_button, CartButton { label: "Add to Cart", disabled: false });
        assert_eq!(view.status.label(), "In Stock");
        assert_eq!(view.low_stock_warning, None);
    }

    #[test]
    fn test_selected_image_wins() {
        let p = product(10);
        let mut state = ViewState::new();
        state.select_image("https://img.example/b.jpg");

        let view = derive(Some(&p), &state);
        assert_eq!(view.main_image, "https://img.example/b.jpg");
        assert!(!view.thumbnails[0].active);
        assert!(view.thumbnails[1].active);
    }

    #[test]
    fn test_out_of_stock() {
        let p = product(0);
        let view = derive(Some(&p), &ViewState::new());

        assert!(view.cart_button.disabled);
        assert_eq!(view.status.label(), "Out of Stock");
        assert_eq!(view.quantity.display, 0);
        assert_eq!(view.low_stock_warning, None);
    }

    #[test]
    fn test_low_stock_warning_range() {
        for stock in 0..=8 {
            let p = product(stock);
            let view = derive(Some(&p), &ViewState::new());
            let expect_warning = stock > 0 && stock <= 5;
            assert_eq!(view.low_stock_warning.is_some(), expect_warning, "stock {}", stock);
        }
    }

    #[test]
    fn test_quantity_controls() {
        let p = product(2);
        let mut state = ViewState::new();

        let view = derive(Some(&p), &state);
        assert!(view.quantity.decrease_disabled);
        assert!(!view.quantity.increase_disabled);

        state.adjust_quantity(1);
        let view = derive(Some(&p), &state);
        assert_eq!(view.quantity.display, 2);
        assert!(!view.quantity.decrease_disabled);
        assert!(view.quantity.increase_disabled);
    }

    #[test]
    fn test_update_label_when_in_cart() {
        let p = product(4);
        let view = DetailView::derive(Some(&p), &ViewState::new(), true, &PageConfig::default());
        assert_eq!(view.cart_button.label, "Update Cart");
    }

    #[test]
    fn test_no_images_uses_fallback() {
        let p = Product::new("p2", "Probe", Money::new(100, Currency::USD), 1);
        let view = derive(Some(&p), &ViewState::new());

        assert_eq!(view.main_image, PageConfig::default().fallback_image);
        assert!(view.thumbnails.is_empty());
    }

    #[test]
    fn test_empty_image_url_thumbnail_uses_fallback() {
        let p = Product::new("p3", "Gonk", Money::new(100, Currency::USD), 1).with_image("");
        let view = derive(Some(&p), &ViewState::new());

        assert_eq!(view.thumbnails[0].url, PageConfig::default().fallback_image);
        assert!(view.thumbnails[0].active);
    }

    #[test]
    fn test_missing_product_renders_blank_shell() {
        let view = derive(None, &ViewState::new());

        assert_eq!(view.name, "");
        assert_eq!(view.product_id, "");
        assert_eq!(view.price, "");
        assert_eq!(view.image_alt, "Product Image");
        assert_eq!(view.main_image, PageConfig::default().fallback_image);
        assert!(view.cart_button.disabled);
        assert_eq!(view.status.label(), "Out of Stock");
    }
}
