//! Shopper scenarios on the product detail page.

use product_details::{CartAction, PageConfig, PageView, ProductDetailsPage, ToastQueue};
use storefront_commerce::prelude::*;
use storefront_data::{InMemoryProductQuery, QueryError, QueryState};

fn product(id: &str, stock: u32) -> Product {
    Product::new(id, "Astromech Droid", Money::from_decimal(249.99, Currency::USD), stock)
        .with_ratings(4.5, 27)
        .with_description("Fixes starships.")
        .with_image("https://img.example/r2-front.jpg")
        .with_image("https://img.example/r2-side.jpg")
}

fn open(product: Product) -> ProductDetailsPage {
    let mut query = InMemoryProductQuery::new();
    let id = product.id.clone();
    query.insert(product);

    let mut page = ProductDetailsPage::new(id, PageConfig::default());
    page.load(&query, &ToastQueue::new());
    page
}

#[test]
fn empty_cart_add_creates_single_line() {
    let mut page = open(product("p1", 3));
    let mut cart = Cart::new();
    let toasts = ToastQueue::new();

    page.adjust_quantity(1);
    assert_eq!(page.quantity(), 2);

    assert_eq!(page.add_to_cart(&mut cart, &toasts), Ok(CartAction::Added));
    assert_eq!(cart.items().len(), 1);
    let line = &cart.items()[0];
    assert_eq!(line.product, ProductId::new("p1"));
    assert_eq!(line.quantity, 2);
    assert_eq!(line.image.as_deref(), Some("https://img.example/r2-front.jpg"));
    assert_eq!(line.stock, 3);
    assert!(toasts.is_empty());
}

#[test]
fn update_over_stock_is_rejected_and_cart_unchanged() {
    let mut page = open(product("p1", 3));
    let mut cart = Cart::new();
    cart.upsert(CartLineItem::from_product(page.product().unwrap(), 2));
    let before = cart.clone();
    let toasts = ToastQueue::new();

    page.adjust_quantity(1);
    let view = page.view(&cart);
    assert_eq!(view.detail().unwrap().cart_button.label, "Update Cart");

    let result = page.add_to_cart(&mut cart, &toasts);
    assert!(matches!(
        result,
        Err(CommerceError::InsufficientStock { requested: 4, available: 3, .. })
    ));
    assert_eq!(cart, before);
    assert_eq!(cart.quantity_of(&ProductId::new("p1")), Some(2));
    assert_eq!(toasts.len(), 1);
    assert_eq!(
        toasts.snapshot()[0].message.as_deref(),
        Some("Cannot add more than available stock.")
    );
}

#[test]
fn over_stock_never_mutates_and_notifies_exactly_once() {
    for stock in 0..6u32 {
        for existing in 0..4u32 {
            for clicks in 0..6 {
                let mut page = open(product("p1", stock));
                for _ in 0..clicks {
                    page.adjust_quantity(1);
                }

                let mut cart = Cart::new();
                if existing > 0 {
                    cart.upsert(CartLineItem::from_product(page.product().unwrap(), existing));
                }
                let before = cart.clone();
                let toasts = ToastQueue::new();

                let exceeds = existing + page.quantity() > stock;
                let result = page.add_to_cart(&mut cart, &toasts);

                if exceeds {
                    assert!(result.is_err());
                    assert_eq!(cart, before);
                    assert_eq!(toasts.len(), 1);
                } else {
                    assert!(result.is_ok());
                    assert_eq!(cart.quantity_of(&ProductId::new("p1")), Some(page.quantity()));
                    assert!(toasts.is_empty());
                }
            }
        }
    }
}

#[test]
fn no_images_falls_back_to_placeholder() {
    let bare = Product::new("p2", "Mouse Droid", Money::new(1999, Currency::USD), 4);
    let mut page = open(bare);

    let fallback = PageConfig::default().fallback_image;
    assert_eq!(page.active_image(), fallback);

    page.select_thumbnail(0);
    assert_eq!(page.active_image(), fallback);

    let html = page.render(&Cart::new());
    assert!(html.contains(&format!(r#"<img src="{}" alt="Mouse Droid""#, fallback)));
}

#[test]
fn out_of_stock_page() {
    let page = open(product("p3", 0));
    let html = page.render(&Cart::new());

    let detail = match page.view(&Cart::new()) {
        PageView::Ready(detail) => detail,
        PageView::Loading => panic!("page should be loaded"),
    };
    assert!(detail.cart_button.disabled);
    assert_eq!(detail.quantity.display, 0);
    assert!(html.contains("Out of Stock"));
    assert!(html.contains(r#"class="btn-add-to-cart" disabled"#));
    assert!(!html.contains("Hurry!"));
}

#[test]
fn low_stock_warning_only_between_one_and_five() {
    for stock in [0u32, 1, 3, 5, 6, 50] {
        let html = open(product("p4", stock)).render(&Cart::new());
        let expected = stock > 0 && stock <= 5;
        assert_eq!(html.contains("Hurry! Only"), expected, "stock {}", stock);
        if expected {
            assert!(html.contains(&format!("Hurry! Only {} left.", stock)));
        }
    }
}

#[test]
fn decreasing_never_goes_below_one() {
    let mut page = open(product("p5", 10));
    for delta in [1, 1, -1, -1, -1, -1, 1, -1, -1] {
        page.adjust_quantity(delta);
        assert!(page.quantity() >= 1);
    }
    assert_eq!(page.quantity(), 1);
}

#[test]
fn failed_fetch_notifies_and_renders_shell() {
    let mut query = InMemoryProductQuery::new();
    query.insert_state(
        "p404",
        QueryState::Failure(QueryError::with_message(404, "Product not found")),
    );
    let toasts = ToastQueue::new();

    let mut page = ProductDetailsPage::new("p404", PageConfig::default());
    page.load(&query, &toasts);

    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts.snapshot()[0].message.as_deref(), Some("Product not found"));

    let html = page.render(&Cart::new());
    assert!(html.contains(r#"<h1 class="product-name"></h1>"#));
    assert!(html.contains("Description"));
    assert_eq!(toasts.len(), 1);
}

#[test]
fn full_render_shows_product() {
    let mut page = open(product("p6", 12));
    page.select_thumbnail(1);
    let html = page.render_document(&Cart::new());

    assert!(html.contains("<title>Astromech Droid | Storefront</title>"));
    assert!(html.contains("Product ID: p6"));
    assert!(html.contains("(27 Reviews)"));
    assert!(html.contains("$249.99"));
    assert!(html.contains("Fixes starships."));
    assert!(html.contains(r#"<img src="https://img.example/r2-side.jpg" alt="Astromech Droid" class="product-image-main">"#));
    assert!(html.contains(">Add to Cart</button>"));
}
