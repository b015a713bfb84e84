//! The product detail page controller.

use storefront_commerce::cart::{CartLineItem, CartStore};
use storefront_commerce::catalog::Product;
use storefront_commerce::{CommerceError, ProductId};
use storefront_data::{ProductQuery, QueryError, QueryState};

use crate::config::PageConfig;
use crate::notify::Notifier;
use crate::sections::render_page;
use crate::state::ViewState;
use crate::view::{active_image, DetailView, PageView};

/// What an accepted cart action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// A new line was added.
    Added,
    /// The existing line's quantity was replaced.
    Updated,
}

/// One product detail page.
///
/// Owns the local view state and the latest query result. Rendering is a
/// pure function of those two plus the cart; user actions mutate the view
/// state or, for add/update, the cart passed in.
#[derive(Debug, Clone)]
pub struct ProductDetailsPage {
    product_id: ProductId,
    config: PageConfig,
    query: QueryState,
    state: ViewState,
}

impl ProductDetailsPage {
    /// Create a page for `product_id`. The query starts out pending.
    pub fn new(product_id: impl Into<ProductId>, config: PageConfig) -> Self {
        Self {
            product_id: product_id.into(),
            config,
            query: QueryState::Pending,
            state: ViewState::new(),
        }
    }

    /// Identifier from the route.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Configuration in effect.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Latest query result.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Loaded product, if the query succeeded.
    pub fn product(&self) -> Option<&Product> {
        self.query.product()
    }

    /// Local view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Requested quantity.
    pub fn quantity(&self) -> u32 {
        self.state.quantity()
    }

    /// Fetch the product and apply the result.
    ///
    /// Every fetch that fails notifies, even when it fails the same way as
    /// the previous one.
    pub fn load<Q>(&mut self, query: &Q, notifier: &dyn Notifier)
    where
        Q: ProductQuery + ?Sized,
    {
        tracing::debug!(product_id = %self.product_id, "loading product");
        let state = query.fetch(&self.product_id);
        self.install(state, true, notifier);
    }

    /// Install a query result that was not produced by a new fetch.
    ///
    /// A changed product drops the thumbnail selection so the default image
    /// is derived again. Re-applying the failure already shown does not
    /// notify a second time.
    pub fn apply_query(&mut self, state: QueryState, notifier: &dyn Notifier) {
        self.install(state, false, notifier);
    }

    fn install(&mut self, state: QueryState, fetched: bool, notifier: &dyn Notifier) {
        if self.query.product() != state.product() {
            self.state.clear_selection();
        }

        if let QueryState::Failure(error) = &state {
            if fetched || self.query.error() != Some(error) {
                self.notify_failure(error, notifier);
            }
        }

        tracing::debug!(
            product_id = %self.product_id,
            pending = state.is_pending(),
            loaded = state.product().is_some(),
            fetched,
            "query state applied"
        );
        self.query = state;
    }

    fn notify_failure(&self, error: &QueryError, notifier: &dyn Notifier) {
        tracing::warn!(
            product_id = %self.product_id,
            status = ?error.status,
            message = ?error.message,
            "product request failed"
        );
        notifier.notify_error(error.message.as_deref());
    }

    /// Image currently shown in the main slot.
    pub fn active_image(&self) -> &str {
        active_image(self.product(), &self.state, &self.config)
    }

    /// Show the image at `index`, or the fallback when there is none.
    pub fn select_thumbnail(&mut self, index: usize) {
        let url = self
            .product()
            .and_then(|p| p.image_url(index))
            .unwrap_or(&self.config.fallback_image)
            .to_string();
        self.state.select_image(url);
    }

    /// Step the quantity by `delta` (-1 or +1); never below 1.
    pub fn adjust_quantity(&mut self, delta: i32) -> u32 {
        self.state.adjust_quantity(delta)
    }

    /// Add the current quantity to the cart, or replace the quantity of the
    /// existing line.
    ///
    /// The quantity already in the cart plus the requested quantity must not
    /// exceed stock. When it would, the shopper is notified and the cart is
    /// left untouched.
    pub fn add_to_cart<C>(
        &self,
        cart: &mut C,
        notifier: &dyn Notifier,
    ) -> Result<CartAction, CommerceError>
    where
        C: CartStore + ?Sized,
    {
        let product = self.product().ok_or(CommerceError::ProductNotLoaded)?;
        let quantity = self.state.quantity();
        let candidate = CartLineItem::from_product(product, quantity);

        let existing = cart.quantity_of(&product.id);
        let prospective = existing.unwrap_or(0).saturating_add(quantity);

        if prospective > product.stock {
            let err = CommerceError::InsufficientStock {
                product_id: product.id.to_string(),
                requested: prospective,
                available: product.stock,
            };
            tracing::warn!(
                product_id = %product.id,
                requested = prospective,
                available = product.stock,
                "cart update rejected"
            );
            notifier.notify_error(Some(&err.to_string()));
            return Err(err);
        }

        cart.upsert(candidate);
        let action = if existing.is_some() {
            CartAction::Updated
        } else {
            CartAction::Added
        };
        tracing::info!(product_id = %product.id, quantity, ?action, "cart updated");
        Ok(action)
    }

    /// Derive the view model.
    pub fn view<C>(&self, cart: &C) -> PageView
    where
        C: CartStore + ?Sized,
    {
        if self.query.is_pending() {
            return PageView::Loading;
        }

        let product = self.product();
        let in_cart = product.is_some_and(|p| cart.find(&p.id).is_some());
        PageView::Ready(DetailView::derive(product, &self.state, in_cart, &self.config))
    }

    /// Render the page body.
    pub fn render<C>(&self, cart: &C) -> String
    where
        C: CartStore + ?Sized,
    {
        render_page(&self.view(cart))
    }

    /// Render a complete HTML document around the page body.
    pub fn render_document<C>(&self, cart: &C) -> String
    where
        C: CartStore + ?Sized,
    {
        let title = match self.product() {
            Some(product) if !product.name.is_empty() => product.name.as_str(),
            _ => "Product Details",
        };
        crate::render_document(title, &self.render(cart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastQueue;
    use storefront_commerce::cart::Cart;
    use storefront_commerce::{Currency, Money};
    use storefront_data::InMemoryProductQuery;

    fn droid(stock: u32) -> Product {
        Product::new("p1", "Astromech", Money::new(2500, Currency::USD), stock)
            .with_image("https://img.example/a.jpg")
            .with_image("https://img.example/b.jpg")
    }

    fn loaded(stock: u32) -> ProductDetailsPage {
        let mut page = ProductDetailsPage::new("p1", PageConfig::default());
        page.apply_query(QueryState::Success(droid(stock)), &ToastQueue::new());
        page
    }

    #[test]
    fn test_starts_loading() {
        let page = ProductDetailsPage::new("p1", PageConfig::default());
        assert_eq!(page.view(&Cart::new()), PageView::Loading);
        assert!(page.render(&Cart::new()).contains("loader"));
    }

    #[test]
    fn test_load_through_query() {
        let mut query = InMemoryProductQuery::new();
        query.insert(droid(3));
        let toasts = ToastQueue::new();

        let mut page = ProductDetailsPage::new("p1", PageConfig::default());
        page.load(&query, &toasts);

        assert_eq!(page.product().map(|p| p.stock), Some(3));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_failure_notifies_once_per_occurrence() {
        let toasts = ToastQueue::new();
        let mut page = ProductDetailsPage::new("p1", PageConfig::default());
        let failure = QueryState::Failure(QueryError::with_message(404, "Product not found"));

        page.apply_query(failure.clone(), &toasts);
        page.apply_query(failure.clone(), &toasts);
        let _ = page.render(&Cart::new());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.snapshot()[0].message.as_deref(), Some("Product not found"));

        page.apply_query(QueryState::Pending, &toasts);
        page.apply_query(failure, &toasts);
        assert_eq!(toasts.len(), 2);
    }

    #[test]
    fn test_each_failed_fetch_notifies() {
        let mut query = InMemoryProductQuery::new();
        query.insert_state(
            "p1",
            QueryState::Failure(QueryError::with_message(500, "Server down")),
        );
        let toasts = ToastQueue::new();
        let mut page = ProductDetailsPage::new("p1", PageConfig::default());

        page.load(&query, &toasts);
        page.load(&query, &toasts);

        let messages: Vec<_> = toasts.drain().into_iter().map(|t| t.message).collect();
        assert_eq!(
            messages,
            vec![Some("Server down".to_string()), Some("Server down".to_string())]
        );
    }

    #[test]
    fn test_failure_without_message() {
        let toasts = ToastQueue::new();
        let mut page = ProductDetailsPage::new("p1", PageConfig::default());
        page.apply_query(QueryState::Failure(QueryError::default()), &toasts);

        assert_eq!(toasts.drain(), vec![crate::notify::Toast { message: None }]);
        let html = page.render(&Cart::new());
        assert!(html.contains("Product ID: </p>"));
        assert!(html.contains("Out of Stock"));
    }

    #[test]
    fn test_select_thumbnail() {
        let mut page = loaded(5);
        assert_eq!(page.active_image(), "https://img.example/a.jpg");

        page.select_thumbnail(1);
        assert_eq!(page.active_image(), "https://img.example/b.jpg");

        page.select_thumbnail(9);
        assert_eq!(page.active_image(), PageConfig::default().fallback_image);
    }

    #[test]
    fn test_new_product_resets_selection() {
        let mut page = loaded(5);
        page.select_thumbnail(1);

        let other = Product::new("p1", "Astromech Mk II", Money::new(2600, Currency::USD), 5)
            .with_image("https://img.example/mk2.jpg");
        page.apply_query(QueryState::Success(other), &ToastQueue::new());
        assert_eq!(page.active_image(), "https://img.example/mk2.jpg");
    }

    #[test]
    fn test_same_product_keeps_selection() {
        let mut page = loaded(5);
        page.select_thumbnail(1);
        page.apply_query(QueryState::Success(droid(5)), &ToastQueue::new());
        assert_eq!(page.active_image(), "https://img.example/b.jpg");
    }

    #[test]
    fn test_add_then_update() {
        let mut page = loaded(5);
        let mut cart = Cart::new();
        let toasts = ToastQueue::new();

        page.adjust_quantity(1);
        assert_eq!(page.add_to_cart(&mut cart, &toasts), Ok(CartAction::Added));
        assert_eq!(cart.quantity_of(&ProductId::new("p1")), Some(2));

        page.adjust_quantity(1);
        assert_eq!(page.add_to_cart(&mut cart, &toasts), Ok(CartAction::Updated));
        assert_eq!(cart.quantity_of(&ProductId::new("p1")), Some(3));
        assert_eq!(cart.items().len(), 1);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_add_rejected_over_stock() {
        let page = loaded(0);
        let mut cart = Cart::new();
        let toasts = ToastQueue::new();

        let result = page.add_to_cart(&mut cart, &toasts);
        assert!(matches!(result, Err(CommerceError::InsufficientStock { .. })));
        assert!(cart.is_empty());
        assert_eq!(
            toasts.snapshot()[0].message.as_deref(),
            Some("Cannot add more than available stock.")
        );
    }

    #[test]
    fn test_add_without_product() {
        let page = ProductDetailsPage::new("p1", PageConfig::default());
        let mut cart = Cart::new();
        let toasts = ToastQueue::new();

        assert_eq!(
            page.add_to_cart(&mut cart, &toasts),
            Err(CommerceError::ProductNotLoaded)
        );
        assert!(cart.is_empty());
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_view_update_label_after_add() {
        let page = loaded(5);
        let mut cart = Cart::new();
        page.add_to_cart(&mut cart, &ToastQueue::new()).unwrap();

        let view = page.view(&cart);
        assert_eq!(view.detail().unwrap().cart_button.label, "Update Cart");
    }

    #[test]
    fn test_render_document_title() {
        let page = loaded(5);
        let html = page.render_document(&Cart::new());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Astromech | Storefront</title>"));
    }
}
