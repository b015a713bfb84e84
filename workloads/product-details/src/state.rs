//! Local view state of a product page.

/// Smallest quantity the selector allows.
pub const MIN_QUANTITY: u32 = 1;

/// State owned by one page instance.
///
/// Only user-driven values live here. The default image is derived from
/// the product on every render, so `selected_image` is `None` until a
/// thumbnail is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selected_image: Option<String>,
    quantity: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_image: None,
            quantity: MIN_QUANTITY,
        }
    }
}

impl ViewState {
    /// Fresh state: no selection, quantity 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Image chosen from the thumbnails, if any.
    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    /// Requested quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Record a thumbnail selection.
    pub fn select_image(&mut self, url: impl Into<String>) {
        self.selected_image = Some(url.into());
    }

    /// Forget the thumbnail selection.
    pub fn clear_selection(&mut self) {
        self.selected_image = None;
    }

    /// Step the quantity by `delta`, never going below [`MIN_QUANTITY`].
    ///
    /// The upper bound is enforced by disabling the increase control, not here.
    pub fn adjust_quantity(&mut self, delta: i32) -> u32 {
        let next = (i64::from(self.quantity) + i64::from(delta)).max(i64::from(MIN_QUANTITY));
        self.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.quantity
    }
}
