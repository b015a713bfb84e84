//! Quantity selector and cart button renderer.

use crate::view::DetailView;

fn disabled_attr(disabled: bool) -> &'static str {
    if disabled {
        " disabled"
    } else {
        ""
    }
}

/// Render the quantity selector and the add/update cart button.
pub fn render_purchase(view: &DetailView) -> String {
    let quantity = view.quantity;
    let button = view.cart_button;

    format!(
        r#"<section class="product-purchase" data-section="purchase">
    <div class="quantity-selector">
        <button class="btn-quantity" data-delta="-1" aria-label="Decrease Quantity"{decrease_disabled}>-</button>
        <span class="quantity-value">{quantity}</span>
        <button class="btn-quantity" data-delta="1" aria-label="Increase Quantity"{increase_disabled}>+</button>
    </div>
    <button type="button" class="btn-add-to-cart"{cart_disabled}>{label}</button>
</section>"#,
        decrease_disabled = disabled_attr(quantity.decrease_disabled),
        quantity = quantity.display,
        increase_disabled = disabled_attr(quantity.increase_disabled),
        cart_disabled = disabled_attr(button.disabled),
        label = button.label,
    )
}
