//! Add a product to the cart.

use anyhow::{anyhow, Result};
use product_details::{CartAction, ToastQueue};
use storefront_commerce::CommerceError;

use super::{open_page, report_toasts, select_quantity, AddArgs};
use crate::cart_file;
use crate::context::Context;

/// Run the add command.
pub fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let toasts = ToastQueue::new();
    let mut page = open_page(&args.id, &args.source, ctx, &toasts)?;
    report_toasts(&toasts, ctx);

    let cart_path = ctx.resolve_path(&args.cart);
    let mut cart = cart_file::load(&cart_path)?;

    select_quantity(&mut page, args.quantity, ctx);

    let result = page.add_to_cart(&mut cart, &toasts);
    report_toasts(&toasts, ctx);
    let action = result.map_err(rejection)?;

    cart_file::save(&cart_path, &cart)?;

    if ctx.output.is_json() {
        ctx.output.json(&cart);
        return Ok(());
    }

    let name = page.product().map(|p| p.name.as_str()).unwrap_or_default();
    let verb = match action {
        CartAction::Added => "Added",
        CartAction::Updated => "Updated",
    };
    ctx.output.success(&format!(
        "{} {} (quantity {}) in {}",
        verb,
        name,
        page.quantity(),
        cart_path.display()
    ));
    Ok(())
}

/// Error for a refused cart update. A stock rejection was already shown
/// as a notification, so its message is not repeated.
fn rejection(err: CommerceError) -> anyhow::Error {
    match err {
        CommerceError::InsufficientStock { .. } => anyhow!("Cart not updated"),
        other => anyhow::Error::new(other).context("Cart not updated"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_rejection_message_not_repeated() {
        let err = rejection(CommerceError::InsufficientStock {
            product_id: "p1".to_string(),
            requested: 4,
            available: 3,
        });
        assert_eq!(format!("{:#}", err), "Cart not updated");
    }

    #[test]
    fn test_other_rejections_keep_cause() {
        let err = rejection(CommerceError::ProductNotLoaded);
        assert_eq!(format!("{:#}", err), "Cart not updated: Product is not loaded");
    }
}
