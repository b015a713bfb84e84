//! Cart inspection commands.

use anyhow::Result;
use storefront_commerce::cart::{Cart, CartStore};
use storefront_commerce::ProductId;

use super::{CartArgs, CartCommand};
use crate::cart_file;
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.cart);
    let mut cart = cart_file::load(&path)?;

    match args.command {
        CartCommand::Show => {
            show_cart(&cart, ctx);
            Ok(())
        }
        CartCommand::Remove { id } => {
            if cart.remove(&ProductId::new(id.as_str())) {
                cart_file::save(&path, &cart)?;
                ctx.output.success(&format!("Removed {} from cart", id));
            } else {
                ctx.output.warn(&format!("{} is not in the cart", id));
            }
            Ok(())
        }
    }
}

fn show_cart(cart: &Cart, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(cart);
        return;
    }

    ctx.output.header("Cart");
    if cart.is_empty() {
        ctx.output.info("Cart is empty");
        return;
    }

    let widths = [26, 28, 8, 10];
    ctx.output
        .table_row(&["PRODUCT", "NAME", "QTY", "PRICE"], &widths);
    for item in cart.items() {
        let quantity = item.quantity.to_string();
        let price = item.price.display();
        ctx.output.table_row(
            &[item.product.as_str(), &item.name, &quantity, &price],
            &widths,
        );
    }

    ctx.output.info(&format!(
        "{} items, subtotal {}",
        cart.item_count(),
        cart.subtotal().display()
    ));
}
