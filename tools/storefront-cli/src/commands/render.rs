//! Render a product detail page.

use anyhow::{Context as _, Result};
use product_details::ToastQueue;
use storefront_commerce::cart::Cart;

use super::{open_page, report_toasts, select_quantity, RenderArgs};
use crate::cart_file;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let toasts = ToastQueue::new();
    let mut page = open_page(&args.id, &args.source, ctx, &toasts)?;
    report_toasts(&toasts, ctx);

    let cart = match &args.cart {
        Some(path) => cart_file::load(&ctx.resolve_path(path))?,
        None => Cart::new(),
    };

    select_quantity(&mut page, args.quantity, ctx);
    if let Some(index) = args.select_image {
        page.select_thumbnail(index);
    }

    let html = if args.fragment {
        page.render(&cart)
    } else {
        page.render_document(&cart)
    };

    match &args.out {
        Some(out) => {
            let path = ctx.resolve_path(out);
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write page: {}", path.display()))?;
            ctx.output
                .success(&format!("Rendered product {} to {}", args.id, path.display()));
        }
        None => ctx.output.raw(&html),
    }

    Ok(())
}
