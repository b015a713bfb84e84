//! CLI command implementations.

pub mod add;
pub mod cart;
pub mod render;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use product_details::{extract_product_id, LogNotifier, Notifier, ProductDetailsPage, ToastQueue};
use storefront_commerce::ProductId;
use storefront_data::{HttpProductQuery, InMemoryProductQuery};

use crate::context::Context;

/// Where product records come from.
#[derive(Args)]
pub struct SourceArgs {
    /// Read the product from a JSON file in the catalog API's response format.
    #[arg(long, conflicts_with = "api")]
    pub product_file: Option<String>,

    /// Catalog API base URL (default: from config).
    #[arg(long)]
    pub api: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Product identifier or page path (`/product/<id>`).
    pub id: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Cart file, used for the Add/Update label.
    #[arg(long)]
    pub cart: Option<String>,

    /// Thumbnail to show in the main slot (0-based).
    #[arg(long)]
    pub select_image: Option<usize>,

    /// Quantity to preselect.
    #[arg(short, long, default_value_t = 1)]
    pub quantity: u32,

    /// Write the HTML to a file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,

    /// Render the page body only, without the document wrapper.
    #[arg(long)]
    pub fragment: bool,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product identifier or page path (`/product/<id>`).
    pub id: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Cart file (created if missing).
    #[arg(long, default_value = "cart.json")]
    pub cart: String,

    /// Quantity to put in the cart.
    #[arg(short, long, default_value_t = 1)]
    pub quantity: u32,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,

    /// Cart file.
    #[arg(long, default_value = "cart.json", global = true)]
    pub cart: String,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// List cart lines.
    Show,
    /// Remove a product's line.
    Remove {
        /// Product identifier.
        id: String,
    },
}

/// Open a page and load its product from the selected source.
///
/// `id` is either a bare identifier or a page path like `/product/66a1f0c2`.
pub fn open_page(
    id: &str,
    source: &SourceArgs,
    ctx: &Context,
    toasts: &ToastQueue,
) -> Result<ProductDetailsPage> {
    let product_id = extract_product_id(id).unwrap_or_else(|| ProductId::new(id));
    let mut page = ProductDetailsPage::new(product_id, ctx.config.clone());

    match &source.product_file {
        Some(file) => {
            let path = ctx.resolve_path(file);
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read product file: {}", path.display()))?;

            let mut query = InMemoryProductQuery::new();
            query
                .insert_json(&content, ctx.config.currency)
                .with_context(|| format!("Failed to parse product file: {}", path.display()))?;
            page.load(&query, toasts);
        }
        None => {
            let base_url = source
                .api
                .clone()
                .unwrap_or_else(|| ctx.config.api_base_url.clone());
            ctx.output
                .debug(&format!("Fetching product {} from {}", page.product_id(), base_url));

            let query = HttpProductQuery::new(base_url).with_currency(ctx.config.currency);
            page.load(&query, toasts);
        }
    }

    Ok(page)
}

/// Step the quantity up to `target` the way the selector does, stopping at stock.
pub fn select_quantity(page: &mut ProductDetailsPage, target: u32, ctx: &Context) {
    let stock = page.product().map(|p| p.stock).unwrap_or(0);

    while page.quantity() < target {
        if page.quantity() >= stock {
            ctx.output.warn(&format!(
                "Quantity limited to {} (stock {})",
                page.quantity(),
                stock
            ));
            break;
        }
        page.adjust_quantity(1);
    }
}

/// Print queued notifications. JSON mode keeps stdout clean and logs them instead.
pub fn report_toasts(toasts: &ToastQueue, ctx: &Context) {
    for toast in toasts.drain() {
        if ctx.output.is_json() {
            LogNotifier.notify_error(toast.message.as_deref());
        } else {
            ctx.output
                .warn(toast.message.as_deref().unwrap_or("Something went wrong"));
        }
    }
}

/// Show the effective page configuration.
pub fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Page Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.info(&format!("Loaded from {}", path.display())),
        None => ctx.output.info("No config file found, using defaults"),
    }

    let text = ctx
        .config
        .to_toml_string()
        .context("Failed to render configuration")?;
    ctx.output.raw(&text);
    Ok(())
}
