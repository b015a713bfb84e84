//! Section renderers for the product detail page.

mod description;
mod gallery;
mod loader;
mod purchase;
mod status;
mod summary;

pub use description::*;
pub use gallery::*;
pub use loader::*;
pub use purchase::*;
pub use status::*;
pub use summary::*;

use crate::view::{DetailView, PageView};

/// Render the page body for a view.
pub fn render_page(view: &PageView) -> String {
    match view {
        PageView::Loading => render_loader(),
        PageView::Ready(detail) => render_detail(detail),
    }
}

/// Render the full detail layout.
pub fn render_detail(view: &DetailView) -> String {
    format!(
        r#"<div class="product-details" data-product-id="{product_id}">
    <div class="product-layout">
        {gallery}
        <div class="product-info">
            {summary}
            {purchase}
            {status}
            {description}
        </div>
    </div>
</div>"#,
        product_id = escape_html(&view.product_id),
        gallery = render_gallery(view),
        summary = render_summary(view),
        purchase = render_purchase(view),
        status = render_status(view),
        description = render_description(view),
    )
}

/// Escape text for HTML content and attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
