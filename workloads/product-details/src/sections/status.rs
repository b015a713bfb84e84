//! Stock status section renderer.

use super::escape_html;
use crate::view::DetailView;

/// Render the stock status and, when stock is low, the warning.
pub fn render_status(view: &DetailView) -> String {
    let warning = view
        .low_stock_warning
        .as_deref()
        .map(|text| format!(r#"<p class="stock-warning">{}</p>"#, escape_html(text)))
        .unwrap_or_default();

    format!(
        r#"<section class="product-status" data-section="status">
    <p>Status: <span class="{status_class}">{status_label}</span></p>
    {warning}
</section>"#,
        status_class = view.status.css_class(),
        status_label = view.status.label(),
        warning = warning,
    )
}
