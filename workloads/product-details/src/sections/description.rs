//! Description section renderer.

use super::escape_html;
use crate::view::DetailView;

/// Render the product description.
pub fn render_description(view: &DetailView) -> String {
    format!(
        r#"<section class="product-description" data-section="description">
    <h2>Description</h2>
    <p>{}</p>
</section>"#,
        escape_html(&view.description)
    )
}
