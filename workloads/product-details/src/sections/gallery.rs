//! Image gallery section renderer.

use super::escape_html;
use crate::view::DetailView;

/// Render the thumbnail strip and the main image.
///
/// Each thumbnail carries its index so a client can post the selection back.
pub fn render_gallery(view: &DetailView) -> String {
    let thumbnails: String = view
        .thumbnails
        .iter()
        .map(|thumb| {
            let state_class = if thumb.active {
                "product-thumbnail product-thumbnail--active"
            } else {
                "product-thumbnail"
            };
            format!(
                r#"<img src="{}" alt="Thumbnail {}" class="{}" data-index="{}">"#,
                escape_html(&thumb.url),
                thumb.index + 1,
                state_class,
                thumb.index
            )
        })
        .collect();

    format!(
        r#"<section class="product-gallery" data-section="gallery">
    <div class="product-thumbnails">{thumbnails}</div>
    <div class="product-image">
        <img src="{main_image}" alt="{alt}" class="product-image-main">
    </div>
</section>"#,
        thumbnails = thumbnails,
        main_image = escape_html(&view.main_image),
        alt = escape_html(&view.image_alt),
    )
}
