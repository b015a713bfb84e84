//! Name, rating and price section renderer.

use super::escape_html;
use crate::view::DetailView;

/// Render name, product ID, star rating and price.
pub fn render_summary(view: &DetailView) -> String {
    format!(
        r#"<section class="product-summary" data-section="summary">
    <h1 class="product-name">{name}</h1>
    <p class="product-id">Product ID: {product_id}</p>
    <div class="product-rating">
        {stars}
        <span class="review-count">({review_count} Reviews)</span>
    </div>
    <p class="product-price">{price}</p>
</section>"#,
        name = escape_html(&view.name),
        product_id = escape_html(&view.product_id),
        stars = render_stars(view.rating, view.rating_stars),
        review_count = escape_html(&view.review_count),
        price = escape_html(&view.price),
    )
}

/// Render `rating` as `total` stars, rounding to the nearest half star.
pub fn render_stars(rating: f32, total: u8) -> String {
    let halves = (rating.clamp(0.0, f32::from(total)) * 2.0).round() as u32;
    let full = halves / 2;
    let half = halves % 2;

    let stars: String = (0..u32::from(total))
        .map(|i| {
            if i < full {
                r#"<span class="star star--full">&#9733;</span>"#
            } else if i == full && half == 1 {
                r#"<span class="star star--half">&#9733;</span>"#
            } else {
                r#"<span class="star star--empty">&#9734;</span>"#
            }
        })
        .collect();

    format!(
        r#"<span class="rating-stars" aria-label="Rated {:.1} out of {}">{}</span>"#,
        rating, total, stars
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(html: &str, class: &str) -> usize {
        html.matches(class).count()
    }

    #[test]
    fn test_stars_whole_rating() {
        let html = render_stars(3.0, 5);
        assert_eq!(count(&html, "star--full"), 3);
        assert_eq!(count(&html, "star--half"), 0);
        assert_eq!(count(&html, "star--empty"), 2);
    }

    #[test]
    fn test_stars_half_rating() {
        let html = render_stars(4.5, 5);
        assert_eq!(count(&html, "star--full"), 4);
        assert_eq!(count(&html, "star--half"), 1);
        assert_eq!(count(&html, "star--empty"), 0);
    }

    #[test]
    fn test_stars_rounding_and_clamp() {
        assert_eq!(count(&render_stars(2.2, 5), "star--full"), 2);
        assert_eq!(count(&render_stars(2.8, 5), "star--full"), 3);
        assert_eq!(count(&render_stars(9.0, 5), "star--full"), 5);
        assert_eq!(count(&render_stars(0.0, 5), "star--empty"), 5);
    }

    #[test]
    fn test_stars_label() {
        assert!(render_stars(4.5, 5).contains(r#"aria-label="Rated 4.5 out of 5""#));
    }
}
