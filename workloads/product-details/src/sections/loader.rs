//! Loading indicator.

/// Render the indicator shown while the product request is in flight.
pub fn render_loader() -> String {
    r#"<div class="loader" role="status" aria-live="polite">
    <span class="loader-spinner"></span>
    <span class="loader-text">Loading...</span>
</div>"#
        .to_string()
}
