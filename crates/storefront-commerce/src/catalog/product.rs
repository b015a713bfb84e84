//! Product and image types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest value a product rating can take.
pub const MAX_RATING: f32 = 5.0;

/// A product as returned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Units on hand.
    pub stock: u32,
    /// Average rating, 0 to 5.
    pub ratings: f32,
    /// Number of reviews behind the rating.
    pub number_of_reviews: u32,
    /// Long description.
    pub description: String,
    /// Images in display order.
    pub images: Vec<ProductImage>,
}

impl Product {
    /// Create a product with no images, description or reviews.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            ratings: 0.0,
            number_of_reviews: 0,
            description: String::new(),
            images: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the rating and review count. The rating is clamped to 0..=5.
    pub fn with_ratings(mut self, ratings: f32, number_of_reviews: u32) -> Self {
        self.ratings = ratings.clamp(0.0, MAX_RATING);
        self.number_of_reviews = number_of_reviews;
        self
    }

    /// Append an image.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(ProductImage::new(url));
        self
    }

    /// URL of the image at `index`, if present and non-empty.
    pub fn image_url(&self, index: usize) -> Option<&str> {
        self.images
            .get(index)
            .map(|img| img.url.as_str())
            .filter(|url| !url.is_empty())
    }

    /// URL of the first image, used as the default and as the cart thumbnail.
    pub fn primary_image_url(&self) -> Option<&str> {
        self.image_url(0)
    }
}

/// A product image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    /// Identifier at the image host, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    /// Image URL.
    pub url: String,
}

impl ProductImage {
    /// Create an image from a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            public_id: None,
            url: url.into(),
        }
    }
}
