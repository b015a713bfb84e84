//! Catalog API wire format.
//!
//! The product endpoint answers `{"product": {...}}` with document-style
//! field names (`_id`, `number_of_reviews`). Missing fields fall back to
//! empty values so a partial record still renders.

use serde::{Deserialize, Serialize};
use storefront_commerce::catalog::{Product, ProductImage};
use storefront_commerce::{Currency, Money, ProductId};

/// Body of a successful product response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEnvelope {
    pub product: ProductRecord,
}

/// A product as sent by the catalog API.
///
/// The document store may send `null` for any field it has no value for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub ratings: Option<f32>,
    #[serde(default)]
    pub number_of_reviews: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<ImageRecord>>,
}

/// An image entry of a product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ProductRecord {
    /// Convert into the catalog type, pricing in `currency`.
    pub fn into_product(self, currency: Currency) -> Product {
        let images = self
            .images
            .unwrap_or_default()
            .into_iter()
            .map(|img| ProductImage {
                public_id: img.public_id,
                url: img.url.unwrap_or_default(),
            })
            .collect();

        Product {
            id: ProductId::new(self.id),
            name: self.name.unwrap_or_default(),
            price: Money::from_decimal(self.price.unwrap_or_default(), currency),
            stock: self.stock.unwrap_or_default(),
            ratings: 0.0,
            number_of_reviews: 0,
            description: self.description.unwrap_or_default(),
            images,
        }
        .with_ratings(
            self.ratings.unwrap_or_default(),
            self.number_of_reviews.unwrap_or_default(),
        )
    }
}
