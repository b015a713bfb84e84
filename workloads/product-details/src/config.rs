//! Page configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use storefront_commerce::catalog::DEFAULT_LOW_STOCK_THRESHOLD;
use storefront_commerce::Currency;
use thiserror::Error;

/// Errors loading a page configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML.
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid JSON.
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings for rendering product detail pages.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Image shown when a product has no usable image URL.
    pub fallback_image: String,
    /// Stock at or below this count (and above zero) shows a warning.
    pub low_stock_threshold: u32,
    /// Number of stars in the rating widget.
    pub rating_stars: u8,
    /// Base URL of the catalog API.
    pub api_base_url: String,
    /// Currency prices are quoted in.
    pub currency: Currency,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            fallback_image: "/assets/images/default_product.png".to_string(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            rating_stars: 5,
            api_base_url: "http://localhost:4000/api/v1".to_string(),
            currency: Currency::USD,
        }
    }
}

impl PageConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a file; `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
