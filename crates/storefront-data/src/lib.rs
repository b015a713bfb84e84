//! HTTP client and product queries for the storefront.
//!
//! Provides a small builder API for outbound GET requests over a blocking
//! `reqwest` client, and the product query used by detail pages.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::{HttpProductQuery, ProductQuery, QueryState};
//! use storefront_commerce::ProductId;
//!
//! let query = HttpProductQuery::new("https://shop.example/api/v1");
//!
//! match query.fetch(&ProductId::new("66a1f0c2")) {
//!     QueryState::Success(product) => println!("{}", product.name),
//!     QueryState::Failure(error) => eprintln!("{:?}", error.message),
//!     QueryState::Pending => {}
//! }
//! ```

mod error;
mod query;
mod request;
mod response;
pub mod wire;

pub use error::FetchError;
pub use query::{
    parse_product_response, HttpProductQuery, InMemoryProductQuery, ProductQuery, QueryError,
    QueryState,
};
pub use request::RequestBuilder;
pub use response::Response;

/// HTTP client for making outbound requests.
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: std::collections::HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: std::collections::HashMap::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request. Relative URLs are resolved against the base URL.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder { builder }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// The request as built so far.
    pub fn request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and return the response.
    pub fn send(self) -> Result<Response, FetchError> {
        tracing::debug!(url = %self.builder.url, "GET");

        let client = reqwest::blocking::Client::new();
        let mut request = client.get(self.builder.url.as_str());
        for (key, value) in &self.builder.headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request
            .send()
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers: std::collections::HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response
            .bytes()
            .map_err(|e| FetchError::ParseError(e.to_string()))?
            .to_vec();

        Ok(Response::new(status, headers, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, ProductQuery, QueryError, QueryState, Response};
}
