//! Product queries.
//!
//! A query resolves a product identifier into a [`QueryState`]. Pages are
//! rendered from that state alone, so the same page code works with the
//! HTTP-backed query and the in-memory one.

use std::collections::HashMap;

use storefront_commerce::catalog::Product;
use storefront_commerce::{Currency, ProductId};

use crate::wire::ProductEnvelope;
use crate::{FetchClient, FetchError, Response};

/// Outcome of a product request.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    /// The request has not completed.
    Pending,
    /// The product was loaded.
    Success(Product),
    /// The request failed.
    Failure(QueryError),
}

impl QueryState {
    /// Check if the request is still in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    /// The loaded product, if any.
    pub fn product(&self) -> Option<&Product> {
        match self {
            QueryState::Success(product) => Some(product),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&QueryError> {
        match self {
            QueryState::Failure(error) => Some(error),
            _ => None,
        }
    }
}

/// A failed product request.
///
/// `message` is only set when the server supplied one; transport failures
/// carry no message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryError {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl QueryError {
    /// Failure with a server-provided message.
    pub fn with_message(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: Some(message.into()),
        }
    }
}

/// Source of product records.
pub trait ProductQuery {
    /// Resolve a product identifier.
    fn fetch(&self, id: &ProductId) -> QueryState;
}

/// Turn a product endpoint response into a query state.
pub fn parse_product_response(response: &Response, currency: Currency) -> QueryState {
    if !response.is_success() {
        return QueryState::Failure(QueryError {
            status: Some(response.status),
            message: response.error_message(),
        });
    }

    match response.json::<ProductEnvelope>() {
        Ok(envelope) => QueryState::Success(envelope.product.into_product(currency)),
        Err(e) => {
            tracing::warn!(error = %e, "product response did not parse");
            QueryState::Failure(QueryError {
                status: Some(response.status),
                message: None,
            })
        }
    }
}

/// Product query backed by the catalog HTTP API.
pub struct HttpProductQuery {
    client: FetchClient,
    currency: Currency,
}

impl HttpProductQuery {
    /// Query products under `base_url` (e.g. `https://shop.example/api/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: FetchClient::new()
                .with_base_url(base_url)
                .with_default_header("Accept", "application/json"),
            currency: Currency::default(),
        }
    }

    /// Set the currency prices are quoted in.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Path of the product endpoint.
    pub fn product_path(id: &ProductId) -> String {
        format!("/products/{}", id)
    }
}

impl ProductQuery for HttpProductQuery {
    fn fetch(&self, id: &ProductId) -> QueryState {
        let result: Result<Response, FetchError> =
            self.client.get(Self::product_path(id)).send();

        match result {
            Ok(response) => {
                tracing::debug!(product_id = %id, status = response.status, "product response");
                parse_product_response(&response, self.currency)
            }
            Err(e) => {
                tracing::warn!(product_id = %id, error = %e, "product request failed");
                QueryState::Failure(QueryError::default())
            }
        }
    }
}

/// Product query over records held in memory.
///
/// Unknown identifiers fail the way the API does for missing products.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductQuery {
    states: HashMap<ProductId, QueryState>,
}

impl InMemoryProductQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `product` for its identifier.
    pub fn insert(&mut self, product: Product) {
        self.states
            .insert(product.id.clone(), QueryState::Success(product));
    }

    /// Serve an arbitrary state for an identifier.
    pub fn insert_state(&mut self, id: impl Into<ProductId>, state: QueryState) {
        self.states.insert(id.into(), state);
    }

    /// Load a product from a JSON document in the API's response format.
    pub fn insert_json(&mut self, json: &str, currency: Currency) -> Result<ProductId, FetchError> {
        let envelope: ProductEnvelope = serde_json::from_str(json)?;
        let product = envelope.product.into_product(currency);
        let id = product.id.clone();
        self.insert(product);
        Ok(id)
    }
}

impl ProductQuery for InMemoryProductQuery {
    fn fetch(&self, id: &ProductId) -> QueryState {
        self.states.get(id).cloned().unwrap_or_else(|| {
            QueryState::Failure(QueryError::with_message(
                404,
                format!("Product not found with id: {}", id),
            ))
        })
    }
}
