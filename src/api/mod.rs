use async_trait::async_trait;
use thiserror::Error;

use crate::domain::product::Product;
use crate::domain::purchase::{PurchaseDetail, PurchaseRequest};
use crate::domain::search::{ResultPage, SearchParams};

pub mod rest;

#[cfg(test)]
pub mod mock;

pub use rest::{ApiConfig, RestApi};

/// Result type returned by every backend call.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced while talking to the backend API.
///
/// Any non-2xx status, including 404, surfaces as [`ApiError::Status`];
/// callers treat all variants uniformly as "no data".
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },
    /// The search parameters could not be encoded as a query string.
    #[error("failed to encode query: {0}")]
    Query(#[from] serde_qs::Error),
    /// The configured base URL or a derived endpoint URL is invalid.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// Read access to the product catalog.
#[async_trait]
pub trait ProductReader: Send + Sync {
    /// Fetch one page of products matching `params`.
    async fn search_products(&self, params: SearchParams) -> ApiResult<ResultPage>;
    /// Fetch a single product by its code.
    async fn get_product(&self, product_code: &str) -> ApiResult<Product>;
}

/// Write access to the product catalog.
#[async_trait]
pub trait ProductWriter: Send + Sync {
    /// Register a new product and return the saved record.
    async fn create_product(&self, product: &Product) -> ApiResult<Product>;
    /// Update an existing product and return the saved record.
    async fn update_product(&self, product: &Product) -> ApiResult<Product>;
}

/// Read access to the genre facet.
#[async_trait]
pub trait GenreReader: Send + Sync {
    async fn list_genres(&self) -> ApiResult<Vec<String>>;
}

/// Read access to purchase details.
#[async_trait]
pub trait PurchaseReader: Send + Sync {
    /// Fetch the purchase detail for a product; a missing product is a 404
    /// [`ApiError::Status`].
    async fn get_purchase(&self, product_code: &str) -> ApiResult<PurchaseDetail>;
}

/// Write access to purchase records.
#[async_trait]
pub trait PurchaseWriter: Send + Sync {
    /// Record a purchase and return the detail with the new stock quantity.
    async fn create_purchase(&self, purchase: &PurchaseRequest) -> ApiResult<PurchaseDetail>;
}
