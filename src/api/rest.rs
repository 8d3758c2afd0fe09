//! reqwest-backed implementation of the backend API traits.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{
    ApiError, ApiResult, GenreReader, ProductReader, ProductWriter, PurchaseReader, PurchaseWriter,
};
use crate::domain::product::Product;
use crate::domain::purchase::{PurchaseDetail, PurchaseRequest};
use crate::domain::search::{ResultPage, SearchParams};

/// Endpoint paths relative to the configured API root.
const PRODUCT_SEARCH_PATH: &str = "product/search";
const PRODUCT_PATH: &str = "product";
const GENRE_PATH: &str = "genre";
const PURCHASE_PATH: &str = "purchase";

/// Connection settings for [`RestApi`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Root URL of the backend API, e.g. `http://localhost:8080/api/`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the product catalog backend.
#[derive(Debug, Clone)]
pub struct RestApi {
    client: Client,
    base_url: Url,
}

impl RestApi {
    /// Build a client from the configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        // `Url::join` drops the last path segment unless the base ends in a
        // slash, so normalize here once.
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn search_url(&self, params: &SearchParams) -> ApiResult<Url> {
        let mut url = self.endpoint(PRODUCT_SEARCH_PATH)?;
        url.set_query(Some(&params.to_query_string()?));
        Ok(url)
    }

    fn keyed_url(&self, path: &str, product_code: &str) -> ApiResult<Url> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut()
            .append_pair("productCode", product_code);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let response = self.client.get(url).send().await?;
        Self::read_json(response).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self.client.request(method, url).json(body).send().await?;
        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ProductReader for RestApi {
    async fn search_products(&self, params: SearchParams) -> ApiResult<ResultPage> {
        self.get_json(self.search_url(&params)?).await
    }

    async fn get_product(&self, product_code: &str) -> ApiResult<Product> {
        self.get_json(self.keyed_url(PRODUCT_PATH, product_code)?)
            .await
    }
}

#[async_trait]
impl ProductWriter for RestApi {
    async fn create_product(&self, product: &Product) -> ApiResult<Product> {
        self.send_json(Method::POST, PRODUCT_PATH, product).await
    }

    async fn update_product(&self, product: &Product) -> ApiResult<Product> {
        self.send_json(Method::PUT, PRODUCT_PATH, product).await
    }
}

#[async_trait]
impl GenreReader for RestApi {
    async fn list_genres(&self) -> ApiResult<Vec<String>> {
        self.get_json(self.endpoint(GENRE_PATH)?).await
    }
}

#[async_trait]
impl PurchaseReader for RestApi {
    async fn get_purchase(&self, product_code: &str) -> ApiResult<PurchaseDetail> {
        self.get_json(self.keyed_url(PURCHASE_PATH, product_code)?)
            .await
    }
}

#[async_trait]
impl PurchaseWriter for RestApi {
    async fn create_purchase(&self, purchase: &PurchaseRequest) -> ApiResult<PurchaseDetail> {
        self.send_json(Method::POST, PURCHASE_PATH, purchase).await
    }
}
