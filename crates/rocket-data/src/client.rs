//! HTTP catalog client.
//!
//! Talks to a json-server style API:
//!
//! - `GET {base_url}/stock/{id}` → `{"id": 1, "amount": 3}`
//! - `GET {base_url}/products/{id}` → `{"id": 1, "title": "…", "price": 179.9, "image": "…"}`

use async_trait::async_trait;
use rocket_commerce::{catalog::Product, catalog::StockRecord, ProductId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::source::{ProductSource, StockSource};
use crate::timeout::TimeoutConfig;
use crate::FetchError;

/// Where the catalog lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// API root, e.g. `http://localhost:3333`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Collection path for stock records.
    #[serde(default = "default_stock_path")]
    pub stock_path: String,
    /// Collection path for products.
    #[serde(default = "default_products_path")]
    pub products_path: String,
    /// Transport timeouts.
    #[serde(default)]
    pub timeout: TimeoutConfig,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_stock_path() -> String {
    "stock".to_string()
}

fn default_products_path() -> String {
    "products".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            stock_path: default_stock_path(),
            products_path: default_products_path(),
            timeout: TimeoutConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Create a config for an API root with default paths.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set transport timeouts.
    pub fn with_timeout(mut self, timeout: TimeoutConfig) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of a product's stock record.
    pub fn stock_url(&self, id: ProductId) -> String {
        self.resource_url(&self.stock_path, id)
    }

    /// URL of a product's attributes.
    pub fn product_url(&self, id: ProductId) -> String {
        self.resource_url(&self.products_path, id)
    }

    fn resource_url(&self, collection: &str, id: ProductId) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            collection.trim_matches('/'),
            id
        )
    }
}

/// Stock body as served; the id is taken from the request instead.
/// A missing or null amount reads as zero.
#[derive(Deserialize)]
struct StockPayload {
    #[serde(default)]
    amount: Option<u32>,
}

/// Catalog backed by the shop's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    /// Build a client for the given config.
    pub fn new(config: CatalogConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(connect) = config.timeout.connect() {
            builder = builder.connect_timeout(connect);
        }
        if let Some(total) = config.timeout.total() {
            builder = builder.timeout(total);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// The active config.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(url, "catalog request");

        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }
}

#[async_trait]
impl StockSource for HttpCatalog {
    async fn stock(&self, id: ProductId) -> Result<StockRecord, FetchError> {
        let payload: StockPayload = self.get_json(&self.config.stock_url(id)).await?;
        Ok(StockRecord::new(id, payload.amount.unwrap_or(0)))
    }
}

#[async_trait]
impl ProductSource for HttpCatalog {
    async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        let value: serde_json::Value = self.get_json(&self.config.product_url(id)).await?;
        Product::from_value(value).map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}
