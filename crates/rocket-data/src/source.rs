//! Lookup traits the cart depends on.

use std::sync::Arc;

use async_trait::async_trait;
use rocket_commerce::{catalog::Product, catalog::StockRecord, ProductId};

use crate::FetchError;

/// Authoritative stock ceilings.
#[async_trait]
pub trait StockSource: Send + Sync {
    /// Fetch the stock record for a product.
    async fn stock(&self, id: ProductId) -> Result<StockRecord, FetchError>;
}

/// Product display attributes.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the display attributes for a product.
    async fn product(&self, id: ProductId) -> Result<Product, FetchError>;
}

/// Both lookups a cart needs.
pub trait Catalog: StockSource + ProductSource {}

impl<T: StockSource + ProductSource + ?Sized> Catalog for T {}

#[async_trait]
impl<T: StockSource + ?Sized> StockSource for Arc<T> {
    async fn stock(&self, id: ProductId) -> Result<StockRecord, FetchError> {
        (**self).stock(id).await
    }
}

#[async_trait]
impl<T: ProductSource + ?Sized> ProductSource for Arc<T> {
    async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        (**self).product(id).await
    }
}
