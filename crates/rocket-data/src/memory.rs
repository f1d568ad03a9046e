//! In-process catalog.
//!
//! Useful for demos and tests: stock and products are plain maps, lookups can
//! be made to fail per product, and every lookup is counted.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use rocket_commerce::{catalog::Product, catalog::StockRecord, ProductId};

use crate::source::{ProductSource, StockSource};
use crate::FetchError;

#[derive(Debug, Default)]
struct Inner {
    stock: HashMap<ProductId, u32>,
    products: HashMap<ProductId, Product>,
    failing: HashSet<ProductId>,
}

/// A catalog held in memory.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    inner: RwLock<Inner>,
    stock_lookups: AtomicUsize,
    product_lookups: AtomicUsize,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: register a product with its stock.
    pub fn with_product(self, id: ProductId, product: Product, stock: u32) -> Self {
        self.set_product(id, product);
        self.set_stock(id, stock);
        self
    }

    /// Set (or replace) a stock ceiling.
    pub fn set_stock(&self, id: ProductId, amount: u32) {
        if let Ok(mut inner) = self.inner.write() {
            inner.stock.insert(id, amount);
        }
    }

    /// Set (or replace) product attributes.
    pub fn set_product(&self, id: ProductId, product: Product) {
        if let Ok(mut inner) = self.inner.write() {
            inner.products.insert(id, product);
        }
    }

    /// Make every lookup for `id` fail with a connection error until cleared.
    pub fn fail(&self, id: ProductId) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.insert(id);
        }
    }

    /// Undo [`fail`](Self::fail).
    pub fn recover(&self, id: ProductId) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.remove(&id);
        }
    }

    /// Number of stock lookups served so far.
    pub fn stock_lookups(&self) -> usize {
        self.stock_lookups.load(Ordering::SeqCst)
    }

    /// Number of product lookups served so far.
    pub fn product_lookups(&self) -> usize {
        self.product_lookups.load(Ordering::SeqCst)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, FetchError> {
        self.inner
            .read()
            .map_err(|_| FetchError::Request("memory catalog lock poisoned".to_string()))
    }
}

#[async_trait]
impl StockSource for MemoryCatalog {
    async fn stock(&self, id: ProductId) -> Result<StockRecord, FetchError> {
        self.stock_lookups.fetch_add(1, Ordering::SeqCst);
        let inner = self.read()?;
        if inner.failing.contains(&id) {
            return Err(FetchError::Connection(format!("stock/{id} unavailable")));
        }
        inner
            .stock
            .get(&id)
            .map(|&amount| StockRecord::new(id, amount))
            .ok_or(FetchError::Missing {
                resource: "stock",
                id: id.get(),
            })
    }
}

#[async_trait]
impl ProductSource for MemoryCatalog {
    async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.product_lookups.fetch_add(1, Ordering::SeqCst);
        let inner = self.read()?;
        if inner.failing.contains(&id) {
            return Err(FetchError::Connection(format!("products/{id} unavailable")));
        }
        inner.products.get(&id).cloned().ok_or(FetchError::Missing {
            resource: "product",
            id: id.get(),
        })
    }
}
