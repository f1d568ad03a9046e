//! Stock and product lookups for the Rocket cart.
//!
//! This crate provides:
//! - `StockSource` / `ProductSource` / `Catalog` - the lookups a cart depends on
//! - `HttpCatalog` - the shop's HTTP API, via reqwest
//! - `MemoryCatalog` - an in-process catalog for demos and tests
//! - `TimeoutConfig` - optional transport timeouts

mod client;
mod error;
mod memory;
mod source;
mod timeout;

pub use client::*;
pub use error::FetchError;
pub use memory::MemoryCatalog;
pub use source::*;
pub use timeout::*;
