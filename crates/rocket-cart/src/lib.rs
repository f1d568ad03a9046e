//! Stock-checked, persisted shopping cart store.
//!
//! [`CartStore`] owns the cart for one session. It exposes three mutating
//! operations (add, remove, update amount), checks each against the stock
//! service, commits the new cart to a durable key-value store, and publishes
//! it to subscribers. Failures are reported through a [`Notifier`].
//!
//! # Example
//!
//! ```rust
//! use rocket_cache::{Cache, MemoryBackend};
//! use rocket_cart::{CartStore, StoreConfig, TracingNotifier};
//! use rocket_commerce::{catalog::Product, ProductId};
//! use rocket_data::MemoryCatalog;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let shoe = Product::from_value(serde_json::json!({ "name": "Shoe" })).unwrap();
//! let catalog = MemoryCatalog::new().with_product(ProductId::new(5), shoe, 10);
//!
//! let store = CartStore::open(
//!     catalog,
//!     Cache::new(MemoryBackend::new()),
//!     TracingNotifier,
//!     StoreConfig::default(),
//! )
//! .unwrap();
//!
//! store.add_product(ProductId::new(5)).await.unwrap();
//! assert_eq!(store.cart().amount_of(ProductId::new(5)), 1);
//! # }
//! ```

pub mod config;
pub mod error;
pub mod notice;
pub mod snapshot;
pub mod store;

pub use config::{StoreConfig, WritePolicy, DEFAULT_STORAGE_KEY};
pub use error::{CartError, ErrorKind};
pub use notice::{
    ChannelNotifier, Messages, Notice, NoticeKind, Notifier, Operation, TracingNotifier,
};
pub use snapshot::{CartSnapshot, Outcome};
pub use store::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartError, CartSnapshot, CartStore, Notice, NoticeKind, Notifier, Outcome, StoreConfig,
        WritePolicy,
    };
}
