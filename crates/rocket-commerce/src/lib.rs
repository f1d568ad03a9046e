//! Cart domain types for the Rocket shoe shop.
//!
//! This crate holds the pure, synchronous half of the cart:
//!
//! - **Catalog**: product ids, opaque product attributes, stock records
//! - **Cart**: line items and the cart sequence, with copy-on-write edits
//! - **Money**: cents-based amounts for display totals
//!
//! Nothing here talks to the network or to storage; see `rocket-data` and
//! `rocket-cache` for that.
//!
//! # Example
//!
//! ```rust
//! use rocket_commerce::catalog::{Product, StockRecord};
//! use rocket_commerce::{Cart, Currency, LineItem, ProductId};
//!
//! let shoe = Product::from_value(serde_json::json!({
//!     "title": "Tênis de Caminhada",
//!     "price": 179.9,
//! }))
//! .unwrap();
//!
//! let cart = Cart::new()
//!     .with_item(LineItem::new(ProductId::new(1), shoe))
//!     .unwrap();
//!
//! let stock = StockRecord::new(ProductId::new(1), 3);
//! let wanted = cart.amount_of(ProductId::new(1)) + 1;
//! stock.check(u64::from(wanted)).unwrap();
//!
//! let cart = cart.with_amount(ProductId::new(1), wanted).unwrap();
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.subtotal(Currency::BRL).unwrap().amount_cents, 35980);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use cart::{Cart, LineItem};
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Product, StockRecord};

    // Cart
    pub use crate::cart::{Cart, LineItem};
}
