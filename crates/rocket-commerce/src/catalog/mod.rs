//! Product catalog module.
//!
//! Contains the read-only catalog data a cart depends on: product
//! attributes and stock ceilings.

mod product;
mod stock;

pub use product::Product;
pub use stock::StockRecord;
