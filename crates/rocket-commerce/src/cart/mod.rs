//! Shopping cart module.
//!
//! Contains the cart sequence and its line items.

#[allow(clippy::module_inception)]
mod cart;

pub use cart::{Cart, LineItem};
