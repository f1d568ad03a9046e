//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur while editing a cart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Item already in cart.
    #[error("Item already in cart: {0}")]
    DuplicateItem(ProductId),

    /// Requested quantity is above the stock ceiling.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },

    /// Quantity must be at least one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,

    /// Product attributes were not a JSON object.
    #[error("Invalid product attributes: {0}")]
    InvalidProduct(String),
}
