//! Cart store errors.

use rocket_cache::CacheError;
use rocket_commerce::{CommerceError, ProductId};
use rocket_data::FetchError;
use thiserror::Error;

use crate::notice::NoticeKind;
use crate::Operation;

/// Why a cart operation did not apply.
#[derive(Debug, Error)]
pub enum CartError {
    /// Requested amount is above the stock ceiling.
    #[error("Out of stock for {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },

    /// The product is not in the cart.
    #[error("Product {0} is not in the cart")]
    NotFound(ProductId),

    /// Stock or product lookup failed.
    #[error("Lookup failed: {0}")]
    Lookup(#[from] FetchError),

    /// The durable store failed.
    #[error("Storage failed: {0}")]
    Storage(#[from] CacheError),

    /// Another commit landed after this operation took its snapshot.
    #[error("Cart changed concurrently: expected version {expected}, found {found}")]
    Conflict { expected: u64, found: u64 },

    /// The edit broke a cart invariant.
    #[error("Invalid cart edit: {0}")]
    Invalid(CommerceError),
}

/// Coarse classification of [`CartError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    OutOfStock,
    NotFound,
    Lookup,
    Storage,
    Conflict,
    Invalid,
}

impl CartError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::OutOfStock { .. } => ErrorKind::OutOfStock,
            CartError::NotFound(_) => ErrorKind::NotFound,
            CartError::Lookup(_) => ErrorKind::Lookup,
            CartError::Storage(_) => ErrorKind::Storage,
            CartError::Conflict { .. } => ErrorKind::Conflict,
            CartError::Invalid(_) => ErrorKind::Invalid,
        }
    }

    /// The notice shown to the user when `operation` fails with this error.
    ///
    /// Out-of-stock has its own message; everything else is the operation's
    /// generic failure.
    pub fn notice_kind(&self, operation: Operation) -> NoticeKind {
        match self.kind() {
            ErrorKind::OutOfStock => NoticeKind::OutOfStock,
            _ => operation.failure_notice(),
        }
    }
}

impl From<CommerceError> for CartError {
    fn from(e: CommerceError) -> Self {
        match e {
            CommerceError::InsufficientStock {
                product_id,
                requested,
                available,
            } => CartError::OutOfStock {
                product_id,
                requested,
                available,
            },
            CommerceError::ItemNotInCart(id) => CartError::NotFound(id),
            other => CartError::Invalid(other),
        }
    }
}
