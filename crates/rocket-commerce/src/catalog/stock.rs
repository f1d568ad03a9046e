//! Stock ceilings.

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Deserializer, Serialize};

/// Available quantity for a product, as reported by the stock service.
///
/// Read-only from the cart's point of view; the cart never reserves or
/// decrements stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Product this record describes.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Units available. A missing or null amount means nothing is available.
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub amount: u32,
}

/// Read an optional stock amount, treating `null` like a missing field.
fn amount_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

impl StockRecord {
    /// Create a stock record.
    pub fn new(product_id: ProductId, amount: u32) -> Self {
        Self { product_id, amount }
    }

    /// Check whether `requested` units fit under the ceiling.
    pub fn can_fulfill(&self, requested: u64) -> bool {
        requested <= u64::from(self.amount)
    }

    /// Like [`can_fulfill`](Self::can_fulfill), but returns the rejection as an error.
    pub fn check(&self, requested: u64) -> Result<(), CommerceError> {
        if self.can_fulfill(requested) {
            Ok(())
        } else {
            Err(CommerceError::InsufficientStock {
                product_id: self.product_id,
                requested,
                available: self.amount,
            })
        }
    }
}
