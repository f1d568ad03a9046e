//! Versioned cart snapshots.

use std::sync::Arc;

use rocket_commerce::Cart;

/// An immutable view of the cart at one commit.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    /// Commit counter. Zero for the cart loaded at startup.
    pub version: u64,
    /// The cart as of this version.
    pub cart: Arc<Cart>,
}

impl CartSnapshot {
    pub fn new(version: u64, cart: Arc<Cart>) -> Self {
        Self { version, cart }
    }

    pub(crate) fn initial(cart: Cart) -> Self {
        Self::new(0, Arc::new(cart))
    }
}

/// What an operation did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The cart changed; this is the committed snapshot.
    Applied(CartSnapshot),
    /// The request was ignored (non-positive update amount).
    Ignored,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    /// The committed snapshot, if any.
    pub fn snapshot(&self) -> Option<&CartSnapshot> {
        match self {
            Outcome::Applied(snapshot) => Some(snapshot),
            Outcome::Ignored => None,
        }
    }
}
