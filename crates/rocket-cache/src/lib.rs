//! Typed durable key-value layer for the Rocket cart.
//!
//! Provides a small, ergonomic API for keeping serialized values under string
//! keys, with automatic JSON serialization and pluggable backends.
//!
//! # Example
//!
//! ```rust
//! use rocket_cache::{Cache, MemoryBackend};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Line {
//!     id: u64,
//!     amount: u32,
//! }
//!
//! let cache = Cache::new(MemoryBackend::new());
//!
//! // Store a value
//! cache.set("@RocketShoes:cart", &vec![Line { id: 1, amount: 2 }]).unwrap();
//!
//! // Retrieve a value
//! let cart: Option<Vec<Line>> = cache.get("@RocketShoes:cart").unwrap();
//! assert_eq!(cart.unwrap()[0].amount, 2);
//!
//! // Delete a value
//! cache.delete("@RocketShoes:cart").unwrap();
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileBackend;
pub use kv::{Cache, KvBackend};
pub use memory::MemoryBackend;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileBackend, KvBackend, MemoryBackend};
}
