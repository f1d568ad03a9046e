//! Store configuration.

use rocket_commerce::Currency;
use serde::{Deserialize, Serialize};

use crate::notice::Messages;

/// Key the storefront has always used for the cart.
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

/// How a commit treats writes that landed after its snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Replace whatever is current. Concurrent operations overwrite each other.
    #[default]
    LastWriteWins,
    /// Reject the commit if the cart version moved since the snapshot.
    CompareAndSwap,
}

/// Cart store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Durable key holding the serialized cart.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Currency used for totals.
    #[serde(default)]
    pub currency: Currency,
    /// Commit policy.
    #[serde(default)]
    pub write_policy: WritePolicy,
    /// Notice text.
    #[serde(default)]
    pub messages: Messages,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            currency: Currency::default(),
            write_policy: WritePolicy::default(),
            messages: Messages::default(),
        }
    }
}

impl StoreConfig {
    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the commit policy.
    pub fn with_write_policy(mut self, policy: WritePolicy) -> Self {
        self.write_policy = policy;
        self
    }

    /// Set notice text.
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}
