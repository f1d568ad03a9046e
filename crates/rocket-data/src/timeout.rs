//! Transport timeouts for catalog lookups.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timeout configuration for outbound lookups.
///
/// Both limits are unset by default: a lookup waits as long as the server
/// takes. Set them when the transport should give up on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Connection timeout in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_ms: Option<u64>,
    /// Total request timeout in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_ms: Option<u64>,
}

impl TimeoutConfig {
    /// No timeouts.
    pub fn none() -> Self {
        Self::default()
    }

    /// Create from a single total timeout.
    pub fn from_total(total: Duration) -> Self {
        let total_ms = duration_ms(total);
        Self {
            connect_ms: Some((total_ms / 4).max(1)),
            total_ms: Some(total_ms),
        }
    }

    /// Connection timeout, if any.
    pub fn connect(&self) -> Option<Duration> {
        self.connect_ms.map(Duration::from_millis)
    }

    /// Total timeout, if any.
    pub fn total(&self) -> Option<Duration> {
        self.total_ms.map(Duration::from_millis)
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
