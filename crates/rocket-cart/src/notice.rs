//! User-visible failure notices.
//!
//! Every failed operation produces exactly one [`Notice`], handed to the
//! store's [`Notifier`]. Delivery is fire-and-forget: a notifier cannot fail
//! an operation.

use std::fmt;

use rocket_commerce::ProductId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// The three mutating cart operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Remove,
    Update,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::Update => "update",
        }
    }

    /// Generic failure notice for this operation.
    pub fn failure_notice(&self) -> NoticeKind {
        match self {
            Operation::Add => NoticeKind::AddFailed,
            Operation::Remove => NoticeKind::RemoveFailed,
            Operation::Update => NoticeKind::UpdateFailed,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which message to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    AddFailed,
    RemoveFailed,
    UpdateFailed,
    /// Shared by all three operations.
    OutOfStock,
}

/// A failure notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub product_id: ProductId,
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Message text per notice kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_add_failed")]
    pub add_failed: String,
    #[serde(default = "default_remove_failed")]
    pub remove_failed: String,
    #[serde(default = "default_update_failed")]
    pub update_failed: String,
    #[serde(default = "default_out_of_stock")]
    pub out_of_stock: String,
}

fn default_add_failed() -> String {
    "Failed to add product".to_string()
}

fn default_remove_failed() -> String {
    "Failed to remove product".to_string()
}

fn default_update_failed() -> String {
    "Failed to update product quantity".to_string()
}

fn default_out_of_stock() -> String {
    "Requested quantity is out of stock".to_string()
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            add_failed: default_add_failed(),
            remove_failed: default_remove_failed(),
            update_failed: default_update_failed(),
            out_of_stock: default_out_of_stock(),
        }
    }
}

impl Messages {
    /// The storefront's Brazilian Portuguese copy.
    pub fn pt_br() -> Self {
        Self {
            add_failed: "Erro na adição do produto".to_string(),
            remove_failed: "Erro na remoção do produto".to_string(),
            update_failed: "Erro na alteração de quantidade do produto".to_string(),
            out_of_stock: "Quantidade solicitada fora de estoque".to_string(),
        }
    }

    /// Text for a notice kind.
    pub fn text(&self, kind: NoticeKind) -> &str {
        match kind {
            NoticeKind::AddFailed => &self.add_failed,
            NoticeKind::RemoveFailed => &self.remove_failed,
            NoticeKind::UpdateFailed => &self.update_failed,
            NoticeKind::OutOfStock => &self.out_of_stock,
        }
    }
}

/// Receives failure notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

impl<F> Notifier for F
where
    F: Fn(&Notice) + Send + Sync,
{
    fn notify(&self, notice: &Notice) {
        self(notice)
    }
}

/// Logs notices at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        tracing::warn!(
            kind = ?notice.kind,
            product_id = %notice.product_id,
            "{}",
            notice.message
        );
    }
}

/// Fans notices out over a broadcast channel.
///
/// Notices sent while nobody is subscribed are dropped.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: broadcast::Sender<Notice>,
}

impl ChannelNotifier {
    /// Create a notifier with room for `capacity` undelivered notices per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Receive future notices.
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: &Notice) {
        let _ = self.sender.send(notice.clone());
    }
}
