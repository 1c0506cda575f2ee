use super::receipt::{Receipt, ReceiptId};
use crate::error::Result;
use async_trait::async_trait;

/// Storage for submitted receipts.
///
/// Receipts are write-once: `create` assigns a fresh identifier that is never
/// reused, and nothing stored is ever modified or removed afterwards.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Stores the receipt under a newly generated identifier.
    async fn create(&self, receipt: Receipt) -> Result<ReceiptId>;
    /// Returns a copy of the stored receipt, if any.
    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>>;
}

pub type ReceiptStoreBox = Box<dyn ReceiptStore>;
