use crate::domain::ports::ReceiptStore;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::error::{ReceiptError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for receipts.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, Receipt>>>`: lookups share the read
/// lock, inserts take the write lock, so a reader never observes a
/// half-inserted receipt. Contents live only as long as the process.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, Receipt>>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory receipt store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of receipts stored so far.
    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn create(&self, receipt: Receipt) -> Result<ReceiptId> {
        let id = ReceiptId::generate();

        let mut receipts = self.receipts.write().await;
        match receipts.entry(id.clone()) {
            Entry::Occupied(_) => Err(ReceiptError::IdCollision(id)),
            Entry::Vacant(slot) => {
                slot.insert(receipt);
                Ok(id)
            }
        }
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(id).cloned())
    }
}
