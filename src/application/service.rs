use crate::domain::points::compute_points;
use crate::domain::ports::ReceiptStoreBox;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::error::{ReceiptError, Result};
use tracing::{debug, info, instrument};

/// Entry point for receipt processing.
///
/// `ReceiptService` owns the storage backend. Receipts handed to
/// [`ReceiptService::process_receipt`] are expected to have passed
/// validation already; points are computed lazily on lookup from a copy of
/// the stored receipt, so no store lock is held while scoring.
pub struct ReceiptService {
    store: ReceiptStoreBox,
}

impl ReceiptService {
    /// Creates a new `ReceiptService` backed by `store`.
    pub fn new(store: ReceiptStoreBox) -> Self {
        Self { store }
    }

    /// Stores a validated receipt and returns its new identifier.
    #[instrument(skip_all, fields(retailer = %receipt.retailer))]
    pub async fn process_receipt(&self, receipt: Receipt) -> Result<ReceiptId> {
        let id = self.store.create(receipt).await?;
        info!(%id, "Stored receipt");
        Ok(id)
    }

    /// Looks up a stored receipt and scores it.
    ///
    /// Fails with `ReceiptNotFound` for unknown identifiers and with the
    /// scoring error if the stored receipt cannot be scored.
    #[instrument(skip_all, fields(%id))]
    pub async fn get_points(&self, id: &ReceiptId) -> Result<u64> {
        let receipt = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| ReceiptError::ReceiptNotFound(id.clone()))?;

        let points = compute_points(&receipt)?;
        debug!(points, "Computed points");
        Ok(points)
    }
}
