//! Application layer containing the receipt processing orchestration.
//!
//! This module defines the `ReceiptService` which acts as the primary entry point
//! for storing receipts and scoring them on lookup. It talks to storage only
//! through the `ReceiptStore` port, so backends stay swappable.

pub mod service;
