use crate::domain::receipt::Receipt;
use crate::domain::validation::validate_receipt;
use crate::error::Result;
use std::io::Read;

/// Reads a single receipt document from a JSON source.
///
/// This reader wraps any `Read` source (file, stdin) and yields a receipt that
/// has already passed validation, ready to be scored.
pub struct ReceiptReader<R: Read> {
    source: R,
}

impl<R: Read> ReceiptReader<R> {
    /// Creates a new `ReceiptReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Deserializes and validates the receipt.
    ///
    /// Malformed JSON yields `InvalidDocument`; a well-formed document with
    /// bad fields yields `Validation` with every offending field listed.
    pub fn read(self) -> Result<Receipt> {
        let receipt: Receipt = serde_json::from_reader(self.source)?;
        validate_receipt(&receipt)?;
        Ok(receipt)
    }
}
