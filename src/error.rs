use crate::domain::receipt::ReceiptId;
use crate::domain::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("malformed amount: {0:?}")]
    MalformedAmount(String),
    #[error("malformed purchase date: {0:?}")]
    MalformedDate(String),
    #[error("malformed purchase time: {0:?}")]
    MalformedTime(String),
    #[error("receipt not found: {0}")]
    ReceiptNotFound(ReceiptId),
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("invalid receipt document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
    #[error("receipt identifier already in use: {0}")]
    IdCollision(ReceiptId),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationErrors> for ReceiptError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
