use crate::domain::receipt::ReceiptId;
use crate::domain::validation::ValidationErrors;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Body of a successful `GET /receipts/{id}/points`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PointsResponse {
    pub points: u64,
}

/// Uniform error body. `errors` carries per-field messages when present.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

/// Failures a handler can report, each with a fixed status and message.
#[derive(Debug)]
pub enum ApiError {
    InvalidPayload,
    Validation(ValidationErrors),
    ReceiptNotFound,
    ProcessingFailed,
    PointsFailed,
    Panic,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPayload | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::ReceiptNotFound => StatusCode::NOT_FOUND,
            Self::ProcessingFailed | Self::PointsFailed | Self::Panic => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::InvalidPayload => "Invalid JSON payload",
            Self::Validation(_) => "Validation failed",
            Self::ReceiptNotFound => "Receipt not found",
            Self::ProcessingFailed => "Failed to process receipt",
            Self::PointsFailed => "Failed to get points",
            Self::Panic => "Internal Server Error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message().to_string();
        let errors = match self {
            Self::Validation(errors) if !errors.is_empty() => Some(errors),
            _ => None,
        };
        (status, Json(ErrorResponse { message, errors })).into_response()
    }
}
