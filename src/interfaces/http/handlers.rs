use super::response::{ApiError, PointsResponse, ProcessResponse};
use crate::application::service::ReceiptService;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::domain::validation::validate_receipt;
use crate::error::ReceiptError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{error, warn};

pub type AppState = Arc<ReceiptService>;

/// POST /receipts/process
pub async fn process_receipt(
    State(service): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<(StatusCode, Json<ProcessResponse>), ApiError> {
    let Json(receipt) = payload.map_err(|rejection| {
        warn!(%rejection, "Rejected receipt payload");
        ApiError::InvalidPayload
    })?;

    validate_receipt(&receipt).map_err(ApiError::Validation)?;

    let id = service.process_receipt(receipt).await.map_err(|e| {
        error!("Error processing receipt: {}", e);
        ApiError::ProcessingFailed
    })?;

    Ok((StatusCode::CREATED, Json(ProcessResponse { id })))
}

/// GET /receipts/{id}/points
pub async fn get_points(
    State(service): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let id = ReceiptId::from(id);
    match service.get_points(&id).await {
        Ok(points) => Ok(Json(PointsResponse { points })),
        Err(ReceiptError::ReceiptNotFound(_)) => Err(ApiError::ReceiptNotFound),
        Err(e) => {
            error!("Error getting points for receipt {}: {}", id, e);
            Err(ApiError::PointsFailed)
        }
    }
}

/// GET /status-check
pub async fn status_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Status Check: OK")
}
