//! HTTP adapter over [`ReceiptService`].
//!
//! Routes:
//! * `POST /receipts/process` validates and stores a receipt, answering `201 {"id": ...}`.
//! * `GET /receipts/{id}/points` scores a stored receipt, answering `200 {"points": n}`.
//! * `GET /status-check` is a plain-text liveness probe.

pub mod handlers;
pub mod response;

use crate::application::service::ReceiptService;
use crate::error::Result;
use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use response::ApiError;
use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Builds the application router around a shared service.
pub fn router(service: Arc<ReceiptService>) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/:id/points", get(handlers::get_points))
        .route("/status-check", get(handlers::status_check))
        .with_state(service)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    error!(%detail, "Handler panicked");
    ApiError::Panic.into_response()
}

/// Serves the API on `addr` until Ctrl-C is received.
pub async fn serve(addr: SocketAddr, service: Arc<ReceiptService>) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Server is running");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::http::response::ErrorResponse;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_panic_becomes_internal_server_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "Internal Server Error");
        assert!(body.errors.is_none());
    }
}
