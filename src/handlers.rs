use crate::errors::AppError;
use crate::models::{PointsResponse, ProcessReceiptResponse, Receipt};
use crate::scoring;
use crate::store::ReceiptStore;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;

const WELCOME_MESSAGE: &str = "Welcome to the receipt points service\n";

/// Shared application state injected into handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Receipts submitted during this process lifetime.
    pub store: Arc<ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<ReceiptStore>) -> Self {
        Self { store }
    }
}

/// GET /
pub async fn home() -> &'static str {
    WELCOME_MESSAGE
}

/// Health check endpoint.
///
/// Returns the service status, version and number of stored receipts.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "receipts": state.store.len().await,
        })),
    )
}

/// POST /receipts/process
///
/// Decodes the raw body as a receipt regardless of the declared content type,
/// stores it and returns the generated id.
///
/// # Errors
///
/// * `BadRequest` - the body could not be read (including the size limit) or is not a receipt.
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ProcessReceiptResponse>, AppError> {
    let body = body.map_err(|e| {
        tracing::warn!("Failed to read request body: {}", e);
        AppError::BadRequest("Failed to read request body".to_string())
    })?;

    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Invalid receipt JSON: {}", e);
        AppError::BadRequest("Invalid JSON data".to_string())
    })?;

    let item_count = receipt.items.len();
    let id = state.store.put(receipt).await;
    tracing::info!(receipt_id = %id, items = item_count, "POST /receipts/process - receipt accepted");

    Ok(Json(ProcessReceiptResponse { id }))
}

/// GET /receipts/:id/points
///
/// Scores the stored receipt on every call; nothing is cached.
///
/// # Errors
///
/// * `NotFound` - no receipt was stored under `id`.
pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, AppError> {
    let receipt = state
        .store
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound("Receipt not found".to_string()))?;

    let breakdown = scoring::score(&receipt);
    let points = breakdown.total();

    tracing::debug!(receipt_id = %id, ?breakdown, "Points breakdown");
    tracing::info!(receipt_id = %id, points, "GET /receipts/{}/points - total points", id);

    Ok(Json(PointsResponse { points }))
}

/// Fallback for known routes hit with the wrong method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Invalid request method".to_string())
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
