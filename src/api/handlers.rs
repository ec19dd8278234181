//! Route handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use log::warn;

use super::dto::{HealthResponse, PointsResponse, ProcessReceiptResponse};
use super::error::ApiResult;
use super::AppState;
use crate::receipt::Receipt;

/// Score a receipt and return its generated id
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let Json(receipt) = body.inspect_err(|e| warn!("Rejected receipt body: {}", e))?;

    receipt
        .validate()
        .inspect_err(|e| warn!("Rejected receipt: {}", e))?;

    let id = state.processor.process(&receipt);
    Ok(Json(ProcessReceiptResponse { id }))
}

/// Look up the points awarded to a receipt
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state
        .processor
        .points(&id)
        .inspect_err(|e| warn!("Points lookup failed: {}", e))?;

    Ok(Json(PointsResponse { points }))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        receipts: state.processor.processed_count(),
    })
}
