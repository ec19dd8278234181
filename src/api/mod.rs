//! HTTP API
//!
//! ## Endpoints
//!
//! - POST /receipts/process - Score a receipt, returns `{"id": ...}`
//! - GET /receipts/:id/points - Points for a processed receipt, returns `{"points": ...}`
//! - GET /health - Liveness and receipt count

pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use log::info;
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;

use crate::processor::ReceiptProcessor;

pub use error::{ApiError, ApiResult};

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub processor: ReceiptProcessor,
    pub version: String,
}

impl AppState {
    pub fn new(processor: ReceiptProcessor) -> Self {
        Self {
            processor,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/:id/points", get(handlers::get_points))
        .with_state(state)
        .layer(middleware::from_fn(access_log))
        .layer(CatchPanicLayer::new())
}

/// Logs method, path, status and latency for every request.
async fn access_log(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!(
        "{} {} {} {:?}",
        method,
        path,
        response.status().as_u16(),
        start.elapsed()
    );

    response
}
