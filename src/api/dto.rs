//! Request and response bodies for the HTTP API

use serde::{Deserialize, Serialize};

/// Process receipt response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Get points response
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Receipts scored since startup
    pub receipts: usize,
}
