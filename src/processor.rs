//! Receipt processing service.
//!
//! Scores a receipt, issues it a fresh id and records the points in the
//! injected [`ScoreStore`].

use crate::error::Result;
use crate::points::calculate_points;
use crate::receipt::Receipt;
use crate::store::ScoreStore;
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

/// Scores receipts and serves their points by id.
///
/// Cloning is cheap; clones share the same store.
#[derive(Debug, Clone)]
pub struct ReceiptProcessor {
    store: Arc<ScoreStore>,
}

impl ReceiptProcessor {
    /// Creates a processor backed by `store`.
    pub fn new(store: Arc<ScoreStore>) -> Self {
        ReceiptProcessor { store }
    }

    /// Scores `receipt` and stores the points under a newly generated id.
    ///
    /// Scoring never fails; malformed fields only lower the score.
    pub fn process(&self, receipt: &Receipt) -> String {
        let points = calculate_points(receipt);
        let id = Uuid::new_v4().to_string();

        self.store.set(id.clone(), points);
        info!("Processed receipt {} for {} points", id, points);

        id
    }

    /// Returns the points awarded to the receipt with the given id.
    pub fn points(&self, id: &str) -> Result<u64> {
        let points = self.store.get(id)?;
        debug!("Looked up receipt {}: {} points", id, points);
        Ok(points)
    }

    /// Number of receipts processed so far.
    pub fn processed_count(&self) -> usize {
        self.store.len()
    }
}

impl Default for ReceiptProcessor {
    fn default() -> Self {
        Self::new(Arc::new(ScoreStore::new()))
    }
}
