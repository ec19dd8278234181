//! In-memory score storage keyed by receipt id.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Errors returned by [`ScoreStore`] lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No score has been stored under this id.
    #[error("receipt {0} not found")]
    NotFound(String),
}

/// Thread-safe map from receipt id to awarded points.
///
/// Values are statically typed, so a lookup either finds points or nothing.
/// Entries live for the life of the process and are never evicted.
#[derive(Debug, Default)]
pub struct ScoreStore {
    scores: RwLock<HashMap<String, u64>>,
}

impl ScoreStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ScoreStore {
            scores: RwLock::new(HashMap::new()),
        }
    }

    /// Stores `points` under `id`, replacing any previous value.
    pub fn set(&self, id: impl Into<String>, points: u64) {
        // Poisoning cannot leave a half-written entry; keep serving.
        let mut scores = self.scores.write().unwrap_or_else(PoisonError::into_inner);
        scores.insert(id.into(), points);
    }

    /// Returns the points stored under `id`.
    pub fn get(&self, id: &str) -> Result<u64, StoreError> {
        let scores = self.scores.read().unwrap_or_else(PoisonError::into_inner);
        scores
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Number of stored scores.
    pub fn len(&self) -> usize {
        self.scores
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_set_then_get() {
        let store = ScoreStore::new();
        store.set("abc", 42);
        assert_eq!(store.get("abc"), Ok(42));
    }

    #[test]
    fn test_get_missing() {
        let store = ScoreStore::new();
        assert_eq!(
            store.get("missing-id"),
            Err(StoreError::NotFound("missing-id".to_string()))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let store = ScoreStore::new();
        store.set("abc", 1);
        store.set("abc", 2);
        assert_eq!(store.get("abc"), Ok(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_writers() {
        let store = Arc::new(ScoreStore::new());

        let handles: Vec<_> = (0..8u64)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..100u64 {
                        store.set(format!("{}-{}", worker, i), worker * 1000 + i);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 800);
        assert_eq!(store.get("3-42"), Ok(3042));
    }
}
