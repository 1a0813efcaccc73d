//! Process-local key-value store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{KvStore, StoreError};

/// In-memory [`KvStore`] backed by a `HashMap`.
///
/// Counts successful writes so callers can assert that an operation did
/// or did not touch the store. Can be switched offline to exercise
/// failure paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, serde_json::Value>>,
    writes: AtomicUsize,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// While offline, every `get` and `set` fails with
    /// [`StoreError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        self.check_online()?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        self.check_online()?;
        self.entries.write().await.insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(key, "Memory store write");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_replaces_and_counts() {
        let store = MemoryStore::new();
        store.set("k", json!([1])).await.unwrap();
        store.set("k", json!([2])).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!([2])));
        assert_eq!(store.write_count(), 2);
    }

    #[tokio::test]
    async fn offline_store_rejects_requests() {
        let store = MemoryStore::new();
        store.set_offline(true);
        assert_matches!(store.set("k", json!(1)).await, Err(StoreError::Unavailable(_)));
        assert_matches!(store.get("k").await, Err(StoreError::Unavailable(_)));
        assert_eq!(store.write_count(), 0);

        store.set_offline(false);
        assert!(store.set("k", json!(1)).await.is_ok());
    }
}
