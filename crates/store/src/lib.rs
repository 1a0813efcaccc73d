//! Backing key-value stores for labdesk.
//!
//! The catalogue never talks to a concrete store; it is handed an
//! `Arc<dyn KvStore>`. Two implementations ship here:
//!
//! - [`MemoryStore`]: process-local map, used by tests and ephemeral
//!   sessions.
//! - [`FileStore`]: one JSON document per key under a root directory.

pub mod error;
pub mod file;
pub mod memory;

use async_trait::async_trait;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Asynchronous key-value store over JSON values.
///
/// `set` replaces any prior value under the key. Implementations are
/// not required to serialize concurrent writers; last writer wins.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// Store `value` under `key`, replacing whatever was there.
    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError>;
}
