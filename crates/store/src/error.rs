/// Errors raised by a [`KvStore`](crate::KvStore) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the underlying medium failed.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document is not valid JSON, or a value could not be encoded.
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key cannot be mapped onto the store's namespace.
    #[error("Invalid store key '{0}'")]
    InvalidKey(String),

    /// The store refused the request (e.g. it is offline or read-only).
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
