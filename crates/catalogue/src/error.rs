use labdesk_store::StoreError;

/// Errors surfaced by [`AssetCatalogue`](crate::AssetCatalogue).
///
/// A missing asset is never an error; lookups return `Option` and deletes
/// return `bool`.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// The backing store rejected a read or write.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The stored catalogue value is not a list of assets.
    #[error("Stored catalogue under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
