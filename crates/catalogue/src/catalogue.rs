//! The asset catalogue and its write-through persistence.
//!
//! The in-memory index is the source of truth at runtime. The backing
//! store holds a mirror: the full, ordered asset list under one key,
//! read once when the catalogue first becomes ready and overwritten after
//! every mutation.
//!
//! Every operation awaits [`AssetCatalogue::ready`] before touching the
//! index, so a query can never run against a half-loaded catalogue.
//! Mutations hold the index write lock across their trailing persist;
//! writes from one catalogue therefore reach the store in mutation order.

use std::sync::Arc;

use indexmap::IndexMap;
use labdesk_core::assets::{
    Asset, AssetCategory, AssetPatch, AssetStats, AssetType, ASSET_CATEGORIES,
};
use labdesk_core::types::RecordId;
use labdesk_store::{KvStore, StoreError};
use tokio::sync::{OnceCell, RwLock, RwLockReadGuard};
use tokio::task::JoinHandle;

use crate::error::CatalogueError;

/// Store key the catalogue is mirrored under unless overridden.
pub const DEFAULT_CATALOGUE_KEY: &str = "asset-catalogue";

type Index = IndexMap<RecordId, Asset>;

/// In-memory asset index mirrored to a [`KvStore`].
///
/// Share it as `Arc<AssetCatalogue>`. Two catalogues on the same store key
/// race on persist with no coordination; that configuration is not
/// supported.
pub struct AssetCatalogue {
    store: Arc<dyn KvStore>,
    key: String,
    index: RwLock<Index>,
    loaded: OnceCell<()>,
}

impl AssetCatalogue {
    /// Create a catalogue over `store` using [`DEFAULT_CATALOGUE_KEY`].
    ///
    /// Nothing is read from the store until [`ready`](Self::ready) is
    /// awaited (directly or through any other operation) or
    /// [`spawn_load`](Self::spawn_load) is called.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_key(store, DEFAULT_CATALOGUE_KEY)
    }

    /// Create a catalogue mirrored under a custom store key.
    pub fn with_key(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            index: RwLock::new(IndexMap::new()),
            loaded: OnceCell::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the initial load has completed.
    pub fn is_ready(&self) -> bool {
        self.loaded.initialized()
    }

    // -----------------------------------------------------------------------
    // Loading and persistence
    // -----------------------------------------------------------------------

    /// Start the initial load in the background and return immediately.
    ///
    /// A failed background load is logged; the next call to
    /// [`ready`](Self::ready) retries it.
    pub fn spawn_load(self: &Arc<Self>) -> JoinHandle<()> {
        let catalogue = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = catalogue.ready().await {
                tracing::error!(key = %catalogue.key, error = %e, "Background catalogue load failed");
            }
        })
    }

    /// Resolve once the index has been loaded from the store.
    ///
    /// The first caller performs the load; concurrent callers wait for it.
    /// An absent store value yields an empty catalogue.
    pub async fn ready(&self) -> Result<(), CatalogueError> {
        self.loaded.get_or_try_init(|| self.load()).await?;
        Ok(())
    }

    async fn load(&self) -> Result<(), CatalogueError> {
        let assets: Vec<Asset> = match self.store.get(&self.key).await? {
            Some(value) => serde_json::from_value(value).map_err(|source| {
                CatalogueError::Corrupt {
                    key: self.key.clone(),
                    source,
                }
            })?,
            None => Vec::new(),
        };

        let mut index = self.index.write().await;
        for asset in assets {
            index.insert(asset.id.clone(), asset);
        }
        tracing::info!(key = %self.key, asset_count = index.len(), "Asset catalogue loaded");
        Ok(())
    }

    /// Write the whole index to the store, replacing the prior value.
    pub async fn persist(&self) -> Result<(), CatalogueError> {
        let index = self.read_index().await?;
        self.write_index(&index).await
    }

    async fn write_index(&self, index: &Index) -> Result<(), CatalogueError> {
        let assets: Vec<&Asset> = index.values().collect();
        let value = serde_json::to_value(&assets).map_err(StoreError::from)?;
        self.store.set(&self.key, value).await?;
        tracing::debug!(key = %self.key, asset_count = assets.len(), "Asset catalogue persisted");
        Ok(())
    }

    async fn read_index(&self) -> Result<RwLockReadGuard<'_, Index>, CatalogueError> {
        self.ready().await?;
        Ok(self.index.read().await)
    }

    async fn collect_where<F>(&self, predicate: F) -> Result<Vec<Asset>, CatalogueError>
    where
        F: Fn(&Asset) -> bool,
    {
        let index = self.read_index().await?;
        Ok(index.values().filter(|a| predicate(a)).cloned().collect())
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Insert or overwrite the asset at `asset.id`, then persist.
    ///
    /// Overwriting keeps the asset's original position in the listing.
    pub async fn add(&self, asset: Asset) -> Result<Asset, CatalogueError> {
        self.ready().await?;
        let mut index = self.index.write().await;
        let replaced = index.insert(asset.id.clone(), asset.clone()).is_some();
        self.write_index(&index).await?;
        tracing::debug!(asset_id = %asset.id, replaced, "Asset stored");
        Ok(asset)
    }

    /// Merge `patch` over the stored asset and persist.
    ///
    /// Returns `None` without writing when `id` is unknown. An empty patch
    /// returns the stored asset unchanged and skips the write.
    pub async fn update(
        &self,
        id: &str,
        patch: AssetPatch,
    ) -> Result<Option<Asset>, CatalogueError> {
        self.ready().await?;
        let mut index = self.index.write().await;
        let Some(asset) = index.get_mut(id) else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(asset.clone()));
        }
        asset.apply(patch);
        let updated = asset.clone();
        self.write_index(&index).await?;
        tracing::debug!(asset_id = %id, "Asset updated");
        Ok(Some(updated))
    }

    /// Remove the asset if present. Persists only when something was
    /// removed.
    pub async fn delete(&self, id: &str) -> Result<bool, CatalogueError> {
        self.ready().await?;
        let mut index = self.index.write().await;
        if index.shift_remove(id).is_none() {
            return Ok(false);
        }
        self.write_index(&index).await?;
        tracing::debug!(asset_id = %id, "Asset deleted");
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub async fn get(&self, id: &str) -> Result<Option<Asset>, CatalogueError> {
        let index = self.read_index().await?;
        Ok(index.get(id).cloned())
    }

    /// Every asset, in index order.
    pub async fn list_all(&self) -> Result<Vec<Asset>, CatalogueError> {
        self.collect_where(|_| true).await
    }

    pub async fn get_by_type(&self, asset_type: AssetType) -> Result<Vec<Asset>, CatalogueError> {
        self.collect_where(|a| a.asset_type == asset_type).await
    }

    /// Assets whose category equals `category` exactly. Uncategorised
    /// assets never match.
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Asset>, CatalogueError> {
        self.collect_where(|a| a.category.as_deref() == Some(category)).await
    }

    pub async fn get_protected(&self) -> Result<Vec<Asset>, CatalogueError> {
        self.collect_where(|a| a.protected).await
    }

    /// Case-insensitive substring search over name, tags and description.
    ///
    /// No ranking and no pagination; an empty query matches everything.
    pub async fn search(&self, query: &str) -> Result<Vec<Asset>, CatalogueError> {
        let needle = query.to_lowercase();
        self.collect_where(|a| a.matches_lowercase(&needle)).await
    }

    /// Totals from a full scan of the index.
    pub async fn stats(&self) -> Result<AssetStats, CatalogueError> {
        let index = self.read_index().await?;
        Ok(AssetStats::from_assets(index.values()))
    }

    /// The fixed category set with `count` computed from the current index.
    pub async fn categories(&self) -> Result<Vec<AssetCategory>, CatalogueError> {
        let index = self.read_index().await?;
        Ok(ASSET_CATEGORIES
            .iter()
            .map(|category| AssetCategory {
                count: index
                    .values()
                    .filter(|a| a.category.as_deref() == Some(category.id))
                    .count(),
                ..category.clone()
            })
            .collect())
    }
}
