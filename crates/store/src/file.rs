//! Directory-backed key-value store.
//!
//! Each key maps to `<root>/<key>.json`. Writes go to a sibling temp file
//! first and are renamed into place, so a reader never sees a half-written
//! document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{KvStore, StoreError};

/// File extension for stored documents.
const DOCUMENT_EXT: &str = "json";

/// [`KvStore`] persisting one pretty-printed JSON file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        tracing::debug!(root = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the document path for `key`.
    ///
    /// Keys must be non-empty, must not start with `.`, and may only
    /// contain ASCII alphanumerics, `-`, `_` and `.`.
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{DOCUMENT_EXT}")))
    }
}

/// Reject keys that could escape the root directory or collide with
/// temp files.
fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let path = self.path_for(key)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = self.root.join(format!(".{key}.{DOCUMENT_EXT}.tmp"));
        let bytes = serde_json::to_vec_pretty(&value)?;

        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!(key, bytes = bytes.len(), path = %path.display(), "File store write");
        Ok(())
    }
}
