//! JSON file implementation of ItemStore

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::Item;
use crate::repository::ItemStore;

/// Stores the item collection as a pretty-printed JSON array in one file.
///
/// Writes overwrite the file in place. A crash mid-write can leave a
/// truncated file, and concurrent writers are last-writer-wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check that the backing file exists and parses, without keeping the data.
    pub async fn check(&self) -> ItemResult<()> {
        self.load_all().await.map(|_| ())
    }

    fn storage_error(&self, action: &str, err: impl std::fmt::Display) -> ItemError {
        ItemError::Storage(format!(
            "failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}

#[async_trait]
impl ItemStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_all(&self) -> ItemResult<Vec<Item>> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.storage_error("read", e))?;

        let items: Vec<Item> =
            serde_json::from_slice(&raw).map_err(|e| self.storage_error("parse", e))?;

        tracing::debug!(count = items.len(), "Loaded items");
        Ok(items)
    }

    #[instrument(skip(self, items), fields(path = %self.path.display(), count = items.len()))]
    async fn save_all(&self, items: &[Item]) -> ItemResult<()> {
        let data =
            serde_json::to_vec_pretty(items).map_err(|e| self.storage_error("serialize", e))?;

        tokio::fs::write(&self.path, data)
            .await
            .map_err(|e| self.storage_error("write", e))?;

        tracing::debug!("Saved items");
        Ok(())
    }
}
