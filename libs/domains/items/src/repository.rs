use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::Item;

/// Whole-collection storage for items.
///
/// The collection is always read and written in full. Implementations are
/// not required to protect against concurrent writers: two overlapping
/// read-modify-write cycles may lose one of the updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Load every stored item, in stored order
    async fn load_all(&self) -> ItemResult<Vec<Item>>;

    /// Replace the stored collection with `items`
    async fn save_all(&self, items: &[Item]) -> ItemResult<()>;
}
