//! Application state management.
//!
//! The state contains:
//! - Configuration
//! - The JSON file store shared by the item service and the stats aggregator
//! - The stats aggregator and the file watcher feeding it

use domain_items::{FileWatcher, JsonFileStore, StatsAggregator, StatsCache};
use std::sync::Arc;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each router (inexpensive Arc clones).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    pub store: Arc<JsonFileStore>,
    pub stats: Arc<StatsAggregator<JsonFileStore>>,
    /// Kept alive for as long as the stats cache should be invalidated
    pub watcher: Arc<FileWatcher>,
}

impl AppState {
    /// Open the data file store and start watching it for changes.
    pub fn new(config: Config) -> eyre::Result<Self> {
        let store = Arc::new(JsonFileStore::new(config.storage.data_path.clone()));
        let watcher = Arc::new(FileWatcher::watch(store.path())?);
        let stats = Arc::new(StatsAggregator::new(
            Arc::clone(&store),
            Arc::new(StatsCache::new()),
            watcher.as_ref(),
        ));

        Ok(Self {
            config,
            store,
            stats,
            watcher,
        })
    }
}
