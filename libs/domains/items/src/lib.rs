//! Items Domain
//!
//! Item catalog stored as a single JSON file, with name search, pagination
//! and cached statistics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/items, /stats)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────────┐
//! │   Service   │     │ StatsAggregator │  ← cache cleared by ChangeNotifier
//! └──────┬──────┘     └──────┬──────────┘
//!        │                   │
//! ┌──────▼───────────────────▼──┐
//! │   ItemStore (JsonFileStore) │  ← whole-file load/save
//! └──────┬──────────────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_items::{
//!     FileWatcher, JsonFileStore, StatsAggregator, StatsCache, handlers, service::ItemService,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(JsonFileStore::new("data/items.json"));
//! let watcher = FileWatcher::watch(store.path())?;
//! let aggregator = Arc::new(StatsAggregator::new(
//!     Arc::clone(&store),
//!     Arc::new(StatsCache::new()),
//!     &watcher,
//! ));
//!
//! let items = handlers::router(ItemService::new(Arc::clone(&store)));
//! let stats = handlers::stats_router(aggregator);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod json_file;
pub mod lookup;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod service;
pub mod stats;
pub mod watcher;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::{ApiDoc, StatsApiDoc};
pub use json_file::JsonFileStore;
pub use models::{CreateItem, Item, ItemPage, ListQuery, StatsSnapshot};
pub use pagination::{PageRequest, PaginationMeta};
pub use repository::ItemStore;
pub use service::ItemService;
pub use stats::{StatsAggregator, StatsCache};
pub use watcher::{ChangeNotifier, FileWatcher, ManualNotifier, Subscription, WatchError};
