//! Cached collection statistics.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::StatsSnapshot;
use crate::repository::ItemStore;
use crate::watcher::{ChangeNotifier, Subscription};

#[derive(Debug, Default)]
struct CacheState {
    snapshot: Option<StatsSnapshot>,
    /// Bumped on every invalidation
    generation: u64,
}

/// Holds the last computed snapshot until the data changes.
///
/// A computation records the generation it started from and may only store
/// its result if no invalidation happened in between, so a change observed
/// mid-computation never leaves a stale snapshot behind.
#[derive(Debug, Default)]
pub struct StatsCache {
    state: Mutex<CacheState>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self) -> Option<StatsSnapshot> {
        self.state().snapshot
    }

    pub fn is_valid(&self) -> bool {
        self.state().snapshot.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.state().generation
    }

    pub fn invalidate(&self) {
        let mut state = self.state();
        state.snapshot = None;
        state.generation = state.generation.wrapping_add(1);
    }

    /// Store `snapshot` if the cache has not been invalidated since
    /// `generation` was read. Returns whether it was stored.
    pub fn store_if_current(&self, generation: u64, snapshot: StatsSnapshot) -> bool {
        let mut state = self.state();
        if state.generation != generation {
            return false;
        }
        state.snapshot = Some(snapshot);
        true
    }
}

/// Computes `{ total, averagePrice }` over the whole store, served from
/// [`StatsCache`] while the data file is unchanged.
///
/// Subscribes to the notifier on construction; [`shutdown`](Self::shutdown)
/// or dropping the aggregator unsubscribes.
pub struct StatsAggregator<S: ItemStore> {
    store: Arc<S>,
    cache: Arc<StatsCache>,
    subscription: Mutex<Option<Subscription>>,
}

impl<S: ItemStore> StatsAggregator<S> {
    pub fn new(store: Arc<S>, cache: Arc<StatsCache>, notifier: &dyn ChangeNotifier) -> Self {
        let invalidate = Arc::clone(&cache);
        let subscription = notifier.on_change(Arc::new(move || {
            invalidate.invalidate();
            tracing::debug!("Stats cache invalidated");
        }));

        Self {
            store,
            cache,
            subscription: Mutex::new(Some(subscription)),
        }
    }

    pub fn cache(&self) -> &StatsCache {
        &self.cache
    }

    /// Return cached stats, computing them from the store when absent.
    #[instrument(skip(self))]
    pub async fn get_stats(&self) -> ItemResult<StatsSnapshot> {
        if let Some(snapshot) = self.cache.get() {
            tracing::debug!("Serving stats from cache");
            return Ok(snapshot);
        }

        let generation = self.cache.generation();
        let items = self.store.load_all().await?;
        let snapshot = StatsSnapshot::compute(&items);

        if !self.cache.store_if_current(generation, snapshot) {
            tracing::debug!("Data changed during stats computation, not caching");
        }
        Ok(snapshot)
    }

    /// Stop listening for changes. Later calls are no-ops.
    pub fn shutdown(&self) {
        let subscription = self
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if subscription.is_some() {
            tracing::info!("Stats aggregator unsubscribed from change notifications");
        }
    }
}
