//! Change notification for the backing data file.
//!
//! [`ChangeNotifier`] is the seam the stats cache listens on. [`FileWatcher`]
//! drives it from filesystem events; [`ManualNotifier`] lets callers (and
//! tests) fire notifications directly.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use thiserror::Error;

/// Callback invoked on every observed change
pub type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Path has no file name: {0}")]
    InvalidPath(PathBuf),

    #[error("Failed to watch {path}: {source}")]
    Notify {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}

/// Source of "the data changed" notifications.
pub trait ChangeNotifier: Send + Sync {
    /// Register `callback`. It stays registered until the returned
    /// [`Subscription`] is dropped.
    fn on_change(&self, callback: ChangeCallback) -> Subscription;
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    callbacks: HashMap<u64, ChangeCallback>,
}

/// Shared registry of change callbacks.
#[derive(Clone, Default)]
pub struct Listeners {
    table: Arc<Mutex<ListenerTable>>,
}

fn lock(table: &Mutex<ListenerTable>) -> MutexGuard<'_, ListenerTable> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Listeners {
    pub fn subscribe(&self, callback: ChangeCallback) -> Subscription {
        let mut table = lock(&self.table);
        let id = table.next_id;
        table.next_id += 1;
        table.callbacks.insert(id, callback);

        Subscription {
            table: Arc::downgrade(&self.table),
            id,
        }
    }

    /// Invoke every registered callback.
    ///
    /// Callbacks run outside the registry lock, so they may subscribe or
    /// unsubscribe without deadlocking.
    pub fn notify(&self) {
        let callbacks: Vec<ChangeCallback> = lock(&self.table).callbacks.values().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.table).callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle for a registered callback. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    table: Weak<Mutex<ListenerTable>>,
    id: u64,
}

impl Subscription {
    /// Explicitly unsubscribe. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            lock(&table).callbacks.remove(&self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Notifier fired by hand via [`ManualNotifier::notify_change`].
#[derive(Clone, Default)]
pub struct ManualNotifier {
    listeners: Listeners,
}

impl ManualNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify_change(&self) {
        self.listeners.notify();
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ChangeNotifier for ManualNotifier {
    fn on_change(&self, callback: ChangeCallback) -> Subscription {
        self.listeners.subscribe(callback)
    }
}

/// Watches a single file and notifies on every create, modify or remove.
///
/// The parent directory is watched rather than the file itself so that
/// editors which save by writing a new file and renaming it over the old
/// one are still observed. Changes made by this process are reported too.
pub struct FileWatcher {
    path: PathBuf,
    listeners: Listeners,
    _watcher: RecommendedWatcher,
}

fn is_relevant(event: &Event, file_name: &OsString) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Any
    ) && event
        .paths
        .iter()
        .any(|path| path.file_name() == Some(file_name.as_os_str()))
}

impl FileWatcher {
    pub fn watch(path: impl AsRef<Path>) -> Result<Self, WatchError> {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .map(OsString::from)
            .ok_or_else(|| WatchError::InvalidPath(path.clone()))?;
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let listeners = Listeners::default();
        let handler_listeners = listeners.clone();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) if is_relevant(&event, &file_name) => {
                tracing::debug!(kind = ?event.kind, "Data file changed");
                handler_listeners.notify();
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("File watch error: {}", e),
        })
        .map_err(|source| WatchError::Notify {
            path: path.clone(),
            source,
        })?;

        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .map_err(|source| WatchError::Notify {
                path: directory.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), "Watching data file for changes");
        Ok(Self {
            path,
            listeners,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChangeNotifier for FileWatcher {
    fn on_change(&self, callback: ChangeCallback) -> Subscription {
        self.listeners.subscribe(callback)
    }
}
