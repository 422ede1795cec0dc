use crate::domain::models::RecentEntry;
use crate::storage::{self, KeyValueStore, StorageError, RECENT_SEARCHES_KEY};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

pub const MAX_RECENTS: usize = 5;

/// Most-recently-used list of opened search results.
///
/// Storage failures never escape this type: reads fall back to an empty list
/// and failed writes leave the in-memory list as the only copy.
#[derive(Debug, Clone)]
pub struct RecentsStore {
    store: Arc<dyn KeyValueStore>,
    entries: Vec<RecentEntry>,
}

impl RecentsStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            entries: Vec::new(),
        }
    }

    /// Creates the store and loads whatever is persisted.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let mut recents = Self::new(store);
        recents.reload();
        recents
    }

    pub fn reload(&mut self) {
        self.entries = match storage::read_json::<Vec<RecentEntry>>(&*self.store, RECENT_SEARCHES_KEY) {
            Ok(Some(entries)) => dedup_by_id(entries),
            Ok(None) => Vec::new(),
            Err(e @ StorageError::Corrupt { .. }) => {
                warn!(error = %e, "Discarding unreadable recent searches");
                Vec::new()
            }
            Err(e) => {
                debug!(error = %e, "Recent searches unavailable");
                Vec::new()
            }
        };
    }

    #[must_use]
    pub fn entries(&self) -> &[RecentEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn record(&mut self, entry: RecentEntry) {
        self.record_at(entry, chrono::Utc::now().timestamp_millis());
    }

    /// Moves `entry` to the front with `searched_at = now`. Entries without a
    /// title are ignored.
    pub fn record_at(&mut self, mut entry: RecentEntry, now: i64) {
        if entry.title.trim().is_empty() {
            return;
        }

        self.entries.retain(|e| e.id != entry.id);
        entry.searched_at = now;
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_RECENTS);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.store.remove(RECENT_SEARCHES_KEY) {
            debug!(error = %e, "Failed to clear persisted recent searches");
        }
    }

    fn persist(&self) {
        if let Err(e) = storage::write_json(&*self.store, RECENT_SEARCHES_KEY, &self.entries) {
            debug!(error = %e, "Failed to persist recent searches");
        }
    }
}

/// Keeps the first entry per identity, then caps at [`MAX_RECENTS`].
fn dedup_by_id(entries: Vec<RecentEntry>) -> Vec<RecentEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(e.id.clone()))
        .take(MAX_RECENTS)
        .collect()
}
