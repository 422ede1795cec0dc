use crate::storage::{self, KeyValueStore, StorageError, NOTIFICATIONS_KEY};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

pub const MAX_NOTIFICATIONS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub level: NotificationLevel,
    #[serde(rename = "createdAt", default)]
    pub created_at: i64,
    #[serde(default)]
    pub read: bool,
}

/// Persisted list of notifications, newest first, capped at
/// [`MAX_NOTIFICATIONS`].
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    store: Arc<dyn KeyValueStore>,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            items: Vec::new(),
        }
    }

    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let items = match storage::read_json::<Vec<Notification>>(&*store, NOTIFICATIONS_KEY) {
            Ok(Some(mut items)) => {
                items.truncate(MAX_NOTIFICATIONS);
                items
            }
            Ok(None) => Vec::new(),
            Err(e @ StorageError::Corrupt { .. }) => {
                warn!(error = %e, "Discarding unreadable notifications");
                Vec::new()
            }
            Err(e) => {
                debug!(error = %e, "Notifications unavailable");
                Vec::new()
            }
        };
        Self { store, items }
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn push(&mut self, title: &str, message: &str, level: NotificationLevel) -> u64 {
        self.push_at(title, message, level, chrono::Utc::now().timestamp_millis())
    }

    pub fn push_at(&mut self, title: &str, message: &str, level: NotificationLevel, now: i64) -> u64 {
        let id = self.items.iter().map(|n| n.id).max().map_or(1, |max| max + 1);
        self.items.insert(
            0,
            Notification {
                id,
                title: title.to_string(),
                message: message.to_string(),
                level,
                created_at: now,
                read: false,
            },
        );
        self.items.truncate(MAX_NOTIFICATIONS);
        self.persist();
        id
    }

    pub fn mark_read(&mut self, id: u64) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            if !n.read {
                n.read = true;
                self.persist();
            }
        }
    }

    pub fn mark_all_read(&mut self) {
        if self.items.iter().any(|n| !n.read) {
            for n in &mut self.items {
                n.read = true;
            }
            self.persist();
        }
    }

    pub fn remove(&mut self, id: u64) {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        if self.items.len() != before {
            self.persist();
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(e) = self.store.remove(NOTIFICATIONS_KEY) {
            debug!(error = %e, "Failed to clear persisted notifications");
        }
    }

    fn persist(&self) {
        if let Err(e) = storage::write_json(&*self.store, NOTIFICATIONS_KEY, &self.items) {
            debug!(error = %e, "Failed to persist notifications");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::UnavailableStore;
    use crate::storage::MemoryStore;

    #[test]
    fn test_push_is_newest_first_and_capped() {
        let mut center = NotificationCenter::new(Arc::new(MemoryStore::new()));
        for i in 0..60 {
            center.push_at(&format!("n{i}"), "", NotificationLevel::Info, i);
        }
        assert_eq!(center.items().len(), MAX_NOTIFICATIONS);
        assert_eq!(center.items()[0].title, "n59");
        assert_eq!(center.items().last().unwrap().title, "n10");
        assert_eq!(center.unread_count(), MAX_NOTIFICATIONS);
    }

    #[test]
    fn test_read_and_delete_operations() {
        let mut center = NotificationCenter::new(Arc::new(MemoryStore::new()));
        let a = center.push_at("a", "", NotificationLevel::Success, 1);
        let b = center.push_at("b", "", NotificationLevel::Error, 2);
        let c = center.push_at("c", "", NotificationLevel::Warning, 3);

        center.mark_read(b);
        assert_eq!(center.unread_count(), 2);

        center.remove(a);
        assert_eq!(center.items().iter().map(|n| n.id).collect::<Vec<_>>(), vec![c, b]);

        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);

        center.clear();
        assert!(center.items().is_empty());
    }

    #[test]
    fn test_persisted_and_reloaded() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut center = NotificationCenter::new(store.clone());
        center.push_at("Scheduler", "Published 2", NotificationLevel::Success, 5);

        let reloaded = NotificationCenter::load(store);
        assert_eq!(reloaded.items(), center.items());
        assert_eq!(reloaded.items()[0].level, NotificationLevel::Success);
    }

    #[test]
    fn test_ids_stay_unique_after_reload() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut center = NotificationCenter::new(store.clone());
        let first = center.push_at("a", "", NotificationLevel::Info, 1);

        let mut reloaded = NotificationCenter::load(store);
        let second = reloaded.push_at("b", "", NotificationLevel::Info, 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_unavailable_storage_keeps_session_list() {
        let mut center = NotificationCenter::load(Arc::new(UnavailableStore));
        center.push_at("a", "", NotificationLevel::Info, 1);
        assert_eq!(center.items().len(), 1);
    }
}
