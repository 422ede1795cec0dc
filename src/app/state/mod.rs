use super::keymap::{KeyConfig, KeyMap};
use super::router::Router;
use crate::notifications::NotificationCenter;
use crate::palette::{FocusTarget, RecentsStore};
use crate::storage::{self, KeyValueStore, MemoryStore, StorageError, THEME_MODE_KEY};
use crate::theme::{Theme, ThemeMode};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub mod palette;

pub use palette::{step_index, PaletteEntry, PaletteState};

pub const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal, // Dashboard and panels
    Help,   // Showing the help overlay
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone)]
pub struct AppState {
    // --- Lifecycle & Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub status: Option<StatusMessage>,
    pub status_clear_time: Option<Instant>,
    pub active_tasks: Vec<String>,
    pub api_base_url: String,

    // --- Focus & Panels ---
    pub focus: FocusTarget,
    pub show_notifications: bool,
    pub notification_index: usize,

    // --- Palette ---
    pub palette: PaletteState,

    // --- Persisted Data ---
    pub recents: RecentsStore,
    pub notifications: NotificationCenter,
    pub store: Arc<dyn KeyValueStore>,

    // --- Navigation ---
    pub router: Router,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
}

impl AppState {
    /// Builds state from whatever the store already holds.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, keys: &KeyConfig) -> Self {
        let theme_mode = load_theme_mode(&*store);
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            status: None,
            status_clear_time: None,
            active_tasks: Vec::new(),
            api_base_url: String::new(),
            focus: FocusTarget::Dashboard,
            show_notifications: false,
            notification_index: 0,
            palette: PaletteState::default(),
            recents: RecentsStore::load(store.clone()),
            notifications: NotificationCenter::load(store.clone()),
            router: Router::default(),
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(keys)),
            theme_mode,
            theme: Theme::from_mode(theme_mode),
            store,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
        });
        self.status_clear_time = Some(Instant::now() + STATUS_TIMEOUT);
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        self.theme = Theme::from_mode(mode);
        if let Err(e) = storage::write_json(&*self.store, THEME_MODE_KEY, &mode) {
            debug!(error = %e, "Theme preference not persisted");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(MemoryStore::new()), &KeyConfig::default())
    }
}

fn load_theme_mode(store: &dyn KeyValueStore) -> ThemeMode {
    match storage::read_json::<ThemeMode>(store, THEME_MODE_KEY) {
        Ok(Some(mode)) => mode,
        Ok(None) => ThemeMode::default(),
        Err(e @ StorageError::Corrupt { .. }) => {
            warn!(error = %e, "Ignoring unreadable theme preference");
            ThemeMode::default()
        }
        Err(e) => {
            debug!(error = %e, "Theme preference unavailable");
            ThemeMode::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_round_trips_through_store() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut state = AppState::new(store.clone(), &KeyConfig::default());
        assert_eq!(state.theme_mode, ThemeMode::System);

        state.set_theme_mode(ThemeMode::Light);
        let reloaded = AppState::new(store, &KeyConfig::default());
        assert_eq!(reloaded.theme_mode, ThemeMode::Light);
        assert_eq!(reloaded.theme, Theme::from_mode(ThemeMode::Light));
    }

    #[test]
    fn test_corrupt_theme_falls_back_to_system() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set(THEME_MODE_KEY, "{not json").unwrap();
        let state = AppState::new(store, &KeyConfig::default());
        assert_eq!(state.theme_mode, ThemeMode::System);
    }

    #[test]
    fn test_unavailable_store_still_builds() {
        let store: Arc<dyn KeyValueStore> = Arc::new(storage::testing::UnavailableStore);
        let mut state = AppState::new(store, &KeyConfig::default());
        state.set_theme_mode(ThemeMode::Dark);
        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert!(state.recents.is_empty());
    }
}
