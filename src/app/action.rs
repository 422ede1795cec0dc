use crate::app::command::Command;
use crate::domain::admin::AdminError;
use crate::domain::models::SearchResultItem;
use crate::events::NotificationEvent;
use crate::theme::ThemeMode;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Palette ---
    TogglePalette,                                   // Ctrl/Cmd+K
    OpenPalette { query: Option<String>, open: bool }, // External open event
    ClosePalette,                                    // Esc
    PaletteInput(char),                              // Append to the query
    PaletteBackspace,                                // Delete the last query char
    PaletteNext,                                     // ArrowDown
    PalettePrev,                                     // ArrowUp
    PaletteActivate,                                 // Enter
    PaletteTab,                                      // Category cycle or focus trap
    PaletteBackTab,                                  // Shift+Tab
    OpenSearch,                                      // Dashboard shortcut (/)
    OpenCommands,                                    // Dashboard shortcut (>)

    // --- Notification Center ---
    ToggleNotifications,
    NotificationNext,
    NotificationPrev,
    NotificationMarkRead,
    NotificationMarkAllRead,
    NotificationDelete,
    NotificationClearAll,

    // --- Shell ---
    Navigate(String),
    SetThemeMode(ThemeMode),
    ToggleTheme,
    ToggleHelp,
    CancelMode,
    RunScheduler,

    // --- Async Results ---
    RunSearch { seq: u64, query: String }, // Debounce window elapsed
    SearchCompleted {
        seq: u64,
        outcome: Result<Vec<SearchResultItem>, AdminError>,
    },
    NotificationReceived(NotificationEvent),
    OperationStarted(String),
    OperationCompleted(Result<String, String>),
}
