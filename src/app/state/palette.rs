use crate::domain::admin::AdminError;
use crate::domain::models::{RecentEntry, SearchResultItem};
use crate::palette::{get_commands, CommandCategory, FocusTarget};
use ratatui::widgets::ListState;

/// One row of the palette, tagged by where it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteEntry {
    Command(usize), // Index into `get_commands()`
    Recent(RecentEntry),
    Result(SearchResultItem),
}

impl PaletteEntry {
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            PaletteEntry::Command(i) => get_commands()
                .get(*i)
                .map(|c| c.label.to_string())
                .unwrap_or_default(),
            PaletteEntry::Recent(r) => r.title.clone(),
            PaletteEntry::Result(item) => item.title.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaletteState {
    pub is_open: bool,
    pub query: String,
    pub results: Vec<PaletteEntry>,
    pub active_index: Option<usize>,
    pub selected_category: Option<CommandCategory>,
    pub is_searching: bool,
    /// Tag of the most recent search request. Survives `reset` so responses
    /// from a previous session are still recognised as stale.
    pub search_seq: u64,
    pub focus: FocusTarget,
    pub restore_focus: Option<FocusTarget>,
    pub last_search_error: Option<AdminError>,
    pub list_state: ListState,
}

impl PaletteState {
    /// Back to closed defaults, invalidating any in-flight search.
    pub fn reset(&mut self) {
        let seq = self.search_seq + 1;
        *self = Self {
            search_seq: seq,
            ..Self::default()
        };
    }

    pub fn next_seq(&mut self) -> u64 {
        self.search_seq += 1;
        self.search_seq
    }

    pub fn set_results(&mut self, results: Vec<PaletteEntry>) {
        self.active_index = if results.is_empty() { None } else { Some(0) };
        self.results = results;
        self.list_state.select(self.active_index);
    }

    pub fn set_active(&mut self, index: Option<usize>) {
        self.active_index = index;
        // The list scrolls the selected row into view on the next render
        self.list_state.select(index);
    }

    #[must_use]
    pub fn active_entry(&self) -> Option<&PaletteEntry> {
        self.active_index.and_then(|i| self.results.get(i))
    }
}

/// Circular step through `len` rows. With nothing active, forward lands on the
/// first row and backward on the last.
#[must_use]
pub fn step_index(active: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (active.map(|i| i.min(len - 1)), forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(0), false) => len - 1,
        (Some(i), false) => i - 1,
    })
}
