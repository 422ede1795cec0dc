use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{step_index, AppState, PaletteEntry, StatusLevel},
};
use crate::domain::models::{EntryKind, RecentEntry};
use crate::palette::{
    classify, cycle_category, filter_commands, focus, get_commands, quick_actions, CommandAction,
    FocusTarget, FocusTrap, QueryMode,
};
use tracing::{debug, info, warn};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TogglePalette => {
            let cmd = if state.palette.is_open {
                close(state, None)
            } else {
                open(state, None)
            };
            UpdateResult::Handled(cmd)
        }
        Action::OpenPalette { query, open: true } => {
            let cmd = if state.palette.is_open {
                // Already open: only a seeded query changes anything
                query.as_ref().and_then(|q| set_query(state, q.clone()))
            } else {
                open(state, query.clone())
            };
            UpdateResult::Handled(cmd)
        }
        Action::OpenPalette { open: false, .. } => {
            let cmd = if state.palette.is_open {
                close(state, None)
            } else {
                None
            };
            UpdateResult::Handled(cmd)
        }
        _ if !state.palette.is_open => {
            if matches!(action, Action::RunSearch { .. } | Action::SearchCompleted { .. }) {
                debug!("Dropping search result for closed palette");
                return UpdateResult::Handled(None);
            }
            UpdateResult::NotHandled
        }
        Action::ClosePalette => UpdateResult::Handled(close(state, None)),
        Action::PaletteInput(c) => {
            if state.palette.focus != FocusTarget::PaletteInput {
                return UpdateResult::Handled(None);
            }
            let mut query = state.palette.query.clone();
            query.push(*c);
            UpdateResult::Handled(set_query(state, query))
        }
        Action::PaletteBackspace => {
            if state.palette.focus != FocusTarget::PaletteInput {
                return UpdateResult::Handled(None);
            }
            let mut query = state.palette.query.clone();
            query.pop();
            UpdateResult::Handled(set_query(state, query))
        }
        Action::PaletteNext => {
            let p = &mut state.palette;
            p.set_active(step_index(p.active_index, p.results.len(), true));
            UpdateResult::Handled(None)
        }
        Action::PalettePrev => {
            let p = &mut state.palette;
            p.set_active(step_index(p.active_index, p.results.len(), false));
            UpdateResult::Handled(None)
        }
        Action::PaletteTab => UpdateResult::Handled(tab(state, true)),
        Action::PaletteBackTab => UpdateResult::Handled(tab(state, false)),
        Action::PaletteActivate => UpdateResult::Handled(activate(state)),
        Action::RunSearch { seq, query } => {
            if *seq != state.palette.search_seq {
                debug!(seq, latest = state.palette.search_seq, "Skipping stale search");
                return UpdateResult::Handled(None);
            }
            state.palette.is_searching = true;
            UpdateResult::Handled(Some(Command::Search {
                seq: *seq,
                query: query.clone(),
            }))
        }
        Action::SearchCompleted { seq, outcome } => {
            if *seq != state.palette.search_seq {
                debug!(seq, latest = state.palette.search_seq, "Discarding stale search response");
                return UpdateResult::Handled(None);
            }
            state.palette.is_searching = false;
            match outcome {
                Ok(items) => {
                    state.palette.last_search_error = None;
                    state
                        .palette
                        .set_results(items.iter().cloned().map(PaletteEntry::Result).collect());
                }
                Err(e) => {
                    warn!(error = %e, query = %state.palette.query, "Search failed");
                    state.palette.last_search_error = Some(e.clone());
                }
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn open(state: &mut AppState, query: Option<String>) -> Option<Command> {
    state.palette.reset();
    state.palette.is_open = true;
    state.palette.restore_focus = Some(state.focus);
    state.palette.focus = FocusTarget::PaletteInput;
    state.focus = FocusTarget::PaletteInput;
    set_query(state, query.unwrap_or_default())
}

/// Resets the session and puts focus back. `effect` is whatever the action
/// that triggered the close wants run; otherwise pending searches are
/// cancelled.
fn close(state: &mut AppState, effect: Option<Command>) -> Option<Command> {
    let captured = state.palette.restore_focus;
    state.palette.reset();
    state.focus = focus::restore_focus(captured, state.show_notifications);
    Some(effect.unwrap_or(Command::CancelSearch))
}

/// Replaces the query and refreshes results for its mode.
fn set_query(state: &mut AppState, query: String) -> Option<Command> {
    state.palette.query = query;
    refresh_results(state)
}

fn refresh_results(state: &mut AppState) -> Option<Command> {
    let p = &mut state.palette;
    match classify(&p.query) {
        QueryMode::Command { filter } => {
            let matches = filter_commands(&filter, p.selected_category);
            p.set_results(matches.into_iter().map(PaletteEntry::Command).collect());
            leave_search(p)
        }
        QueryMode::Empty => {
            let entries = if state.recents.is_empty() {
                quick_actions().into_iter().map(PaletteEntry::Command).collect()
            } else {
                state
                    .recents
                    .entries()
                    .iter()
                    .cloned()
                    .map(PaletteEntry::Recent)
                    .collect()
            };
            p.set_results(entries);
            leave_search(p)
        }
        QueryMode::TooShort => {
            p.set_results(Vec::new());
            leave_search(p)
        }
        QueryMode::Search { query } => {
            // Previous results stay visible until the new response lands
            let seq = p.next_seq();
            p.is_searching = false;
            Some(Command::ScheduleSearch { seq, query })
        }
    }
}

fn leave_search(p: &mut crate::app::state::PaletteState) -> Option<Command> {
    p.next_seq();
    p.is_searching = false;
    p.last_search_error = None;
    Some(Command::CancelSearch)
}

fn tab(state: &mut AppState, forward: bool) -> Option<Command> {
    if matches!(classify(&state.palette.query), QueryMode::Command { .. }) {
        state.palette.selected_category = cycle_category(state.palette.selected_category, forward);
        return refresh_results(state);
    }
    let trap = FocusTrap::palette();
    let next = if forward {
        trap.next(state.palette.focus)
    } else {
        trap.prev(state.palette.focus)
    };
    state.palette.focus = next;
    state.focus = next;
    None
}

fn activate(state: &mut AppState) -> Option<Command> {
    let entry = state.palette.active_entry()?.clone();
    match entry {
        PaletteEntry::Command(index) => {
            let definition = get_commands().into_iter().nth(index)?;
            info!(command = definition.id, "Running palette command");
            let effect = execute_command(state, &definition.action);
            close(state, effect)
        }
        PaletteEntry::Recent(recent) => navigate_to(state, recent),
        PaletteEntry::Result(item) => navigate_to(state, RecentEntry::from(&item)),
    }
}

fn navigate_to(state: &mut AppState, entry: RecentEntry) -> Option<Command> {
    state.recents.record(entry.clone());
    let kind = entry.kind.unwrap_or(EntryKind::Article);
    let Some(path) = kind.edit_path(&entry.id) else {
        debug!(kind = kind.label(), "No edit route for entry type");
        return None;
    };
    state.router.push(&path);
    state.show_notifications = false;
    close(state, None)
}

/// Applies a command's effect to state, returning any async work it needs.
fn execute_command(state: &mut AppState, action: &CommandAction) -> Option<Command> {
    match action {
        CommandAction::Navigate(path) => {
            state.router.push(path);
            state.show_notifications = false;
            None
        }
        CommandAction::SetThemeMode(mode) => {
            state.set_theme_mode(*mode);
            None
        }
        CommandAction::ToggleTheme => {
            state.set_theme_mode(state.theme_mode.toggled());
            None
        }
        CommandAction::RunScheduler => Some(Command::RunScheduler),
        CommandAction::ClearRecents => {
            state.recents.clear();
            state.set_status("Recent searches cleared", StatusLevel::Info);
            None
        }
        CommandAction::OpenNotifications => {
            state.show_notifications = true;
            state.notification_index = 0;
            state.palette.restore_focus = Some(FocusTarget::Notifications);
            None
        }
        CommandAction::MarkAllNotificationsRead => {
            state.notifications.mark_all_read();
            None
        }
    }
}
