use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use tracing::trace;

/// Runs `action` through each feature until one claims it. The palette goes
/// first so that it owns the keyboard while open.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let handlers: [fn(&mut AppState, &Action) -> UpdateResult; 3] = [
        features::palette::update,
        features::notifications::update,
        features::ui::update,
    ];

    for handler in handlers {
        if let UpdateResult::Handled(command) = handler(state, &action) {
            return command;
        }
    }
    trace!(?action, "Unhandled action");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::PaletteEntry;
    use crate::domain::models::{EntryId, EntryKind, RecentEntry, SearchResultItem};
    use crate::palette::{get_commands, CommandCategory, FocusTarget};

    fn open_with(state: &mut AppState, query: &str) -> Vec<Option<Command>> {
        let mut commands = vec![update(state, Action::TogglePalette)];
        for c in query.chars() {
            commands.push(update(state, Action::PaletteInput(c)));
        }
        commands
    }

    fn result(id: &str, kind: EntryKind) -> SearchResultItem {
        SearchResultItem {
            id: EntryId(id.to_string()),
            title: format!("Entry {id}"),
            kind,
            published: true,
        }
    }

    fn show_results(state: &mut AppState, items: Vec<SearchResultItem>) {
        let seq = state.palette.search_seq;
        update(
            state,
            Action::SearchCompleted {
                seq,
                outcome: Ok(items),
            },
        );
    }

    #[test]
    fn test_open_shows_recents_most_recent_first() {
        let mut state = AppState::default();
        for i in 0..5 {
            state.recents.record_at(
                RecentEntry {
                    id: EntryId(i.to_string()),
                    title: format!("Recent {i}"),
                    kind: Some(EntryKind::Article),
                    searched_at: 0,
                },
                i64::from(i),
            );
        }

        open_with(&mut state, "");
        let titles: Vec<String> = state.palette.results.iter().map(PaletteEntry::title).collect();
        assert_eq!(
            titles,
            vec!["Recent 4", "Recent 3", "Recent 2", "Recent 1", "Recent 0"]
        );
        assert_eq!(state.palette.active_index, Some(0));
    }

    #[test]
    fn test_open_without_recents_shows_quick_actions() {
        let mut state = AppState::default();
        open_with(&mut state, "");
        assert!(!state.palette.results.is_empty());
        let commands = get_commands();
        assert!(state.palette.results.iter().all(|e| matches!(
            e,
            PaletteEntry::Command(i) if commands[*i].category == CommandCategory::Create
        )));
    }

    #[test]
    fn test_command_filter_with_category() {
        let mut state = AppState::default();
        open_with(&mut state, ">the");
        update(&mut state, Action::PaletteTab);
        assert_eq!(state.palette.selected_category, Some(CommandCategory::Navigation));

        let commands = get_commands();
        let ids: Vec<&str> = state
            .palette
            .results
            .iter()
            .filter_map(|e| match e {
                PaletteEntry::Command(i) => Some(commands[*i].id),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec!["nav-dashboard", "nav-media", "nav-settings", "nav-site"]);

        // Shift+Tab from the first category clears the filter
        update(&mut state, Action::PaletteBackTab);
        assert_eq!(state.palette.selected_category, None);
    }

    #[test]
    fn test_short_query_issues_no_search() {
        let mut state = AppState::default();
        let commands = open_with(&mut state, "a");
        assert!(state.palette.results.is_empty());
        assert_eq!(state.palette.active_index, None);
        assert!(!state.palette.is_searching);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, Some(Command::ScheduleSearch { .. }))));
    }

    #[test]
    fn test_arrow_down_wraps() {
        let mut state = AppState::default();
        open_with(&mut state, "entry");
        show_results(
            &mut state,
            vec![
                result("1", EntryKind::Article),
                result("2", EntryKind::Project),
                result("3", EntryKind::User),
            ],
        );
        state.palette.set_active(Some(2));
        update(&mut state, Action::PaletteNext);
        assert_eq!(state.palette.active_index, Some(0));
        update(&mut state, Action::PalettePrev);
        assert_eq!(state.palette.active_index, Some(2));
    }

    #[test]
    fn test_shortcut_toggles_but_open_event_does_not() {
        let mut state = AppState::default();
        update(&mut state, Action::TogglePalette);
        assert!(state.palette.is_open);
        update(&mut state, Action::TogglePalette);
        assert!(!state.palette.is_open);

        let open = Action::OpenPalette {
            query: Some("rust".to_string()),
            open: true,
        };
        update(&mut state, open.clone());
        update(&mut state, open);
        assert!(state.palette.is_open);
        assert_eq!(state.palette.query, "rust");

        update(
            &mut state,
            Action::OpenPalette {
                query: None,
                open: false,
            },
        );
        assert!(!state.palette.is_open);
    }

    #[test]
    fn test_activate_result_records_and_navigates() {
        let mut state = AppState::default();
        open_with(&mut state, "entry");
        show_results(&mut state, vec![result("42", EntryKind::Project)]);

        let cmd = update(&mut state, Action::PaletteActivate);
        assert_eq!(cmd, Some(Command::CancelSearch));
        assert!(!state.palette.is_open);
        assert_eq!(state.router.current(), "/admin/projects/edit/42");
        assert_eq!(state.recents.entries()[0].id, EntryId("42".to_string()));
        assert_eq!(state.focus, FocusTarget::Dashboard);
    }

    #[test]
    fn test_unknown_kind_stays_open_but_is_recorded() {
        let mut state = AppState::default();
        open_with(&mut state, "entry");
        show_results(
            &mut state,
            vec![result("9", EntryKind::Unknown("Page".to_string()))],
        );

        let cmd = update(&mut state, Action::PaletteActivate);
        assert_eq!(cmd, None);
        assert!(state.palette.is_open);
        assert_eq!(state.router.current(), crate::app::router::HOME_PATH);
        assert_eq!(state.recents.len(), 1);
    }

    #[test]
    fn test_command_runs_and_closes() {
        let mut state = AppState::default();
        open_with(&mut state, ">light");
        let cmd = update(&mut state, Action::PaletteActivate);
        assert_eq!(cmd, Some(Command::CancelSearch));
        assert!(!state.palette.is_open);
        assert_eq!(state.theme_mode, crate::theme::ThemeMode::Light);
        // Commands never touch recents
        assert!(state.recents.is_empty());
    }

    #[test]
    fn test_focus_restored_to_visible_panel() {
        let mut state = AppState::default();
        update(&mut state, Action::ToggleNotifications);
        assert_eq!(state.focus, FocusTarget::Notifications);

        update(&mut state, Action::TogglePalette);
        assert_eq!(state.focus, FocusTarget::PaletteInput);
        update(&mut state, Action::ClosePalette);
        assert_eq!(state.focus, FocusTarget::Notifications);

        // Panel hidden while the palette was open: fall back to the dashboard
        update(&mut state, Action::TogglePalette);
        state.show_notifications = false;
        update(&mut state, Action::ClosePalette);
        assert_eq!(state.focus, FocusTarget::Dashboard);
    }

    #[test]
    fn test_tab_moves_focus_outside_command_mode() {
        let mut state = AppState::default();
        open_with(&mut state, "ab");
        update(&mut state, Action::PaletteTab);
        assert_eq!(state.palette.focus, FocusTarget::PaletteResults);

        // Typing is ignored while the results have focus
        update(&mut state, Action::PaletteInput('c'));
        assert_eq!(state.palette.query, "ab");

        update(&mut state, Action::PaletteTab);
        assert_eq!(state.palette.focus, FocusTarget::PaletteInput);
    }

    #[test]
    fn test_search_error_keeps_previous_results() {
        let mut state = AppState::default();
        open_with(&mut state, "entry");
        show_results(&mut state, vec![result("1", EntryKind::Article)]);

        update(&mut state, Action::PaletteInput('s'));
        let seq = state.palette.search_seq;
        update(
            &mut state,
            Action::SearchCompleted {
                seq,
                outcome: Err(crate::domain::admin::AdminError::Status(502)),
            },
        );
        assert_eq!(state.palette.results.len(), 1);
        assert!(state.palette.last_search_error.is_some());
    }
}
