use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};
use crate::palette::FocusTarget;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleNotifications => {
            state.show_notifications = !state.show_notifications;
            if state.show_notifications {
                state.notification_index = 0;
                state.focus = FocusTarget::Notifications;
            } else if state.focus == FocusTarget::Notifications {
                state.focus = FocusTarget::Dashboard;
            }
            UpdateResult::Handled(None)
        }
        Action::NotificationReceived(event) => {
            state
                .notifications
                .push(&event.title, &event.message, event.level);
            // Keep the cursor on the same item as the list grows at the top
            if state.show_notifications && state.notification_index > 0 {
                state.notification_index =
                    (state.notification_index + 1).min(last_index(state));
            }
            UpdateResult::Handled(None)
        }
        _ if !state.show_notifications => UpdateResult::NotHandled,
        Action::NotificationNext => {
            let len = state.notifications.items().len();
            if len > 0 {
                state.notification_index = (state.notification_index + 1) % len;
            }
            UpdateResult::Handled(None)
        }
        Action::NotificationPrev => {
            let len = state.notifications.items().len();
            if len > 0 {
                state.notification_index = if state.notification_index == 0 {
                    len - 1
                } else {
                    state.notification_index - 1
                };
            }
            UpdateResult::Handled(None)
        }
        Action::NotificationMarkRead => {
            if let Some(id) = selected_id(state) {
                state.notifications.mark_read(id);
            }
            UpdateResult::Handled(None)
        }
        Action::NotificationMarkAllRead => {
            state.notifications.mark_all_read();
            UpdateResult::Handled(None)
        }
        Action::NotificationDelete => {
            if let Some(id) = selected_id(state) {
                state.notifications.remove(id);
                state.notification_index = state.notification_index.min(last_index(state));
            }
            UpdateResult::Handled(None)
        }
        Action::NotificationClearAll => {
            state.notifications.clear();
            state.notification_index = 0;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn selected_id(state: &AppState) -> Option<u64> {
    state
        .notifications
        .items()
        .get(state.notification_index)
        .map(|n| n.id)
}

fn last_index(state: &AppState) -> usize {
    state.notifications.items().len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NotificationEvent;
    use crate::notifications::NotificationLevel;

    fn received(title: &str) -> Action {
        Action::NotificationReceived(NotificationEvent {
            title: title.to_string(),
            message: String::new(),
            level: NotificationLevel::Info,
        })
    }

    #[test]
    fn test_toggle_moves_focus() {
        let mut state = AppState::default();
        update(&mut state, &Action::ToggleNotifications);
        assert!(state.show_notifications);
        assert_eq!(state.focus, FocusTarget::Notifications);

        update(&mut state, &Action::ToggleNotifications);
        assert!(!state.show_notifications);
        assert_eq!(state.focus, FocusTarget::Dashboard);
    }

    #[test]
    fn test_panel_actions_ignored_while_hidden() {
        let mut state = AppState::default();
        update(&mut state, &received("Published"));
        assert!(matches!(
            update(&mut state, &Action::NotificationMarkAllRead),
            UpdateResult::NotHandled
        ));
        assert_eq!(state.notifications.unread_count(), 1);
    }

    #[test]
    fn test_mark_and_delete_selected() {
        let mut state = AppState::default();
        for title in ["one", "two", "three"] {
            update(&mut state, &received(title));
        }
        update(&mut state, &Action::ToggleNotifications);

        // Newest first: three, two, one
        update(&mut state, &Action::NotificationPrev);
        assert_eq!(state.notification_index, 2);
        update(&mut state, &Action::NotificationMarkRead);
        assert_eq!(state.notifications.unread_count(), 2);
        assert!(state.notifications.items()[2].read);

        update(&mut state, &Action::NotificationDelete);
        assert_eq!(state.notifications.items().len(), 2);
        assert_eq!(state.notification_index, 1);

        update(&mut state, &Action::NotificationClearAll);
        assert!(state.notifications.items().is_empty());
        assert_eq!(state.notification_index, 0);
    }
}
