use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, StatusLevel},
};
use crate::events::BusEvent;
use crate::palette::{classifier::COMMAND_PREFIX, FocusTarget};
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state.status_clear_time.is_some_and(|t| Instant::now() >= t) {
                state.status = None;
                state.status_clear_time = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Resize(..) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            if state.show_notifications {
                state.show_notifications = false;
            }
            state.focus = FocusTarget::Dashboard;
            UpdateResult::Handled(None)
        }
        Action::Navigate(path) => {
            if state.router.push(path) {
                state.set_status(format!("Opened {path}"), StatusLevel::Info);
            }
            state.show_notifications = false;
            state.focus = FocusTarget::Dashboard;
            UpdateResult::Handled(None)
        }
        Action::SetThemeMode(mode) => {
            state.set_theme_mode(*mode);
            UpdateResult::Handled(None)
        }
        Action::ToggleTheme => {
            state.set_theme_mode(state.theme_mode.toggled());
            UpdateResult::Handled(None)
        }
        // Dashboard shortcuts go through the bus like any other opener
        Action::OpenSearch => UpdateResult::Handled(Some(Command::Publish(
            BusEvent::open_palette(None),
        ))),
        Action::OpenCommands => UpdateResult::Handled(Some(Command::Publish(
            BusEvent::open_palette(Some(COMMAND_PREFIX.to_string())),
        ))),
        Action::RunScheduler => UpdateResult::Handled(Some(Command::RunScheduler)),
        Action::OperationStarted(msg) => {
            state.active_tasks.push(msg.clone());
            state.set_status(msg.clone(), StatusLevel::Info);
            UpdateResult::Handled(None)
        }
        Action::OperationCompleted(result) => {
            state.active_tasks.pop();
            match result {
                Ok(msg) => state.set_status(msg.clone(), StatusLevel::Success),
                Err(err) => state.set_status(err.clone(), StatusLevel::Error),
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
