use crate::app::{
    action::Action,
    state::{AppMode, AppState},
};
use crate::palette::FocusTarget;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn map_event_to_action(event: Event, app_state: &AppState) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => map_key(key, app_state),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if app_state.palette.is_open {
        return map_palette_key(key);
    }

    if app_state.mode == AppMode::Help {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    if app_state.show_notifications && app_state.focus == FocusTarget::Notifications {
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down if plain => Some(Action::NotificationNext),
            KeyCode::Char('k') | KeyCode::Up if plain => Some(Action::NotificationPrev),
            KeyCode::Enter | KeyCode::Char('r') if plain => Some(Action::NotificationMarkRead),
            KeyCode::Char('a') if plain => Some(Action::NotificationMarkAllRead),
            KeyCode::Char('d') if plain => Some(Action::NotificationDelete),
            KeyCode::Char('c') if plain => Some(Action::NotificationClearAll),
            KeyCode::Esc | KeyCode::Char('n') if plain => Some(Action::ToggleNotifications),
            _ => None,
        };
        if action.is_some() {
            return action;
        }
    }

    app_state.keymap.get_action(key)
}

fn map_palette_key(key: KeyEvent) -> Option<Action> {
    let command_key = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);

    match key.code {
        KeyCode::Char('k' | 'K') if command_key => Some(Action::TogglePalette),
        KeyCode::Esc => Some(Action::ClosePalette),
        KeyCode::Down => Some(Action::PaletteNext),
        KeyCode::Up => Some(Action::PalettePrev),
        KeyCode::Enter => Some(Action::PaletteActivate),
        KeyCode::Tab => Some(Action::PaletteTab),
        KeyCode::BackTab => Some(Action::PaletteBackTab),
        KeyCode::Backspace => Some(Action::PaletteBackspace),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            Some(Action::PaletteInput(c))
        }
        _ => None,
    }
}
