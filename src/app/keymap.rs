use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyConfig {
    /// Action name -> key spec, e.g. `toggle_palette = "ctrl+p"`.
    pub custom: Option<HashMap<String, String>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeySpecError {
    #[error("empty key spec")]
    Empty,
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

#[derive(Debug, Default)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();

        global.insert(char_key('q'), Action::Quit);
        global.insert(ctrl('c'), Action::Quit);
        global.insert(ctrl('k'), Action::TogglePalette);
        global.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER),
            Action::TogglePalette,
        );
        global.insert(char_key('/'), Action::OpenSearch);
        global.insert(char_key('>'), Action::OpenCommands);
        global.insert(char_key('n'), Action::ToggleNotifications);
        global.insert(char_key('t'), Action::ToggleTheme);
        global.insert(char_key('p'), Action::RunScheduler);
        global.insert(char_key('?'), Action::ToggleHelp);
        global.insert(char_key('h'), Action::Navigate(crate::app::router::HOME_PATH.to_string()));
        global.insert(key(KeyCode::Esc), Action::CancelMode);

        if let Some(custom) = &config.custom {
            for (name, spec) in custom {
                let Some(action) = action_from_name(name) else {
                    warn!(action = %name, "Ignoring binding for unknown action");
                    continue;
                };
                match parse_key_spec(spec) {
                    Ok(event) => {
                        global.insert(event, action);
                    }
                    Err(e) => warn!(action = %name, spec = %spec, "Ignoring key binding: {e}"),
                }
            }
        }

        Self { global }
    }

    /// Looks up a terminal key event, ignoring kind/state and the implicit
    /// SHIFT that accompanies uppercase and symbol characters.
    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.global.get(&normalize(event)).cloned()
    }
}

fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Parses specs like `"ctrl+k"`, `"super+k"`, `"esc"` or `"?"`.
pub fn parse_key_spec(spec: &str) -> Result<KeyEvent, KeySpecError> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(KeySpecError::Empty);
    }
    // A lone "+" is a key, not a separator
    let (mods, key_part) = match spec.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, k)) => (mods, k),
        None => ("", spec),
    };

    let mut modifiers = KeyModifiers::empty();
    for m in mods.split('+').filter(|m| !m.is_empty()) {
        modifiers |= match m.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "meta" => KeyModifiers::ALT,
            "super" | "cmd" => KeyModifiers::SUPER,
            "shift" => KeyModifiers::SHIFT,
            _ => return Err(KeySpecError::UnknownModifier(m.to_string())),
        };
    }

    let code = match key_part.to_ascii_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        _ => {
            let mut chars = key_part.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(KeySpecError::UnknownKey(key_part.to_string())),
            }
        }
    };

    Ok(normalize(KeyEvent::new(code, modifiers)))
}

/// Actions that can be rebound from the config file.
#[must_use]
pub fn action_from_name(name: &str) -> Option<Action> {
    Some(match name {
        "quit" => Action::Quit,
        "toggle_palette" => Action::TogglePalette,
        "open_search" => Action::OpenSearch,
        "open_commands" => Action::OpenCommands,
        "toggle_notifications" => Action::ToggleNotifications,
        "toggle_theme" => Action::ToggleTheme,
        "toggle_help" => Action::ToggleHelp,
        "run_scheduler" => Action::RunScheduler,
        "home" => Action::Navigate(crate::app::router::HOME_PATH.to_string()),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    #[test]
    fn test_default_bindings() {
        let map = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(map.get_action(ctrl('k')), Some(Action::TogglePalette));
        assert_eq!(
            map.get_action(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER)),
            Some(Action::TogglePalette)
        );
        assert_eq!(map.get_action(char_key('/')), Some(Action::OpenSearch));
        assert_eq!(map.get_action(char_key('x')), None);
    }

    #[test]
    fn test_lookup_ignores_shift_and_kind() {
        let map = KeyMap::from_config(&KeyConfig::default());
        let event = KeyEvent {
            code: KeyCode::Char('?'),
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(map.get_action(event), Some(Action::ToggleHelp));
    }

    #[test]
    fn test_parse_key_spec() {
        assert_eq!(parse_key_spec("ctrl+p"), Ok(ctrl('p')));
        assert_eq!(parse_key_spec("Esc"), Ok(key(KeyCode::Esc)));
        assert_eq!(
            parse_key_spec("ctrl++"),
            Ok(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::CONTROL))
        );
        assert_eq!(parse_key_spec(""), Err(KeySpecError::Empty));
        assert_eq!(
            parse_key_spec("hyper+k"),
            Err(KeySpecError::UnknownModifier("hyper".to_string()))
        );
        assert_eq!(
            parse_key_spec("pagedown"),
            Err(KeySpecError::UnknownKey("pagedown".to_string()))
        );
    }

    #[test]
    fn test_custom_overrides() {
        let mut custom = HashMap::new();
        custom.insert("toggle_palette".to_string(), "ctrl+p".to_string());
        custom.insert("not_an_action".to_string(), "x".to_string());
        custom.insert("toggle_help".to_string(), "bogus+h".to_string());
        let map = KeyMap::from_config(&KeyConfig {
            custom: Some(custom),
        });

        assert_eq!(map.get_action(ctrl('p')), Some(Action::TogglePalette));
        assert_eq!(map.get_action(ctrl('k')), Some(Action::TogglePalette));
        assert_eq!(map.get_action(char_key('x')), None);
    }
}
