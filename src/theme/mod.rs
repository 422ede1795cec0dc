use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod dark;
pub mod light;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Concrete light/dark choice. `System` follows the terminal background
    /// advertised in `COLORFGBG`, defaulting to dark.
    #[must_use]
    pub fn resolve(&self) -> ThemeMode {
        match self {
            ThemeMode::System => system_mode(std::env::var("COLORFGBG").ok().as_deref()),
            other => *other,
        }
    }

    /// Flips the resolved mode, so toggling from `System` lands on an
    /// explicit mode.
    #[must_use]
    pub fn toggled(&self) -> ThemeMode {
        match self.resolve() {
            ThemeMode::Light => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

fn system_mode(colorfgbg: Option<&str>) -> ThemeMode {
    // "fg;bg" (or "fg;default;bg"); 7 and 15 are the light backgrounds
    match colorfgbg.and_then(|v| v.rsplit(';').next()) {
        Some("7" | "15") => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub header_item: Style,
    pub header_active: Style,
    pub header_badge: Style,

    pub footer: Style,
    pub footer_segment_key: Style,
    pub footer_segment_val: Style,

    pub section_header: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
    pub highlight: Style,

    pub kind_article: Style,
    pub kind_project: Style,
    pub kind_user: Style,
    pub published: Style,
    pub draft: Style,

    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,
    pub status_success: Style,
    pub unread: Style,
}

impl Theme {
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode.resolve() {
            ThemeMode::Light => Self::from_palette(&light::LIGHT),
            _ => Self::from_palette(&dark::DARK),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface1),
            border_focus: Style::default().fg(p.accent),

            header: Style::default().bg(p.base).fg(p.text),
            header_logo: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_badge: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer: Style::default().bg(p.crust).fg(p.subtext),
            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),

            section_header: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            list_selected: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),
            highlight: Style::default().bg(dim_color(p.accent, 0.25)).add_modifier(Modifier::BOLD),

            kind_article: Style::default().fg(p.accent),
            kind_project: Style::default().fg(p.peach),
            kind_user: Style::default().fg(p.mauve),
            published: Style::default().fg(p.green),
            draft: Style::default().fg(p.yellow).add_modifier(Modifier::DIM),

            status_info: Style::default().fg(p.accent),
            status_warn: Style::default().fg(p.yellow),
            status_error: Style::default().fg(p.red).add_modifier(Modifier::BOLD),
            status_success: Style::default().fg(p.green),
            unread: Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&dark::DARK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_mode_from_colorfgbg() {
        assert_eq!(system_mode(Some("0;15")), ThemeMode::Light);
        assert_eq!(system_mode(Some("0;default;7")), ThemeMode::Light);
        assert_eq!(system_mode(Some("15;0")), ThemeMode::Dark);
        assert_eq!(system_mode(None), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_lands_on_explicit_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_ne!(ThemeMode::System.toggled(), ThemeMode::System);
    }
}
