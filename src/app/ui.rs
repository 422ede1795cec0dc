use crate::app::state::{AppMode, AppState};
use crate::components::{
    dashboard::Dashboard,
    footer::Footer,
    header::Header,
    modals::{helpers::dim_area, CommandPaletteModal, HelpModal},
    notification_center::NotificationCenter,
};
use crate::palette::FocusTarget;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

const NOTIFICATION_PANEL_WIDTH: u16 = 42;

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub side: Option<Rect>,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, show_side: bool) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let (body, side) = if show_side {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(NOTIFICATION_PANEL_WIDTH.min(main[1].width / 2)),
            ])
            .split(main[1]);
        (cols[0], Some(cols[1]))
    } else {
        (main[1], None)
    };

    AppLayout {
        header: main[0],
        body,
        side,
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let area = f.area();
    let layout = get_layout(area, app_state.show_notifications);
    let theme = &app_state.theme;

    f.render_widget(
        Header {
            route: app_state.router.current(),
            api_base_url: &app_state.api_base_url,
            theme_mode: app_state.theme_mode,
            unread: app_state.notifications.unread_count(),
            theme,
        },
        layout.header,
    );

    if layout.body.width > 0 && layout.body.height > 0 {
        f.render_widget(
            Dashboard {
                router: &app_state.router,
                recents: app_state.recents.entries(),
                theme,
                focused: app_state.focus == FocusTarget::Dashboard,
            },
            layout.body,
        );
    }

    if let Some(side) = layout.side.filter(|r| r.width > 0 && r.height > 0) {
        f.render_widget(
            NotificationCenter {
                items: app_state.notifications.items(),
                selected: app_state.notification_index,
                focused: app_state.focus == FocusTarget::Notifications,
                theme,
            },
            side,
        );
    }

    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    // --- Modals ---
    if app_state.palette.is_open {
        dim_area(f.buffer_mut(), area);
        let mut list_state = app_state.palette.list_state.clone();
        f.render_stateful_widget(
            CommandPaletteModal {
                theme,
                state: &app_state.palette,
                frame_count: app_state.frame_count,
            },
            area,
            &mut list_state,
        );
        app_state.palette.list_state = list_state;
    } else if app_state.mode == AppMode::Help {
        dim_area(f.buffer_mut(), area);
        f.render_widget(HelpModal { theme }, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_dashboard_renders_route() {
        let mut state = AppState::default();
        state.router.push("/admin/articles");
        let text = screen(&mut state);
        assert!(text.contains("DASHBOARD"));
        assert!(text.contains("/admin/articles"));
    }

    #[test]
    fn test_palette_overlays_dashboard() {
        let mut state = AppState::default();
        state.palette.is_open = true;
        let text = screen(&mut state);
        assert!(text.contains("QUICK SEARCH"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = AppState::default();
        state.palette.is_open = true;
        state.show_notifications = true;
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        terminal.draw(|f| draw(f, &mut state)).unwrap();
    }
}
