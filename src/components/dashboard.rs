use crate::app::router::Router;
use crate::domain::models::RecentEntry;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Landing view: where you are, where you've been, and what you opened
/// recently.
pub struct Dashboard<'a> {
    pub router: &'a Router,
    pub recents: &'a [RecentEntry],
    pub theme: &'a Theme,
    pub focused: bool,
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("DASHBOARD", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let mut left = vec![
            Line::from(Span::styled(" CURRENT PAGE", self.theme.section_header)),
            Line::from(Span::styled(format!("  {}", self.router.current()), self.theme.highlight)),
            Line::from(""),
            Line::from(Span::styled(" RECENTLY OPENED", self.theme.section_header)),
        ];
        if self.recents.is_empty() {
            left.push(Line::from(Span::styled(
                "  Nothing yet. Press Ctrl+K to search.",
                self.theme.dimmed,
            )));
        }
        for recent in self.recents {
            let kind = recent.kind.clone().unwrap_or_default();
            left.push(Line::from(vec![
                Span::styled(format!("  {} ", recent.title), self.theme.list_item),
                Span::styled(kind.label().to_string(), self.theme.dimmed),
            ]));
        }
        Paragraph::new(left)
            .wrap(Wrap { trim: false })
            .render(columns[0], buf);

        let mut right = vec![Line::from(Span::styled(" HISTORY", self.theme.section_header))];
        let rows = columns[1].height.saturating_sub(1) as usize;
        for path in self.router.history().iter().rev().take(rows) {
            right.push(Line::from(Span::styled(format!("  {path}"), self.theme.list_item)));
        }
        Paragraph::new(right).render(columns[1], buf);
    }
}
