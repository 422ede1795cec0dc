use crate::notifications::{Notification, NotificationLevel};
use crate::theme::Theme;
use chrono::{Local, TimeZone};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

pub struct NotificationCenter<'a> {
    pub items: &'a [Notification],
    pub selected: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for NotificationCenter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let unread = self.items.iter().filter(|n| !n.read).count();
        let border = if self.focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("NOTIFICATIONS", self.theme.header_active),
                Span::styled(format!(" {unread} unread "), self.theme.dimmed),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        if self.items.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            if inner.height > 0 && inner.width > 1 {
                buf.set_string(inner.x + 1, inner.y, "All caught up", self.theme.dimmed);
            }
            return;
        }

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, n)| self.item(n, self.focused && i == self.selected))
            .collect();

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(List::new(items).block(block), area, buf, &mut state);
    }
}

impl NotificationCenter<'_> {
    fn item(&self, n: &Notification, selected: bool) -> ListItem<'static> {
        let level_style = self.level_style(n.level);
        let marker = if n.read { "  " } else { "● " };
        let title_style = match (selected, n.read) {
            (true, _) => self.theme.list_selected,
            (false, false) => self.theme.unread,
            (false, true) => self.theme.list_item,
        };
        let time = Local
            .timestamp_millis_opt(n.created_at)
            .single()
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default();

        let mut lines = vec![Line::from(vec![
            Span::styled(marker, level_style),
            Span::styled(n.title.clone(), title_style),
            Span::styled(format!("  {time}"), self.theme.dimmed),
        ])];
        if !n.message.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", n.message),
                self.theme.dimmed,
            )));
        }
        ListItem::new(lines)
    }

    fn level_style(&self, level: NotificationLevel) -> Style {
        match level {
            NotificationLevel::Info => self.theme.status_info,
            NotificationLevel::Success => self.theme.status_success,
            NotificationLevel::Warning => self.theme.status_warn,
            NotificationLevel::Error => self.theme.status_error,
        }
    }
}
