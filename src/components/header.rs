use crate::theme::{Theme, ThemeMode};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub route: &'a str,
    pub api_base_url: &'a str,
    pub theme_mode: ThemeMode,
    pub unread: usize,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Separator styles: fg = current segment bg, bg = next segment bg
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let item_bg = self.theme.header_item.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);
        let sep_logo_item = Style::default().fg(logo_bg).bg(item_bg);
        let sep_item_base = Style::default().fg(item_bg).bg(base_bg);

        let mut spans = vec![
            Span::styled(" FOLIO ", self.theme.header_logo),
            Span::styled(SEP_RIGHT, sep_logo_item),
            Span::styled(format!(" {} ", self.route), self.theme.header_item),
            Span::styled(SEP_RIGHT, sep_item_base),
            Span::styled(format!(" {} ", self.api_base_url), self.theme.header),
        ];

        // Right-aligned: theme mode and unread badge
        let mode = format!(" {} ", self.theme_mode.label());
        let badge = (self.unread > 0).then(|| format!(" {} unread ", self.unread));
        let used: usize = spans.iter().map(Span::width).sum();
        let right_width = mode.chars().count() + badge.as_ref().map_or(0, |b| b.chars().count());
        let padding = (area.width as usize).saturating_sub(used + right_width);

        spans.push(Span::styled(" ".repeat(padding), self.theme.header));
        spans.push(Span::styled(mode, self.theme.header_item));
        if let Some(badge) = badge {
            spans.push(Span::styled(badge, self.theme.header_badge));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
