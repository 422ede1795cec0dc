mod groups;
mod types;

use crate::app::state::{AppState, StatusLevel};
use crate::theme::Theme;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

pub struct Footer<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = match &state.status {
            Some(status) => {
                let style = match status.level {
                    StatusLevel::Info => theme.status_info,
                    StatusLevel::Success => theme.status_success,
                    StatusLevel::Warning => theme.status_warn,
                    StatusLevel::Error => theme.status_error,
                };
                Span::styled(format!("  {}  ", status.text), style)
            }
            None => Span::styled("  READY  ", theme.status_success),
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        // Background tasks
        if !state.active_tasks.is_empty() {
            let frame = SPINNER[(state.frame_count % SPINNER.len() as u64) as usize];
            spans.push(Span::styled(
                format!(" {frame} {} ", state.active_tasks.join(", ")),
                theme.status_info,
            ));
            spans.push(Span::raw("  "));
        }

        let available_width = area.width.saturating_sub(4) as usize; // Margin
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(state) {
            let Some(first_item) = group.items.first() else {
                continue;
            };

            // Check if we can fit at least the first item of the group
            let first_item_width = first_item.key.len() + first_item.desc.len() + 4;
            if current_width + first_item_width > available_width {
                break;
            }

            // Group name as a subtle label if there's plenty of space
            if area.width > 100 {
                let group_label = Span::styled(format!("{}: ", group.name), theme.dimmed);
                if current_width + group_label.width() + first_item_width < available_width {
                    current_width += group_label.width();
                    spans.push(group_label);
                }
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);

                let item_width = key_str.chars().count() + desc_str.chars().count();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                let (key_style, val_style) = if item.highlighted {
                    (theme.header_active, theme.header_active)
                } else {
                    (theme.footer_segment_key, theme.footer_segment_val)
                };

                spans.push(Span::styled(key_str, key_style));
                spans.push(Span::styled(desc_str, val_style));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
