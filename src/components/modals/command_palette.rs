use crate::app::state::{PaletteEntry, PaletteState};
use crate::domain::models::EntryKind;
use crate::palette::{classify, get_commands, CommandDefinition, QueryMode};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// The palette modal. Its `ListState` tracks scroll offset in display rows
/// (section headers included) and comes back selecting the active entry.
pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a PaletteState,
    pub frame_count: u64,
}

impl StatefulWidget for CommandPaletteModal<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, list_state: &mut ListState) {
        let modal_area = centered_rect(60, 60, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let mode = classify(&self.state.query);
        let title = if matches!(mode, QueryMode::Command { .. }) {
            " COMMANDS "
        } else {
            " QUICK SEARCH "
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title, self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("↑↓", self.theme.footer_segment_key),
                Span::raw(" move "),
                Span::styled("Enter", self.theme.footer_segment_key),
                Span::raw(" open "),
                Span::styled("Tab", self.theme.footer_segment_key),
                Span::raw(" category "),
                Span::styled("Esc", self.theme.footer_segment_key),
                Span::raw(" close "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);
        if inner_area.height < 4 || inner_area.width < 2 {
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Results
                Constraint::Length(1), // Status
            ])
            .split(inner_area);

        self.render_query(layout[0], buf, &mode);

        let separator = "─".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border);

        let commands = get_commands();
        let (items, active_row) = self.build_rows(&commands, &mode);

        if items.is_empty() {
            let msg = match mode {
                QueryMode::TooShort => "Keep typing to search…",
                QueryMode::Search { .. } if self.state.is_searching => "",
                _ => "No results",
            };
            buf.set_string(
                layout[2].x + 1,
                layout[2].y,
                msg,
                self.theme.dimmed,
            );
        } else {
            let mut view = ListState::default()
                .with_offset(list_state.offset())
                .with_selected(active_row);
            StatefulWidget::render(List::new(items), layout[2], buf, &mut view);
            *list_state.offset_mut() = view.offset();
        }
        list_state.select(self.state.active_index);

        self.render_status(layout[3], buf);
    }
}

impl CommandPaletteModal<'_> {
    fn render_query(&self, area: Rect, buf: &mut Buffer, mode: &QueryMode) {
        let focused = self.state.focus == crate::palette::FocusTarget::PaletteInput;
        let cursor_style = if focused {
            self.theme.footer_segment_val.add_modifier(Modifier::SLOW_BLINK)
        } else {
            self.theme.dimmed
        };

        let mut spans = vec![
            Span::styled(" ⌕ ", self.theme.footer_segment_key),
            Span::raw(" "),
        ];
        if self.state.query.is_empty() {
            spans.push(Span::styled(
                "Search content, or type > for commands",
                self.theme.dimmed,
            ));
        } else {
            spans.push(Span::styled(self.state.query.as_str(), self.theme.list_item));
            spans.push(Span::styled("_", cursor_style));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        if let QueryMode::Command { .. } = mode {
            let label = self
                .state
                .selected_category
                .map_or("All", |c| c.label());
            let badge = format!(" {label} ");
            let width = badge.chars().count() as u16;
            if area.width > width {
                buf.set_string(
                    area.x + area.width - width,
                    area.y,
                    badge,
                    self.theme.header_item,
                );
            }
        }
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let line = if self.state.is_searching {
            let frame = SPINNER[(self.frame_count % SPINNER.len() as u64) as usize];
            Line::from(Span::styled(format!(" {frame} Searching…"), self.theme.status_info))
        } else if let Some(err) = &self.state.last_search_error {
            Line::from(Span::styled(
                format!(" ✗ {} · search failed", err.short_label()),
                self.theme.dimmed,
            ))
        } else {
            Line::from(Span::styled(
                format!(" {} result(s)", self.state.results.len()),
                self.theme.dimmed,
            ))
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }

    /// List rows with a header inserted wherever the section changes, plus
    /// the display row of the active entry.
    fn build_rows<'c>(
        &self,
        commands: &'c [CommandDefinition],
        mode: &QueryMode,
    ) -> (Vec<ListItem<'c>>, Option<usize>) {
        let mut items = Vec::new();
        let mut active_row = None;
        let mut current_section: Option<String> = None;

        for (i, entry) in self.state.results.iter().enumerate() {
            let section = self.section_label(entry, commands, mode);
            if current_section.as_deref() != Some(section.as_str()) {
                items.push(ListItem::new(Line::from(Span::styled(
                    format!(" {}", section.to_uppercase()),
                    self.theme.section_header,
                ))));
                current_section = Some(section);
            }

            let is_active = self.state.active_index == Some(i);
            if is_active {
                active_row = Some(items.len());
            }
            items.push(self.entry_item(entry, commands, is_active));
        }
        (items, active_row)
    }

    fn section_label(
        &self,
        entry: &PaletteEntry,
        commands: &[CommandDefinition],
        mode: &QueryMode,
    ) -> String {
        match entry {
            PaletteEntry::Recent(_) => "Recent Searches".to_string(),
            PaletteEntry::Command(_) if *mode == QueryMode::Empty => "Quick Actions".to_string(),
            PaletteEntry::Command(i) => commands
                .get(*i)
                .map_or("Commands", |c| c.category.label())
                .to_string(),
            PaletteEntry::Result(item) => format!("{}s", item.kind.label()),
        }
    }

    fn entry_item<'c>(
        &self,
        entry: &PaletteEntry,
        commands: &'c [CommandDefinition],
        is_active: bool,
    ) -> ListItem<'c> {
        let (marker, base) = if is_active {
            ("▌ ", self.theme.list_selected)
        } else {
            ("  ", self.theme.list_item)
        };

        let mut spans = vec![Span::styled(marker, base), Span::styled(entry.title(), base)];
        match entry {
            PaletteEntry::Command(i) => {
                if let Some(cmd) = commands.get(*i) {
                    if !cmd.description.is_empty() {
                        spans.push(Span::raw("  "));
                        spans.push(Span::styled(cmd.description, self.theme.dimmed));
                    }
                }
            }
            PaletteEntry::Recent(recent) => {
                let kind = recent.kind.clone().unwrap_or_default();
                spans.push(Span::raw("  "));
                spans.push(Span::styled(kind.label().to_string(), self.kind_style(&kind)));
            }
            PaletteEntry::Result(item) => {
                let (label, style) = if item.published {
                    ("published", self.theme.published)
                } else {
                    ("draft", self.theme.draft)
                };
                spans.push(Span::raw("  "));
                spans.push(Span::styled(item.kind.label().to_string(), self.kind_style(&item.kind)));
                spans.push(Span::raw(" · "));
                spans.push(Span::styled(label, style));
            }
        }

        ListItem::new(Line::from(spans))
    }

    fn kind_style(&self, kind: &EntryKind) -> Style {
        match kind {
            EntryKind::Article => self.theme.kind_article,
            EntryKind::Project => self.theme.kind_project,
            EntryKind::User => self.theme.kind_user,
            EntryKind::Unknown(_) => self.theme.dimmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{EntryId, SearchResultItem};

    fn render(state: &PaletteState) -> Buffer {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        let mut list_state = state.list_state.clone();
        CommandPaletteModal {
            theme: &theme,
            state,
            frame_count: 0,
        }
        .render(area, &mut buf, &mut list_state);
        buf
    }

    fn contents(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_groups_results_by_kind() {
        let mut state = PaletteState {
            is_open: true,
            query: "rust".to_string(),
            ..Default::default()
        };
        state.set_results(vec![
            PaletteEntry::Result(SearchResultItem {
                id: EntryId("1".to_string()),
                title: "Rust Tips".to_string(),
                kind: EntryKind::Article,
                published: true,
            }),
            PaletteEntry::Result(SearchResultItem {
                id: EntryId("2".to_string()),
                title: "Rusty CLI".to_string(),
                kind: EntryKind::Project,
                published: false,
            }),
        ]);

        let text = contents(&render(&state));
        assert!(text.contains("ARTICLES"));
        assert!(text.contains("PROJECTS"));
        assert!(text.contains("Rust Tips"));
        assert!(text.contains("draft"));
    }

    #[test]
    fn test_shows_search_error_as_status() {
        let state = PaletteState {
            is_open: true,
            query: "rust".to_string(),
            last_search_error: Some(crate::domain::admin::AdminError::Status(503)),
            ..Default::default()
        };
        let text = contents(&render(&state));
        assert!(text.contains("No results"));
        assert!(text.contains("HTTP 503"));
        assert!(text.contains("search failed"));
    }

    #[test]
    fn test_active_row_scrolls_into_view() {
        let mut state = PaletteState {
            is_open: true,
            query: ">".to_string(),
            ..Default::default()
        };
        state.set_results((0..get_commands().len()).map(PaletteEntry::Command).collect());
        let last = state.results.len() - 1;
        state.set_active(Some(last));

        let text = contents(&render(&state));
        let last_label = get_commands()[last].label;
        assert!(text.contains(last_label));
    }
}
