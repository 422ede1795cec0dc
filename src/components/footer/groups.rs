use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState};
use crate::palette::FocusTarget;

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.palette.is_open {
        return vec![FooterGroup {
            name: "PALETTE",
            items: vec![
                FooterItem::new("↑↓", "move"),
                FooterItem::new("Enter", "open"),
                FooterItem::new("Tab", "cycle"),
                FooterItem::new("Esc", "close"),
            ],
        }];
    }

    if state.mode == AppMode::Help {
        return vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem::new("Esc", "close")],
        }];
    }

    let mut groups = Vec::new();
    if state.show_notifications && state.focus == FocusTarget::Notifications {
        groups.push(FooterGroup {
            name: "INBOX",
            items: vec![
                FooterItem::new("j/k", "move"),
                FooterItem::new("r", "read"),
                FooterItem::new("a", "all read"),
                FooterItem::new("d", "delete"),
                FooterItem::new("c", "clear"),
            ],
        });
    }

    groups.push(FooterGroup {
        name: "GO",
        items: vec![
            FooterItem {
                key: "^K",
                desc: "palette",
                highlighted: true,
            },
            FooterItem::new("/", "search"),
            FooterItem::new(">", "commands"),
            FooterItem::new("n", "inbox"),
        ],
    });
    groups.push(FooterGroup {
        name: "APP",
        items: vec![
            FooterItem::new("t", "theme"),
            FooterItem::new("p", "publish"),
            FooterItem::new("?", "help"),
            FooterItem::new("q", "quit"),
        ],
    });
    groups
}
