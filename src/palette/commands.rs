use crate::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Navigation,
    Create,
    Theme,
    Tools,
}

impl CommandCategory {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CommandCategory::Navigation => "Navigation",
            CommandCategory::Create => "Create",
            CommandCategory::Theme => "Theme",
            CommandCategory::Tools => "Tools",
        }
    }

    #[must_use]
    pub fn all() -> &'static [CommandCategory] {
        &[
            CommandCategory::Navigation,
            CommandCategory::Create,
            CommandCategory::Theme,
            CommandCategory::Tools,
        ]
    }
}

/// Steps the category filter through `all()`, passing through "no filter"
/// between the last and the first category.
#[must_use]
pub fn cycle_category(current: Option<CommandCategory>, forward: bool) -> Option<CommandCategory> {
    let all = CommandCategory::all();
    let pos = current.and_then(|c| all.iter().position(|x| *x == c));
    match (pos, forward) {
        (None, true) => all.first().copied(),
        (None, false) => all.last().copied(),
        (Some(i), true) => all.get(i + 1).copied(),
        (Some(0), false) => None,
        (Some(i), false) => all.get(i - 1).copied(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    Navigate(&'static str),
    SetThemeMode(ThemeMode),
    ToggleTheme,
    RunScheduler,
    ClearRecents,
    OpenNotifications,
    MarkAllNotificationsRead,
}

#[derive(Debug, Clone)]
pub struct CommandDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: CommandCategory,
    pub keywords: &'static [&'static str],
    pub action: CommandAction,
}

impl CommandDefinition {
    fn matches(&self, filter: &str) -> bool {
        self.label.to_lowercase().contains(filter)
            || (!self.description.is_empty() && self.description.to_lowercase().contains(filter))
            || self.keywords.iter().any(|k| k.to_lowercase().contains(filter))
    }
}

#[must_use]
pub fn get_commands() -> Vec<CommandDefinition> {
    use CommandAction::{Navigate, SetThemeMode};
    use CommandCategory::{Create, Navigation, Theme, Tools};

    vec![
        // Navigation
        CommandDefinition {
            id: "nav-dashboard",
            label: "Go to Dashboard",
            description: "Open the admin dashboard",
            category: Navigation,
            keywords: &["home", "overview"],
            action: Navigate("/admin"),
        },
        CommandDefinition {
            id: "nav-articles",
            label: "Go to Articles",
            description: "Manage blog articles",
            category: Navigation,
            keywords: &["posts", "blog"],
            action: Navigate("/admin/articles"),
        },
        CommandDefinition {
            id: "nav-projects",
            label: "Go to Projects",
            description: "Manage portfolio projects",
            category: Navigation,
            keywords: &["work", "portfolio"],
            action: Navigate("/admin/projects"),
        },
        CommandDefinition {
            id: "nav-users",
            label: "Go to Users",
            description: "Manage user accounts",
            category: Navigation,
            keywords: &["accounts", "people"],
            action: Navigate("/admin/users"),
        },
        CommandDefinition {
            id: "nav-media",
            label: "Go to Media",
            description: "Browse the media library",
            category: Navigation,
            keywords: &["images", "uploads", "files"],
            action: Navigate("/admin/media"),
        },
        CommandDefinition {
            id: "nav-analytics",
            label: "Go to Analytics",
            description: "View site traffic and engagement",
            category: Navigation,
            keywords: &["stats", "metrics"],
            action: Navigate("/admin/analytics"),
        },
        CommandDefinition {
            id: "nav-settings",
            label: "Go to Settings",
            description: "Configure the site",
            category: Navigation,
            keywords: &["preferences", "config"],
            action: Navigate("/admin/settings"),
        },
        CommandDefinition {
            id: "nav-site",
            label: "View Site",
            description: "Open the public portfolio",
            category: Navigation,
            keywords: &["public", "frontend"],
            action: Navigate("/"),
        },
        // Create
        CommandDefinition {
            id: "create-article",
            label: "New Article",
            description: "Write a new blog article",
            category: Create,
            keywords: &["post", "write", "draft"],
            action: Navigate("/admin/articles/new"),
        },
        CommandDefinition {
            id: "create-project",
            label: "New Project",
            description: "Add a portfolio project",
            category: Create,
            keywords: &["work", "case study"],
            action: Navigate("/admin/projects/new"),
        },
        CommandDefinition {
            id: "create-user",
            label: "New User",
            description: "Invite a new user",
            category: Create,
            keywords: &["account", "invite"],
            action: Navigate("/admin/users/new"),
        },
        CommandDefinition {
            id: "create-media",
            label: "Upload Media",
            description: "Upload images or files",
            category: Create,
            keywords: &["image", "file"],
            action: Navigate("/admin/media/upload"),
        },
        // Theme
        CommandDefinition {
            id: "theme-light",
            label: "Light Theme",
            description: "Switch to the light theme",
            category: Theme,
            keywords: &["appearance", "bright"],
            action: SetThemeMode(ThemeMode::Light),
        },
        CommandDefinition {
            id: "theme-dark",
            label: "Dark Theme",
            description: "Switch to the dark theme",
            category: Theme,
            keywords: &["appearance", "night"],
            action: SetThemeMode(ThemeMode::Dark),
        },
        CommandDefinition {
            id: "theme-system",
            label: "System Theme",
            description: "Follow the system appearance",
            category: Theme,
            keywords: &["appearance", "auto"],
            action: SetThemeMode(ThemeMode::System),
        },
        CommandDefinition {
            id: "theme-toggle",
            label: "Toggle Theme",
            description: "Flip between light and dark",
            category: Theme,
            keywords: &["appearance", "switch"],
            action: CommandAction::ToggleTheme,
        },
        // Tools
        CommandDefinition {
            id: "tools-scheduler",
            label: "Run Publish Scheduler",
            description: "Publish scheduled articles and projects now",
            category: Tools,
            keywords: &["publish", "cron", "schedule"],
            action: CommandAction::RunScheduler,
        },
        CommandDefinition {
            id: "tools-clear-recents",
            label: "Clear Recent Searches",
            description: "Forget recently opened results",
            category: Tools,
            keywords: &["history", "recents"],
            action: CommandAction::ClearRecents,
        },
        CommandDefinition {
            id: "tools-notifications",
            label: "Open Notifications",
            description: "Show the notification center",
            category: Tools,
            keywords: &["alerts", "bell", "inbox"],
            action: CommandAction::OpenNotifications,
        },
        CommandDefinition {
            id: "tools-mark-read",
            label: "Mark Notifications Read",
            description: "Mark every notification as read",
            category: Tools,
            keywords: &["alerts", "inbox"],
            action: CommandAction::MarkAllNotificationsRead,
        },
    ]
}

/// Indices into `get_commands()` matching `filter`, in table order.
/// `filter` is expected lower-cased; an empty filter matches everything.
#[must_use]
pub fn filter_commands(filter: &str, category: Option<CommandCategory>) -> Vec<usize> {
    get_commands()
        .iter()
        .enumerate()
        .filter(|(_, cmd)| category.map_or(true, |c| cmd.category == c))
        .filter(|(_, cmd)| filter.is_empty() || cmd.matches(filter))
        .map(|(i, _)| i)
        .collect()
}

/// The quick actions shown for an empty query with no recents.
#[must_use]
pub fn quick_actions() -> Vec<usize> {
    filter_commands("", Some(CommandCategory::Create))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(indices: &[usize]) -> Vec<&'static str> {
        let commands = get_commands();
        indices.iter().map(|&i| commands[i].id).collect()
    }

    #[test]
    fn test_ids_are_unique() {
        let commands = get_commands();
        let unique: HashSet<_> = commands.iter().map(|c| c.id).collect();
        assert_eq!(unique.len(), commands.len());
    }

    #[test]
    fn test_filter_navigation_the() {
        let matches = filter_commands("the", Some(CommandCategory::Navigation));
        assert_eq!(
            ids(&matches),
            vec!["nav-dashboard", "nav-media", "nav-settings", "nav-site"]
        );
    }

    #[test]
    fn test_filter_matches_keywords() {
        let matches = filter_commands("cron", None);
        assert_eq!(ids(&matches), vec!["tools-scheduler"]);
    }

    #[test]
    fn test_filter_preserves_table_order() {
        let matches = filter_commands("appearance", None);
        assert_eq!(
            ids(&matches),
            vec!["theme-light", "theme-dark", "theme-system", "theme-toggle"]
        );
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_commands("zzzz", None).is_empty());
    }

    #[test]
    fn test_quick_actions_are_create_commands() {
        assert_eq!(
            ids(&quick_actions()),
            vec!["create-article", "create-project", "create-user", "create-media"]
        );
    }

    #[test]
    fn test_cycle_category_wraps_through_none() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..5 {
            current = cycle_category(current, true);
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Some(CommandCategory::Navigation),
                Some(CommandCategory::Create),
                Some(CommandCategory::Theme),
                Some(CommandCategory::Tools),
                None,
            ]
        );

        assert_eq!(cycle_category(None, false), Some(CommandCategory::Tools));
        assert_eq!(cycle_category(Some(CommandCategory::Navigation), false), None);
    }
}
