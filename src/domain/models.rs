use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EntryId(pub String);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content type of a searchable entry. Unknown tags from the server are kept
/// verbatim so they round-trip through the recents store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryKind {
    #[default]
    Article,
    Project,
    User,
    Unknown(String),
}

impl EntryKind {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            EntryKind::Article => "Article",
            EntryKind::Project => "Project",
            EntryKind::User => "User",
            EntryKind::Unknown(tag) => tag,
        }
    }

    /// Admin path for editing an entry of this kind, if the kind is routable.
    #[must_use]
    pub fn edit_path(&self, id: &EntryId) -> Option<String> {
        match self {
            EntryKind::Article => Some(format!("/admin/articles/edit/{id}")),
            EntryKind::Project => Some(format!("/admin/projects/edit/{id}")),
            EntryKind::User => Some(format!("/admin/users/edit/{id}")),
            EntryKind::Unknown(_) => None,
        }
    }
}

impl From<String> for EntryKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Article" => EntryKind::Article,
            "Project" => EntryKind::Project,
            "User" => EntryKind::User,
            _ => EntryKind::Unknown(tag),
        }
    }
}

impl From<EntryKind> for String {
    fn from(kind: EntryKind) -> Self {
        kind.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    pub id: EntryId,
    pub title: String,
    pub kind: EntryKind,
    pub published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEntry {
    #[serde(rename = "_id")]
    pub id: EntryId,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntryKind>,
    #[serde(rename = "searchedAt", default)]
    pub searched_at: i64,
}

impl From<&SearchResultItem> for RecentEntry {
    fn from(item: &SearchResultItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            kind: Some(item.kind.clone()),
            searched_at: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SchedulerReport {
    #[serde(default)]
    pub published: usize,
    #[serde(default)]
    pub message: Option<String>,
}

impl SchedulerReport {
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.message {
            Some(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => format!("Published {} scheduled item(s)", self.published),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_paths() {
        let id = EntryId("abc".to_string());
        assert_eq!(
            EntryKind::Article.edit_path(&id).as_deref(),
            Some("/admin/articles/edit/abc")
        );
        assert_eq!(
            EntryKind::Project.edit_path(&id).as_deref(),
            Some("/admin/projects/edit/abc")
        );
        assert_eq!(
            EntryKind::User.edit_path(&id).as_deref(),
            Some("/admin/users/edit/abc")
        );
        assert_eq!(EntryKind::Unknown("Tag".to_string()).edit_path(&id), None);
    }

    #[test]
    fn test_recent_entry_wire_names() {
        let entry = RecentEntry {
            id: EntryId("1".to_string()),
            title: "Hello".to_string(),
            kind: Some(EntryKind::Project),
            searched_at: 42,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["_id"], "1");
        assert_eq!(json["type"], "Project");
        assert_eq!(json["searchedAt"], 42);
    }

    #[test]
    fn test_unknown_kind_is_preserved() {
        let entry: RecentEntry =
            serde_json::from_str(r#"{"_id":"9","title":"x","type":"Media"}"#).unwrap();
        assert_eq!(entry.kind, Some(EntryKind::Unknown("Media".to_string())));
        assert_eq!(entry.searched_at, 0);
    }
}
