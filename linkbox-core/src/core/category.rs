//! Categories: named, colored grouping labels assignable to bookmarks.

use serde::{Deserialize, Serialize};

/// Label used for bookmarks with an empty category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Color returned for names that match no category.
pub const NEUTRAL_COLOR: &str = "#6b7280";

/// Icon given to every category created after first run.
pub const DEFAULT_ICON: &str = "fas fa-folder";

/// Colors a category created implicitly from the add-bookmark form is drawn from.
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#4f46e5", "#10b981", "#8b5cf6", "#f59e0b", "#ef4444", "#6b7280",
];

/// Identifier of a category.
///
/// Numeric for defaults and categories created by the store; textual ids
/// appear in data written by older builds that persisted a synthetic
/// `"uncategorized"` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryId {
    Number(i64),
    Text(String),
}

impl CategoryId {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl Category {
    /// Case-insensitive name comparison used for duplicate detection.
    pub fn name_matches_ignore_case(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// The read-time "Uncategorized" entry. Never stored.
    pub fn uncategorized() -> Self {
        Self {
            id: CategoryId::Text("uncategorized".to_string()),
            name: UNCATEGORIZED.to_string(),
            color: NEUTRAL_COLOR.to_string(),
            icon: DEFAULT_ICON.to_string(),
        }
    }
}

/// The five categories present at first run and after a full reset.
pub fn default_categories() -> Vec<Category> {
    [
        (1, "Development", "#4f46e5", "fas fa-code"),
        (2, "Design", "#8b5cf6", "fas fa-paint-brush"),
        (3, "Productivity", "#10b981", "fas fa-check-circle"),
        (4, "Learning", "#f59e0b", "fas fa-graduation-cap"),
        (5, "Entertainment", "#ef4444", "fas fa-gamepad"),
    ]
    .into_iter()
    .map(|(id, name, color, icon)| Category {
        id: CategoryId::Number(id),
        name: name.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

/// A category together with the number of bookmarks filed under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    pub bookmark_count: usize,
}
