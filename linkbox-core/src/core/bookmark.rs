//! The stored bookmark record and the form input used to create one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::category::UNCATEGORIZED;

/// A stored link with its metadata and usage counters.
///
/// Field names serialize in camelCase so persisted blobs and export files
/// keep the `createdAt` spelling older LinkBox data uses. Optional-looking
/// fields default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub favorite: bool,
}

impl Bookmark {
    /// The category label shown to the user; empty categories read as "Uncategorized".
    pub fn display_category(&self) -> &str {
        if self.category.is_empty() {
            UNCATEGORIZED
        } else {
            &self.category
        }
    }

    /// Lowercased text that `search` matches against.
    ///
    /// Concatenates title, url, notes, category and the space-joined tags.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.title,
            self.url,
            self.notes,
            self.category,
            self.tags.join(" ")
        )
        .to_lowercase()
    }
}

/// Raw form input for [`BookmarkStore::add_bookmark`](super::store::BookmarkStore::add_bookmark).
///
/// `tags` is the comma-separated string as typed; `new_category`, when
/// non-empty, overrides `category` and creates the category if needed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBookmark {
    pub url: String,
    pub title: String,
    pub category: String,
    pub new_category: String,
    pub tags: String,
    pub notes: String,
}

impl NewBookmark {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn new_category(mut self, name: impl Into<String>) -> Self {
        self.new_category = name.into();
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Splits a comma-separated tag string into trimmed, non-empty tags.
///
/// Order and duplicates are preserved.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
