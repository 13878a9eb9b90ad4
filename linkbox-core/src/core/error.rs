//! Error types for the LinkBox core library.

use thiserror::Error;

/// All errors that can occur within the LinkBox core library.
#[derive(Debug, Error)]
pub enum LinkboxError {
    /// A required field was empty when adding a bookmark or category.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// A category with the same name (ignoring case) already exists.
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// An import document could not be parsed.
    #[error("Invalid import format: {0}")]
    ImportFormat(String),

    /// No id above the largest one in use fits in an `i64`.
    #[error("Bookmark and category ids are exhausted")]
    IdsExhausted,

    /// A persisted blob could not be decoded at load time.
    #[error("Corrupt data under '{key}': {source}")]
    CorruptData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Data could not be serialized to or from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`LinkboxError`].
pub type Result<T> = std::result::Result<T, LinkboxError>;

impl LinkboxError {
    /// Returns a short, human-readable message suitable for a transient notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationFailed(msg) => msg.clone(),
            Self::DuplicateCategory(_) => "Category already exists".to_string(),
            Self::ImportFormat(_) => "Error importing file. Invalid format.".to_string(),
            Self::IdsExhausted => "No more ids available. Remove the entry with the largest id.".to_string(),
            Self::CorruptData { key, .. } => format!("Stored data under '{key}' is unreadable"),
            Self::Database(e) => format!("Failed to save: {e}"),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let e = LinkboxError::ValidationFailed("Please enter a category name".to_string());
        assert_eq!(e.user_message(), "Please enter a category name");
    }

    #[test]
    fn test_import_format_message() {
        let e = LinkboxError::ImportFormat("expected value at line 1".to_string());
        assert_eq!(e.user_message(), "Error importing file. Invalid format.");
        assert!(e.to_string().contains("line 1"));
    }

    #[test]
    fn test_ids_exhausted_message() {
        let e = LinkboxError::IdsExhausted;
        assert!(e.user_message().starts_with("No more ids available"));
    }

    #[test]
    fn test_corrupt_data_names_key() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let e = LinkboxError::CorruptData {
            key: "linkbox_bookmarks".to_string(),
            source,
        };
        assert!(e.to_string().contains("linkbox_bookmarks"));
        assert!(e.user_message().contains("linkbox_bookmarks"));
    }
}
