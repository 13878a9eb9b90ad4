//! Snapshot export and import as JSON documents.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::bookmark::Bookmark;
use crate::core::category::Category;
use crate::core::settings::Settings;
use crate::{LinkboxError, Result};

/// The full exported state of the store at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub bookmarks: Vec<Bookmark>,
    pub categories: Vec<Category>,
    pub settings: Settings,
    pub exported_at: DateTime<Utc>,
}

/// A parsed import document. Each collection is replaced only when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportData {
    #[serde(default)]
    pub bookmarks: Option<Vec<Bookmark>>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub settings: Option<Settings>,
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
}

impl ImportData {
    /// Describes what applying this document would replace.
    pub fn summary(&self) -> ImportResult {
        ImportResult {
            bookmark_count: self.bookmarks.as_ref().map(Vec::len),
            category_count: self.categories.as_ref().map(Vec::len),
            settings_replaced: self.settings.is_some(),
        }
    }
}

impl From<Snapshot> for ImportData {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            bookmarks: Some(snapshot.bookmarks),
            categories: Some(snapshot.categories),
            settings: Some(snapshot.settings),
            exported_at: Some(snapshot.exported_at),
        }
    }
}

/// Counts reported back after an import has been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub bookmark_count: Option<usize>,
    pub category_count: Option<usize>,
    pub settings_replaced: bool,
}

/// Suggested download name for an export taken on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("linkbox-{}.json", date.format("%Y-%m-%d"))
}

/// Renders a snapshot as the pretty-printed export document.
pub fn to_export_json(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Parses an import document.
///
/// # Errors
///
/// Returns [`LinkboxError::ImportFormat`] if `text` is not JSON or does not
/// have the shape of an export document.
pub fn parse_import(text: &str) -> Result<ImportData> {
    serde_json::from_str(text).map_err(|e| LinkboxError::ImportFormat(e.to_string()))
}

/// Writes `snapshot` into `dir` under [`export_filename`] and returns the path.
pub fn write_export(dir: &Path, snapshot: &Snapshot) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(snapshot.exported_at.date_naive()));
    fs::write(&path, to_export_json(snapshot)?)?;
    Ok(path)
}

/// Reads and parses an import document from `path`.
pub fn read_import(path: &Path) -> Result<ImportData> {
    let text = fs::read_to_string(path)?;
    parse_import(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::default_categories;

    fn snapshot() -> Snapshot {
        Snapshot {
            bookmarks: vec![],
            categories: default_categories(),
            settings: Settings::default(),
            exported_at: "2025-03-09T08:30:00.000Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_export_filename_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(export_filename(date), "linkbox-2025-03-09.json");
    }

    #[test]
    fn test_export_json_field_names() {
        let json = to_export_json(&snapshot()).unwrap();
        assert!(json.contains("\"exportedAt\""));
        assert!(json.contains("\"bookmarks\": []"));
        assert!(json.contains("\"showStats\": true"));
    }

    #[test]
    fn test_parse_import_missing_fields_are_none() {
        let data = parse_import(r#"{"settings":{"theme":"red","sortBy":"date","showStats":false}}"#)
            .unwrap();
        assert!(data.bookmarks.is_none());
        assert!(data.categories.is_none());
        assert_eq!(
            data.summary(),
            ImportResult {
                bookmark_count: None,
                category_count: None,
                settings_replaced: true,
            }
        );
        assert_eq!(data.settings.unwrap().theme, crate::Theme::Red);
    }

    #[test]
    fn test_parse_import_null_field_is_none() {
        let data = parse_import(r#"{"bookmarks":null,"categories":[]}"#).unwrap();
        assert!(data.bookmarks.is_none());
        assert_eq!(data.categories, Some(vec![]));
    }

    #[test]
    fn test_parse_import_rejects_garbage() {
        let err = parse_import("this is not json").unwrap_err();
        assert!(matches!(err, LinkboxError::ImportFormat(_)));

        let err = parse_import(r#"{"bookmarks":"nope"}"#).unwrap_err();
        assert!(matches!(err, LinkboxError::ImportFormat(_)));
    }

    #[test]
    fn test_write_and_read_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(dir.path(), &snapshot()).unwrap();
        assert_eq!(path.file_name().unwrap(), "linkbox-2025-03-09.json");

        let data = read_import(&path).unwrap();
        assert_eq!(data, ImportData::from(snapshot()));
    }

    #[test]
    fn test_read_import_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_import(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LinkboxError::Io(_)));
    }
}
