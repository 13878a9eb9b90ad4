//! Core library for LinkBox, a local-first bookmark manager.
//!
//! The primary entry point is [`BookmarkStore`], which owns the bookmark,
//! category and settings collections of one profile and persists them to a
//! [`Storage`] database on every mutation.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    bookmark::{parse_tags, Bookmark, NewBookmark},
    category::{
        default_categories, Category, CategoryId, CategorySummary, CATEGORY_PALETTE,
        DEFAULT_ICON, NEUTRAL_COLOR, UNCATEGORIZED,
    },
    confirm::{AlwaysConfirm, ConfirmationGate, NeverConfirm, Outcome},
    error::{LinkboxError, Result},
    export::{
        export_filename, parse_import, read_import, write_export, ImportData, ImportResult,
        Snapshot,
    },
    settings::{Settings, SortBy, Theme},
    stats::{StorageFootprint, StoreStats, STORAGE_QUOTA_KB},
    storage::Storage,
    store::{
        BookmarkStore, LoadPolicy, StoreOptions, BOOKMARKS_KEY, CATEGORIES_KEY, SETTINGS_KEY,
    },
};
