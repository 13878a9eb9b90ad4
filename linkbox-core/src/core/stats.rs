//! Read-only summaries shown on the dashboard and settings pages.

use serde::{Deserialize, Serialize};

/// Assumed capacity of the persisted store, in KB.
pub const STORAGE_QUOTA_KB: f64 = 5120.0;

/// Counts displayed in the stats bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_links: usize,
    pub total_categories: usize,
    /// Number of distinct tag strings across all bookmarks.
    pub total_tags: usize,
}

/// Serialized size of the three persisted blobs against the fixed quota.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageFootprint {
    pub used_bytes: usize,
}

impl StorageFootprint {
    pub fn used_kb(&self) -> f64 {
        self.used_bytes as f64 / 1024.0
    }

    pub fn quota_kb(&self) -> f64 {
        STORAGE_QUOTA_KB
    }

    pub fn available_kb(&self) -> f64 {
        STORAGE_QUOTA_KB - self.used_kb()
    }

    pub fn percent_used(&self) -> f64 {
        self.used_kb() / STORAGE_QUOTA_KB * 100.0
    }
}
