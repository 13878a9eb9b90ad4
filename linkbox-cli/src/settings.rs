//! Location of the LinkBox database on disk.

use std::fs;
use std::path::{Path, PathBuf};

/// Database file name inside the config directory.
pub const DATABASE_FILE: &str = "linkbox.db";

/// Returns the default database path.
///
/// - macOS / Linux: `~/.config/linkbox/linkbox.db`
/// - Windows: `%APPDATA%/LinkBox/linkbox.db`
pub fn default_database_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("LinkBox").join(DATABASE_FILE)
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("linkbox").join(DATABASE_FILE)
    }
}

/// Picks the explicit path if one was given, else the default, and makes
/// sure its parent directory exists.
pub fn resolve_database_path(explicit: Option<&Path>) -> Result<PathBuf, String> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(default_database_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create data directory {parent:?}: {e}"))?;
        }
    }
    Ok(path)
}
