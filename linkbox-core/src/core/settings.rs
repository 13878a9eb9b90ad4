//! User preferences persisted alongside bookmarks and categories.

use serde::{Deserialize, Serialize};

/// Color themes the interface can be switched between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
    Red,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Blue,
        Theme::Purple,
        Theme::Green,
        Theme::Orange,
        Theme::Red,
        Theme::Dark,
    ];

    /// The token written to storage and to the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Blue => "blue",
            Theme::Purple => "purple",
            Theme::Green => "green",
            Theme::Orange => "orange",
            Theme::Red => "red",
            Theme::Dark => "dark",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown theme: {s}"))
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing order preference. Stored and round-tripped but not consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Date,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: Theme,
    /// Inert.
    pub sort_by: SortBy,
    /// Inert.
    pub show_stats: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Blue,
            sort_by: SortBy::Date,
            show_stats: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_json() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(json, r#"{"theme":"blue","sortBy":"date","showStats":true}"#);
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("purple".parse::<Theme>().unwrap(), Theme::Purple);
        assert!("Purple".parse::<Theme>().is_err());
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_tokens_match_serde() {
        for theme in Theme::ALL {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.as_str()));
        }
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme":"red"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Red);
        assert_eq!(settings.sort_by, SortBy::Date);
        assert!(settings.show_stats);

        let empty: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Settings::default());
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let result: Result<Settings, _> =
            serde_json::from_str(r#"{"theme":"neon","sortBy":"date","showStats":true}"#);
        assert!(result.is_err());
    }
}
