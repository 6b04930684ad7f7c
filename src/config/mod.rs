//! Configuration management for frontpage.
//!
//! Configuration is read from `~/.config/frontpage/config.toml` at
//! startup. If the file doesn't exist, a default configuration with
//! comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default top-headlines endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/top-headlines";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

/// Headline-feed settings: which country to ask for, the API key, and
/// where and how to reach the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub country: String,
    pub api_key: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            country: "us".to_string(),
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl FeedConfig {
    /// Reject country codes that are not ISO 3166 alpha-2. An empty
    /// API key is allowed here; the service reports it as a domain
    /// error on the first fetch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.country.len() != 2 || !self.country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Invalid(format!(
                "country must be an ISO 3166 alpha-2 code, got {:?}",
                self.country
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with
    /// comments. Missing fields in the config file use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path. Unlike [`load`], a
    /// missing file is an error here.
    ///
    /// [`load`]: Self::load
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.feed.validate()?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/frontpage/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("frontpage").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# frontpage configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "1"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"

[feed]
# ISO 3166 alpha-2 country code for the top-headlines request
country = "us"

# API key for the headlines service (https://newsapi.org)
api_key = ""

# Top-headlines endpoint
endpoint = "https://newsapi.org/v2/top-headlines"

# Request timeout in seconds
timeout_secs = 10

[colors]
# Screen border
border = "DarkGray"

# Card content
headline = "White"
image_url = "Blue"
image_placeholder = "DarkGray"

# Focused card highlight
selection_bg = "Yellow"
selection_fg = "Black"

# Status bar
loading = "Yellow"
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
# Navigation
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
next_page = ["n", "PageDown"]
prev_page = ["p", "PageUp"]

# Actions
refresh = ["R"]
open_in_browser = ["o"]
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.feed.country, "us");
        assert_eq!(config.feed.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.feed.timeout_secs, 10);
        assert_eq!(config.colors.selection_bg, ratatui::style::Color::Yellow);
        assert_eq!(config.keybindings.refresh, vec!["R"]);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[feed]
country = "de"

[colors]
selection_bg = "#FF0000"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.feed.country, "de");
        // Defaults fill the rest
        assert_eq!(config.feed.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(
            config.colors.selection_bg,
            ratatui::style::Color::Rgb(255, 0, 0)
        );
        assert_eq!(config.colors.selection_fg, ratatui::style::Color::Black);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");

        assert_eq!(config.feed.country, "us");
        assert_eq!(config.keybindings.quit, vec!["q", "Ctrl+c"]);
    }

    #[test]
    fn test_country_validation() {
        let good = FeedConfig {
            country: "gb".into(),
            ..FeedConfig::default()
        };
        assert!(good.validate().is_ok());

        for bad in ["usa", "u", "u1", ""] {
            let config = FeedConfig {
                country: bad.into(),
                ..FeedConfig::default()
            };
            assert!(config.validate().is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[feed]\ncountry = \"fr\"\napi_key = \"abc\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.feed.country, "fr");
        assert_eq!(config.feed.api_key, "abc");
    }

    #[test]
    fn test_load_from_rejects_bad_country() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[feed]\ncountry = \"france\"").unwrap();

        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        assert!(matches!(
            Config::load_from(Path::new("/nonexistent/frontpage.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
