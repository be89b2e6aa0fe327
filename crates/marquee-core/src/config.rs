//! Configuration management for Marquee.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Composers played when no list is configured.
pub const DEFAULT_COMPOSERS: [&str; 5] = [
    "Bernard Herrmann",
    "Jerry Goldsmith",
    "John Barry",
    "John Williams",
    "Michel Legrand",
];

/// Main application configuration.
///
/// This is loaded from `~/.config/marquee/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Composer names used to build subscribers and drive API fetches
    pub composers: Vec<String>,
    /// Game rules
    pub game: GameConfig,
    /// TMDb access settings
    pub tmdb: TmdbConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            composers: DEFAULT_COMPOSERS.iter().map(ToString::to_string).collect(),
            game: GameConfig::default(),
            tmdb: TmdbConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file path.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Reads `path` when given, otherwise the per-user file (defaults if
    /// absent), then applies:
    /// - `TMDB_API_KEY`: TMDb API key (never stored in the config file)
    /// - `MARQUEE_WINNING_THRESHOLD`: Override the winning threshold
    /// - `MARQUEE_MAX_MOVIES_PER_COMPOSER`: Override the per-composer cap
    pub fn load_with_env(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        config.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    ///
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("TMDB_API_KEY").filter(|key| !key.trim().is_empty()) {
            self.tmdb.api_key = Some(key);
            tracing::debug!("Using TMDb API key from environment");
        }

        if let Some(val) = lookup("MARQUEE_WINNING_THRESHOLD") {
            if let Ok(threshold) = val.parse() {
                self.game.winning_threshold = threshold;
                tracing::debug!("Override game.winning_threshold from env: {}", threshold);
            }
        }

        if let Some(val) = lookup("MARQUEE_MAX_MOVIES_PER_COMPOSER") {
            if let Ok(cap) = val.parse() {
                self.tmdb.max_movies_per_composer = cap;
                tracing::debug!("Override tmdb.max_movies_per_composer from env: {}", cap);
            }
        }
    }

    /// Check the values a game run depends on.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for a zero threshold or cap, an
    /// empty composer list, a blank composer name or an empty base URL.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.game.winning_threshold == 0 {
            return Err(ConfigError::invalid(
                "game.winning_threshold",
                "must be at least 1",
            ));
        }

        if self.tmdb.max_movies_per_composer == 0 {
            return Err(ConfigError::invalid(
                "tmdb.max_movies_per_composer",
                "must be at least 1",
            ));
        }

        if self.composers.is_empty() {
            return Err(ConfigError::invalid("composers", "list cannot be empty"));
        }

        if self.composers.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "composers",
                "composer names cannot be blank",
            ));
        }

        if self.tmdb.base_url.trim().is_empty() {
            return Err(ConfigError::invalid("tmdb.base_url", "cannot be empty"));
        }

        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/marquee/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("org", "marquee", "marquee").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Game rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Movies a composer must collect to win
    pub winning_threshold: usize,
    /// Pause between published movies in milliseconds (0 = none)
    pub publish_delay_ms: u64,
    /// Shuffle movies before publishing
    pub shuffle: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_threshold: 3,
            publish_delay_ms: 500,
            shuffle: true,
        }
    }
}

/// TMDb access settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// API base URL
    pub base_url: String,
    /// API key (read from `TMDB_API_KEY`, never written to disk)
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Maximum movies fetched per composer
    pub max_movies_per_composer: usize,
    /// Maximum cast names kept per movie
    pub max_cast: usize,
    /// Pause after each movie detail request in milliseconds
    pub request_delay_ms: u64,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: None,
            max_movies_per_composer: 5,
            max_cast: 3,
            request_delay_ms: 250,
            timeout_secs: 30,
        }
    }
}
