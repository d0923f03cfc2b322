use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::{default_decks, Deck};
use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/flashdeck/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("flashdeck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks every declared deck:
    /// - has a non-blank name not used by a shipped deck or another entry
    /// - has at least one card, each with a word and a definition
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shipped = default_decks();
        let mut seen = HashSet::new();

        for deck in &self.decks {
            let name = deck.name.trim();
            if name.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Deck name must not be empty".to_string(),
                });
            }
            if shipped.contains_key(name) {
                return Err(ConfigError::ValidationError {
                    message: format!("Deck '{}' conflicts with a built-in deck", name),
                });
            }
            if !seen.insert(name) {
                return Err(ConfigError::ValidationError {
                    message: format!("Deck '{}' is declared more than once", name),
                });
            }
            if deck.cards.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Deck '{}' has no cards", name),
                });
            }
            if let Some(index) = deck
                .cards
                .iter()
                .position(|c| c.word.trim().is_empty() || c.definition.trim().is_empty())
            {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Card {} of deck '{}' needs a word and a definition",
                        index + 1,
                        name
                    ),
                });
            }
        }

        Ok(())
    }

    /// Declared decks as (name, deck) pairs in file order.
    pub fn extra_decks(&self) -> Vec<(String, Deck)> {
        self.decks
            .iter()
            .map(|deck| (deck.name.trim().to_string(), Deck::from(deck)))
            .collect()
    }
}
