use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::{Card, ColorTag, Deck};
use crate::session::StudyMode;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub study: StudyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Extra built-in decks, appended after the shipped ones.
    #[serde(default)]
    pub decks: Vec<DeckConfig>,
}

/// Study defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Mode used when a deck is opened with Enter on the home screen.
    #[serde(default)]
    pub default_mode: StudyMode,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (e.g. "info", "flashdeck=debug"). `RUST_LOG` wins.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file used while the terminal UI is running.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// A deck declared in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfig {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub color: ColorTag,
    pub cards: Vec<CardConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    pub word: String,
    pub definition: String,
    /// Falls back to the placeholder example when absent.
    #[serde(default)]
    pub example: Option<String>,
}

impl From<&CardConfig> for Card {
    fn from(card: &CardConfig) -> Self {
        match &card.example {
            Some(example) => Card::new(&card.word, &card.definition, example),
            None => Card::without_example(&card.word, &card.definition),
        }
    }
}

impl From<&DeckConfig> for Deck {
    fn from(deck: &DeckConfig) -> Self {
        Deck::new(
            &deck.category,
            deck.color,
            deck.cards.iter().map(Card::from).collect(),
        )
    }
}
