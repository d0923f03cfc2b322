use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::error::CatalogError;

/// Example text used when a card is created without one.
pub const EXAMPLE_PLACEHOLDER: &str = "No example provided.";

/// A single term/definition/example flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    word: String,
    definition: String,
    example: String,
}

impl Card {
    /// Create a card. A blank example is replaced by [`EXAMPLE_PLACEHOLDER`].
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        let example = example.into();
        let example = if example.trim().is_empty() {
            EXAMPLE_PLACEHOLDER.to_string()
        } else {
            example
        };
        Self {
            word: word.into(),
            definition: definition.into(),
            example,
        }
    }

    pub fn without_example(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::new(word, definition, String::new())
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn example(&self) -> &str {
        &self.example
    }
}

/// Color theme attached to a deck for display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Blue,
    Purple,
    Green,
    Red,
    Orange,
    Pink,
}

impl ColorTag {
    pub const ALL: [ColorTag; 6] = [
        ColorTag::Blue,
        ColorTag::Purple,
        ColorTag::Green,
        ColorTag::Red,
        ColorTag::Orange,
        ColorTag::Pink,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorTag::Blue => "blue",
            ColorTag::Purple => "purple",
            ColorTag::Green => "green",
            ColorTag::Red => "red",
            ColorTag::Orange => "orange",
            ColorTag::Pink => "pink",
        }
    }

    /// Next tag in palette order, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous tag in palette order, wrapping around.
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == wanted)
            .ok_or_else(|| {
                CatalogError::validation(format!(
                    "Unknown color '{}'. Expected one of: blue, purple, green, red, orange, pink",
                    s
                ))
            })
    }
}

/// A named collection of cards. The name is the catalog key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    pub category: String,
    pub color: ColorTag,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(category: impl Into<String>, color: ColorTag, cards: Vec<Card>) -> Self {
        Self {
            category: category.into(),
            color,
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
