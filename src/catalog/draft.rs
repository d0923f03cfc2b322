//! Assembling a custom deck from form input.

use crate::catalog::card::{Card, ColorTag};
use crate::catalog::error::CatalogError;
use crate::catalog::store::Catalog;

/// Upper bound on card rows in a single draft.
pub const MAX_DRAFT_CARDS: usize = 20;

const DEFAULT_DRAFT_ROWS: usize = 3;

/// One card row of a draft. Rows missing a word or definition are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub word: String,
    pub definition: String,
    pub example: String,
}

impl CardDraft {
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            example: example.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.word.trim().is_empty() && !self.definition.trim().is_empty()
    }

    pub fn to_card(&self) -> Option<Card> {
        self.is_complete()
            .then(|| Card::new(&self.word, &self.definition, &self.example))
    }
}

/// Field values collected for a new custom deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckDraft {
    pub name: String,
    pub category: String,
    pub color: ColorTag,
    pub cards: Vec<CardDraft>,
}

impl Default for DeckDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            color: ColorTag::default(),
            cards: vec![CardDraft::default(); DEFAULT_DRAFT_ROWS],
        }
    }
}

impl DeckDraft {
    /// Cards built from the complete rows, in row order.
    pub fn complete_cards(&self) -> Vec<Card> {
        self.cards.iter().filter_map(CardDraft::to_card).collect()
    }

    /// Validate the draft and store it as a custom deck.
    ///
    /// Returns the number of cards saved.
    pub fn submit(&self, catalog: &mut Catalog) -> Result<usize, CatalogError> {
        if self.cards.len() > MAX_DRAFT_CARDS {
            return Err(CatalogError::validation(format!(
                "A deck can be created with at most {} cards at a time",
                MAX_DRAFT_CARDS
            )));
        }
        let cards = self.complete_cards();
        if self.name.trim().is_empty() || cards.is_empty() {
            return Err(CatalogError::validation(
                "Please provide a deck name and at least one complete card.",
            ));
        }
        let count = cards.len();
        catalog.add_deck(self.name.clone(), self.category.clone(), self.color, cards)?;
        Ok(count)
    }
}
