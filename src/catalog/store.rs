use indexmap::IndexMap;
use tracing::{debug, info};

use crate::catalog::builtin::default_decks;
use crate::catalog::card::{Card, ColorTag, Deck};
use crate::catalog::error::CatalogError;

/// Insertion-ordered mapping from deck name to deck.
pub type DeckMap = IndexMap<String, Deck>;

/// In-memory deck catalog.
///
/// Lookups consult the custom partition first and fall back to the built-in
/// partition. Built-ins are never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    builtin: DeckMap,
    custom: DeckMap,
}

impl Catalog {
    /// Create a catalog over the given built-in decks with no custom decks.
    pub fn new(builtin: DeckMap) -> Self {
        Self {
            builtin,
            custom: DeckMap::new(),
        }
    }

    /// Catalog seeded with [`default_decks`].
    pub fn with_builtin_decks() -> Self {
        Self::new(default_decks())
    }

    /// Catalog seeded with [`default_decks`] followed by `extra` built-ins.
    ///
    /// An extra deck reusing a default name replaces it in place.
    pub fn with_extra_builtins(extra: impl IntoIterator<Item = (String, Deck)>) -> Self {
        let mut builtin = default_decks();
        for (name, deck) in extra {
            debug!(deck = %name, cards = deck.len(), "Registering extra built-in deck");
            builtin.insert(name, deck);
        }
        Self::new(builtin)
    }

    /// Merged view of built-in and custom decks.
    ///
    /// Built-ins come first in their original order; a custom deck that
    /// shadows a built-in takes over that slot. Custom-only decks follow in
    /// the order they were added.
    pub fn list_decks(&self) -> IndexMap<&str, &Deck> {
        let mut merged: IndexMap<&str, &Deck> = self
            .builtin
            .iter()
            .map(|(name, deck)| (name.as_str(), deck))
            .collect();
        for (name, deck) in &self.custom {
            merged.insert(name.as_str(), deck);
        }
        merged
    }

    pub fn get(&self, name: &str) -> Option<&Deck> {
        self.custom.get(name).or_else(|| self.builtin.get(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// True if `name` lives in the custom partition.
    pub fn is_custom(&self, name: &str) -> bool {
        self.custom.contains_key(name)
    }

    /// Custom decks only, in insertion order.
    pub fn custom_decks(&self) -> impl Iterator<Item = (&str, &Deck)> {
        self.custom.iter().map(|(name, deck)| (name.as_str(), deck))
    }

    /// Number of decks in the merged view.
    pub fn len(&self) -> usize {
        self.builtin.len()
            + self
                .custom
                .keys()
                .filter(|name| !self.builtin.contains_key(*name))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert or replace a custom deck.
    ///
    /// Fails when the name is blank or there are no cards.
    pub fn add_deck(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        color: ColorTag,
        cards: Vec<Card>,
    ) -> Result<(), CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::validation("Deck name must not be empty"));
        }
        if cards.is_empty() {
            return Err(CatalogError::validation(format!(
                "Deck '{}' needs at least one card",
                name
            )));
        }

        info!(deck = %name, cards = cards.len(), %color, "Adding custom deck");
        self.custom.insert(name, Deck::new(category, color, cards));
        Ok(())
    }

    /// Remove a custom deck. Returns whether anything was removed.
    ///
    /// Unknown names and built-in decks are left alone.
    pub fn delete_deck(&mut self, name: &str) -> bool {
        let removed = self.custom.shift_remove(name).is_some();
        if removed {
            info!(deck = %name, "Deleted custom deck");
        } else {
            debug!(deck = %name, "Delete ignored: not a custom deck");
        }
        removed
    }
}
