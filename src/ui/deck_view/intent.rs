use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DeckViewIntent {
    /// Show `deck_name` from its first card.
    Open { deck_name: String },
    Close,
    /// Show another deck while the panel stays open.
    Switch { deck_name: String },
    /// Move one card down; `last` is the index of the deck's last card.
    ScrollDown { last: usize },
    ScrollUp,
}

impl Intent for DeckViewIntent {}
