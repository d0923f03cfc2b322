use crate::catalog::Card;
use crate::mvi::Intent;
use crate::session::state::{Outcome, StudyMode};

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Begin a run over an already prepared card snapshot.
    /// An empty snapshot is ignored.
    Start {
        deck_name: String,
        mode: StudyMode,
        cards: Vec<Card>,
    },
    Flip,
    /// Advance, optionally recording a quiz outcome first.
    /// On the last card this finishes the run.
    Next { outcome: Option<Outcome> },
    Prev,
    Home,
}

impl Intent for SessionIntent {}
