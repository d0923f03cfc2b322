use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::catalog::Card;
use crate::mvi::UiState;

/// How a deck is studied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StudyMode {
    /// Flip through cards in deck order.
    #[default]
    Review,
    /// Self-graded: mark each flipped card correct or incorrect.
    Quiz,
    /// Review over a random permutation of the deck.
    Shuffle,
}

impl StudyMode {
    pub fn label(self) -> &'static str {
        match self {
            StudyMode::Review => "Review",
            StudyMode::Quiz => "Quiz",
            StudyMode::Shuffle => "Shuffle",
        }
    }
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported result for one quiz card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Running quiz tally. Counters only ever go up within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    pub correct: u32,
    pub incorrect: u32,
}

impl Score {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.correct = self.correct.saturating_add(1),
            Outcome::Incorrect => self.incorrect = self.incorrect.saturating_add(1),
        }
    }

    pub fn total(&self) -> u32 {
        self.correct.saturating_add(self.incorrect)
    }

    /// Share of correct answers in percent; 0 when nothing was graded.
    pub fn percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(total) * 100.0
    }

    /// [`Score::percentage`] rounded to a whole number for display.
    pub fn rounded_percentage(&self) -> u32 {
        self.percentage().round() as u32
    }
}

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Study,
    Results,
}

/// One pass over a deck snapshot.
///
/// `cards` is captured at start and never re-derived, so later catalog edits
/// do not affect a run in progress. `position < cards.len()` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyRun {
    pub deck_name: String,
    pub mode: StudyMode,
    pub cards: Vec<Card>,
    pub position: usize,
    pub flipped: bool,
    pub score: Score,
}

impl StudyRun {
    pub fn new(deck_name: String, mode: StudyMode, cards: Vec<Card>) -> Self {
        Self {
            deck_name,
            mode,
            cards,
            position: 0,
            flipped: false,
            score: Score::default(),
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.position)
    }

    pub fn is_last_card(&self) -> bool {
        self.position + 1 >= self.cards.len()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Home,
    Study(StudyRun),
    /// Finished run, kept for the results screen and for restart.
    Results(StudyRun),
}

impl UiState for SessionState {}

impl SessionState {
    pub fn view(&self) -> View {
        match self {
            SessionState::Home => View::Home,
            SessionState::Study(_) => View::Study,
            SessionState::Results(_) => View::Results,
        }
    }

    /// The active or just-finished run.
    pub fn run(&self) -> Option<&StudyRun> {
        match self {
            SessionState::Home => None,
            SessionState::Study(run) | SessionState::Results(run) => Some(run),
        }
    }
}
