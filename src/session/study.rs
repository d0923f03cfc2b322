use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::catalog::{Card, Catalog};
use crate::mvi::{dispatch_mvi, Reducer};
use crate::session::error::SessionError;
use crate::session::intent::SessionIntent;
use crate::session::reducer::SessionReducer;
use crate::session::state::{Outcome, Score, SessionState, StudyMode, View};

/// A single user's study session.
///
/// Transitions whose precondition does not hold are silently ignored, so
/// callers can forward raw user input without gating it first. Only starting
/// a run can fail, and a failed start leaves the state untouched.
pub struct StudySession<R = StdRng> {
    state: SessionState,
    rng: R,
}

impl StudySession<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for StudySession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> StudySession<R> {
    /// Session drawing shuffle permutations from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: SessionState::default(),
            rng,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view()
    }

    pub fn deck_name(&self) -> Option<&str> {
        self.state.run().map(|run| run.deck_name.as_str())
    }

    pub fn mode(&self) -> Option<StudyMode> {
        self.state.run().map(|run| run.mode)
    }

    /// Card under study. `None` outside the study view.
    pub fn current_card(&self) -> Option<&Card> {
        match &self.state {
            SessionState::Study(run) => run.current_card(),
            _ => None,
        }
    }

    pub fn is_flipped(&self) -> bool {
        matches!(&self.state, SessionState::Study(run) if run.flipped)
    }

    pub fn score(&self) -> Score {
        self.state.run().map(|run| run.score).unwrap_or_default()
    }

    pub fn total_cards(&self) -> usize {
        self.state.run().map(|run| run.cards.len()).unwrap_or(0)
    }

    /// 1-based position for display; 0 when no run exists.
    pub fn position(&self) -> usize {
        self.state.run().map(|run| run.position + 1).unwrap_or(0)
    }

    pub fn is_last_card(&self) -> bool {
        matches!(&self.state, SessionState::Study(run) if run.is_last_card())
    }

    /// Start a run over `deck_name`, replacing whatever run existed.
    ///
    /// The deck's cards are copied; shuffle mode permutes the copy.
    pub fn start_study(
        &mut self,
        catalog: &Catalog,
        deck_name: &str,
        mode: StudyMode,
    ) -> Result<(), SessionError> {
        let Some(deck) = catalog.get(deck_name) else {
            warn!(deck = %deck_name, "Cannot start study: deck not found");
            return Err(SessionError::DeckNotFound {
                name: deck_name.to_string(),
            });
        };
        if deck.is_empty() {
            warn!(deck = %deck_name, "Cannot start study: deck is empty");
            return Err(SessionError::EmptyDeck {
                name: deck_name.to_string(),
            });
        }

        let mut cards = deck.cards.clone();
        if mode == StudyMode::Shuffle {
            cards.shuffle(&mut self.rng);
        }

        info!(deck = %deck_name, %mode, cards = cards.len(), "Starting study run");
        self.dispatch(SessionIntent::Start {
            deck_name: deck_name.to_string(),
            mode,
            cards,
        });
        Ok(())
    }

    pub fn flip(&mut self) {
        self.dispatch(SessionIntent::Flip);
    }

    pub fn go_next(&mut self, outcome: Option<Outcome>) {
        self.dispatch(SessionIntent::Next { outcome });
    }

    pub fn go_prev(&mut self) {
        self.dispatch(SessionIntent::Prev);
    }

    pub fn go_home(&mut self) {
        self.dispatch(SessionIntent::Home);
    }

    /// Start the current deck over in the same mode, re-reading the deck and
    /// re-shuffling if needed. Does nothing when no run exists.
    pub fn restart(&mut self, catalog: &Catalog) -> Result<(), SessionError> {
        let Some(run) = self.state.run() else {
            debug!("Restart ignored: no study run");
            return Ok(());
        };
        let deck_name = run.deck_name.clone();
        let mode = run.mode;
        self.start_study(catalog, &deck_name, mode)
    }

    fn dispatch(&mut self, intent: SessionIntent) {
        debug!(?intent, "Session intent");
        dispatch_mvi!(self, state, SessionReducer, intent);
    }
}
