use tracing::warn;

use crate::catalog::Catalog;
use crate::mvi::{dispatch_mvi, Reducer};
use crate::session::{Outcome, StudyMode, StudySession, View};
use crate::ui::author::{AuthorDialogState, AuthorIntent, AuthorReducer};
use crate::ui::deck_view::{DeckViewIntent, DeckViewReducer, DeckViewState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message shown under the body until the next action replaces it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Terminal front-end state: the catalog, the study session and the
/// home-screen selection. Rendering reads from here; input mutates it.
pub struct App {
    should_quit: bool,
    catalog: Catalog,
    session: StudySession,
    default_mode: StudyMode,
    selection: usize,
    /// State of the new-deck dialog (MVI pattern).
    author_dialog: AuthorDialogState,
    /// Custom-deck browser (MVI pattern).
    deck_view: DeckViewState,
    notice: Option<Notice>,
}

impl App {
    pub fn new(catalog: Catalog, default_mode: StudyMode) -> Self {
        Self::with_session(catalog, default_mode, StudySession::new())
    }

    pub fn with_session(catalog: Catalog, default_mode: StudyMode, session: StudySession) -> Self {
        Self {
            should_quit: false,
            catalog,
            session,
            default_mode,
            selection: 0,
            author_dialog: AuthorDialogState::default(),
            deck_view: DeckViewState::default(),
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &StudySession {
        &self.session
    }

    pub fn view(&self) -> View {
        self.session.view()
    }

    pub fn default_mode(&self) -> StudyMode {
        self.default_mode
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    // ========================================================================
    // Home screen
    // ========================================================================

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_deck(&self) -> Option<&str> {
        self.catalog
            .list_decks()
            .get_index(self.selection)
            .map(|(name, _)| *name)
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.catalog.len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Start studying the highlighted deck. `None` uses the configured mode.
    pub fn start_selected(&mut self, mode: Option<StudyMode>) {
        let Some(name) = self.selected_deck().map(str::to_string) else {
            return;
        };
        let mode = mode.unwrap_or(self.default_mode);
        match self.session.start_study(&self.catalog, &name, mode) {
            Ok(()) => self.notice = None,
            Err(err) => self.notice = Some(Notice::error(err.to_string())),
        }
    }

    /// Delete the highlighted deck if it is a custom one.
    pub fn delete_selected(&mut self) {
        let Some(name) = self.selected_deck().map(str::to_string) else {
            return;
        };
        if self.catalog.delete_deck(&name) {
            self.notice = Some(Notice::info(format!("Deleted '{}'", name)));
            self.clamp_selection();
        } else {
            self.notice = Some(Notice::error("Built-in decks cannot be deleted"));
        }
    }

    fn clamp_selection(&mut self) {
        self.selection = self.selection.min(self.catalog.len().saturating_sub(1));
    }

    // ========================================================================
    // Study and results screens
    // ========================================================================

    pub fn flip(&mut self) {
        self.session.flip();
    }

    /// Advance without grading. A flipped quiz card must be graded instead.
    pub fn next_card(&mut self) {
        if self.session.mode() == Some(StudyMode::Quiz) && self.session.is_flipped() {
            self.notice = Some(Notice::info(
                "Mark the card correct (y) or incorrect (x)",
            ));
            return;
        }
        self.notice = None;
        self.session.go_next(None);
    }

    /// Grade the current quiz card. Only available once it is flipped.
    pub fn grade(&mut self, outcome: Outcome) {
        if self.session.mode() != Some(StudyMode::Quiz) || !self.session.is_flipped() {
            return;
        }
        self.notice = None;
        self.session.go_next(Some(outcome));
    }

    pub fn prev_card(&mut self) {
        self.notice = None;
        self.session.go_prev();
    }

    pub fn go_home(&mut self) {
        self.notice = None;
        self.session.go_home();
    }

    pub fn restart(&mut self) {
        if let Err(err) = self.session.restart(&self.catalog) {
            warn!(error = %err, "Restart failed");
            self.notice = Some(Notice::error(err.to_string()));
            self.session.go_home();
        }
    }

    // ========================================================================
    // New-deck dialog (MVI pattern)
    // ========================================================================

    pub fn author_dialog(&self) -> &AuthorDialogState {
        &self.author_dialog
    }

    /// Dispatch an intent to the new-deck dialog reducer.
    pub fn dispatch_author(&mut self, intent: AuthorIntent) {
        dispatch_mvi!(self, author_dialog, AuthorReducer, intent);
    }

    pub fn open_author_dialog(&mut self) {
        self.dispatch_author(AuthorIntent::Open);
    }

    pub fn close_author_dialog(&mut self) {
        self.dispatch_author(AuthorIntent::Close);
    }

    /// Submit the draft. On success the dialog closes and the new deck is
    /// selected; on failure the dialog stays open with the message.
    pub fn save_author_dialog(&mut self) {
        let Some(draft) = self.author_dialog.draft().cloned() else {
            return;
        };
        let replacing = self.catalog.contains(&draft.name);
        match draft.submit(&mut self.catalog) {
            Ok(count) => {
                self.close_author_dialog();
                if let Some(index) = self.catalog.list_decks().get_index_of(draft.name.as_str()) {
                    self.selection = index;
                }
                let verb = if replacing { "replaced" } else { "created" };
                self.notice = Some(Notice::info(format!(
                    "Deck '{}' {} with {} cards!",
                    draft.name, verb, count
                )));
            }
            Err(err) => {
                warn!(error = %err, "Rejected new deck");
                self.dispatch_author(AuthorIntent::Rejected {
                    message: err.to_string(),
                });
            }
        }
    }

    // ========================================================================
    // Custom-deck browser (MVI pattern)
    // ========================================================================

    pub fn deck_view(&self) -> &DeckViewState {
        &self.deck_view
    }

    pub fn dispatch_deck_view(&mut self, intent: DeckViewIntent) {
        dispatch_mvi!(self, deck_view, DeckViewReducer, intent);
    }

    fn custom_deck_names(&self) -> Vec<String> {
        self.catalog
            .custom_decks()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Open the browser on the highlighted deck when it is custom, otherwise
    /// on the first custom deck.
    pub fn open_deck_view(&mut self) {
        let names = self.custom_deck_names();
        let selected = self
            .selected_deck()
            .filter(|name| self.catalog.is_custom(name))
            .map(str::to_string);
        let Some(deck_name) = selected.or_else(|| names.first().cloned()) else {
            self.notice = Some(Notice::info(
                "No custom decks yet. Press n to create one!",
            ));
            return;
        };
        self.notice = None;
        self.dispatch_deck_view(DeckViewIntent::Open { deck_name });
    }

    pub fn close_deck_view(&mut self) {
        self.dispatch_deck_view(DeckViewIntent::Close);
    }

    /// Show the next (or previous) custom deck, wrapping around.
    pub fn cycle_deck_view(&mut self, forward: bool) {
        let names = self.custom_deck_names();
        let Some(current) = self.deck_view.deck_name() else {
            return;
        };
        if names.is_empty() {
            return;
        }
        let index = names.iter().position(|name| name == current).unwrap_or(0);
        let next = if forward {
            (index + 1) % names.len()
        } else {
            (index + names.len() - 1) % names.len()
        };
        self.dispatch_deck_view(DeckViewIntent::Switch {
            deck_name: names[next].clone(),
        });
    }

    pub fn scroll_deck_view(&mut self, down: bool) {
        let Some(deck) = self.deck_view.deck_name().and_then(|name| self.catalog.get(name)) else {
            return;
        };
        let intent = if down {
            DeckViewIntent::ScrollDown {
                last: deck.len().saturating_sub(1),
            }
        } else {
            DeckViewIntent::ScrollUp
        };
        self.dispatch_deck_view(intent);
    }

    /// Delete the deck shown in the browser and move on to another custom
    /// deck, closing the browser when none is left.
    pub fn delete_viewed_deck(&mut self) {
        let Some(name) = self.deck_view.deck_name().map(str::to_string) else {
            return;
        };
        if !self.catalog.delete_deck(&name) {
            return;
        }
        self.clamp_selection();
        self.notice = Some(Notice::info(format!("Deleted '{}'", name)));
        match self.custom_deck_names().into_iter().next() {
            Some(deck_name) => self.dispatch_deck_view(DeckViewIntent::Switch { deck_name }),
            None => self.close_deck_view(),
        }
    }
}
