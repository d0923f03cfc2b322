//! Read-only panel for browsing custom decks and their cards.

mod intent;
mod panel;
mod reducer;
mod state;

pub use intent::DeckViewIntent;
pub use panel::render_deck_view;
pub use reducer::DeckViewReducer;
pub use state::DeckViewState;
