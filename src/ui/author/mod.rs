//! Dialog for creating a custom deck.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_author_dialog;
pub use intent::AuthorIntent;
pub use reducer::AuthorReducer;
pub use state::{AuthorDialogState, AuthorField};
