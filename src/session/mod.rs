//! Study session state machine.
//!
//! [`SessionReducer`] holds every transition as a pure function over
//! [`SessionState`]. [`StudySession`] wraps it with the impure parts: deck
//! lookup in the [`Catalog`](crate::catalog::Catalog) and the random
//! permutation used by shuffle mode.

mod error;
mod intent;
mod reducer;
mod state;
mod study;

pub use error::SessionError;
pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{Outcome, Score, SessionState, StudyMode, StudyRun, View};
pub use study::StudySession;
