//! Model-View-Intent (MVI) primitives.
//!
//! Both the study session and the terminal dialogs use unidirectional
//! data flow built on these traits.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Self-contained snapshot of everything a view needs
//! - **Intent**: A user action (flip, next, save, ...)
//! - **Reducer**: Pure function that turns (state, intent) into the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Take the state stored in `$self.$field`, run it through `$reducer` and
/// store the result back. The state type must implement `Default`.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub(crate) use dispatch_mvi;
