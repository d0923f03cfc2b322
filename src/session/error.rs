use thiserror::Error;

/// Errors raised when a session cannot be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No deck with this name exists in the catalog.
    #[error("Deck '{name}' not found")]
    DeckNotFound { name: String },

    /// The deck exists but has nothing to study.
    #[error("Deck '{name}' has no cards")]
    EmptyDeck { name: String },
}
