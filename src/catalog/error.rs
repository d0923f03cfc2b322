use thiserror::Error;

/// Errors raised by catalog mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Rejected user input. The message is meant to be shown as-is.
    #[error("{message}")]
    ValidationError { message: String },
}

impl CatalogError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        CatalogError::ValidationError {
            message: message.into(),
        }
    }
}
