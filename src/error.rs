//! Error types for the flashcard core

use thiserror::Error;

use crate::deck::CardId;

/// Errors surfaced by deck and view operations
///
/// None of these are fatal: callers report them to the user and keep going.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudyError {
    /// Front or back text was empty after trimming
    #[error("Both the front and the back of a card are required")]
    Validation,

    /// The current view has no cards to act on
    #[error("No cards to show. Add a card or check your favorites")]
    EmptyView,

    /// No card with the given id exists in the deck
    #[error("Card {0} not found")]
    NotFound(CardId),

    /// The persistence collaborator could not read or write
    #[error("Storage unavailable. Changes may not survive a restart")]
    PersistenceUnavailable,
}

/// Errors raised by a key/value backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StudyError {
    /// Check if this error is the user's input being rejected
    pub fn is_user_error(&self) -> bool {
        matches!(self, StudyError::Validation | StudyError::EmptyView)
    }
}
