use thiserror::Error;

use crate::session::Status;

/// Errors raised by the game session core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A session cannot be built from a dictionary with no words.
    #[error("dictionary is empty")]
    EmptyDictionary,

    /// The action is not allowed once the session has ended.
    #[error("cannot {action} while session is {status}")]
    InvalidTransition { action: &'static str, status: Status },

    /// `pass` was requested with no passes remaining.
    #[error("no passes left")]
    NoPassesLeft,

    /// A persisted snapshot failed structural validation.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),
}

impl GameError {
    /// Invalid transitions are absorbed as no-ops by callers.
    pub fn is_ignorable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidTransition { .. } | GameError::NoPassesLeft
        )
    }
}

/// Errors raised by the persistence collaborators.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
