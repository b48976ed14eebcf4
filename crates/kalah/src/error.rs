//! Service-level error types.

use derive_more::{Display, Error};
use kalah_core::{GameId, InvalidArgument, InvalidMoveReason, MoveError};
use tracing::instrument;

/// Storage failure with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Storage error: {} at {}:{}", message, file, line)]
pub struct StorageError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StorageError {
    /// Creates a new storage error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Why a create or move request was rejected.
///
/// No variant leaves stored state modified.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// No stored game has this identifier.
    #[display("Game not found")]
    NotFound(GameId),

    /// The game is terminal.
    #[display("Game is already finished")]
    AlreadyFinished,

    /// The requested slot failed validation.
    #[display("{}", _0)]
    InvalidMove(InvalidMoveReason),

    /// A rule precondition was violated; indicates a bug, not bad input.
    #[display("{}", _0)]
    InvalidArgument(InvalidArgument),

    /// The storage collaborator failed.
    #[display("{}", _0)]
    Storage(StorageError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) | Self::AlreadyFinished => None,
            Self::InvalidMove(reason) => Some(reason),
            Self::InvalidArgument(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::GameAlreadyFinished => Self::AlreadyFinished,
            MoveError::InvalidMove(reason) => Self::InvalidMove(reason),
            MoveError::InvalidArgument(err) => Self::InvalidArgument(err),
        }
    }
}

impl From<StorageError> for GameError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}
