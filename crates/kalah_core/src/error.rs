//! Error types raised by the rules engine.

use derive_more::{Display, Error};

/// Reason a requested slot failed move validation.
///
/// Each variant carries the 1-based slot that was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidMoveReason {
    /// Slot is outside `1..=14`.
    #[display("PitId should be between 1 and 14")]
    OutOfRange(u32),

    /// Slot belongs to the side that is not on turn.
    #[display("Player is trying to move stone from adversary pit")]
    AdversaryPit(u32),

    /// Slot is a store (7 or 14).
    #[display("Stones from the house cannot be moved")]
    HousePit(u32),

    /// Pit holds no stones.
    #[display("There are no stones in the pit")]
    EmptyPit(u32),
}

impl InvalidMoveReason {
    /// Returns the requested slot that was rejected.
    pub fn slot(&self) -> u32 {
        match self {
            Self::OutOfRange(slot)
            | Self::AdversaryPit(slot)
            | Self::HousePit(slot)
            | Self::EmptyPit(slot) => *slot,
        }
    }
}

impl std::error::Error for InvalidMoveReason {}

/// Internal contract violation inside the sowing or scoring rules.
///
/// Not reachable through [`crate::make_move`] once validation has passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Error)]
#[display("Invalid argument: {}", message)]
pub struct InvalidArgument {
    /// Description of the violated precondition.
    pub message: String,
}

impl InvalidArgument {
    /// Creates a new invalid-argument error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The game already has a completion timestamp.
    #[display("Game is already finished")]
    GameAlreadyFinished,

    /// The requested slot failed one of the validator checks.
    #[display("{}", _0)]
    InvalidMove(InvalidMoveReason),

    /// A rule precondition was violated.
    #[display("{}", _0)]
    InvalidArgument(InvalidArgument),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GameAlreadyFinished => None,
            Self::InvalidMove(reason) => Some(reason),
            Self::InvalidArgument(err) => Some(err),
        }
    }
}

impl From<InvalidMoveReason> for MoveError {
    fn from(reason: InvalidMoveReason) -> Self {
        Self::InvalidMove(reason)
    }
}

impl From<InvalidArgument> for MoveError {
    fn from(err: InvalidArgument) -> Self {
        Self::InvalidArgument(err)
    }
}
