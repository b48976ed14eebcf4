//! The game record carried between moves.

use crate::board::Board;
use crate::side::Side;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;
use uuid::Uuid;

/// Opaque game identifier, assigned when the game is created.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for GameId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Lifecycle state of a game, derived from its completion timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// Terminal; no further moves.
    Finished,
}

/// One Kalah match.
///
/// Updates never mutate in place: the `with_*` setters consume the value
/// and return the next one. The identifier and start time have no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct Game {
    /// Unique identifier.
    #[setters(skip)]
    id: GameId,
    /// Stone counts.
    board: Board,
    /// Side to move.
    turn: Side,
    /// When the game was created.
    #[setters(skip)]
    started_at: DateTime<Utc>,
    /// When the game ended; present iff finished.
    #[setters(strip_option)]
    finished_at: Option<DateTime<Utc>>,
    /// The winner; present iff finished.
    #[setters(strip_option)]
    winner: Option<Side>,
}

impl Game {
    /// Creates a fresh game: classic board, player one to move.
    #[instrument]
    pub fn new() -> Self {
        Self::starting(GameId::new(), Utc::now())
    }

    /// Creates a fresh game with a caller-chosen identifier and start time.
    pub fn starting(id: GameId, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            board: Board::classic(),
            turn: Side::PlayerOne,
            started_at,
            finished_at: None,
            winner: None,
        }
    }

    /// Returns the lifecycle state.
    pub fn status(&self) -> GameStatus {
        if self.finished_at.is_some() {
            GameStatus::Finished
        } else {
            GameStatus::InProgress
        }
    }

    /// Whether the game has ended.
    pub fn is_finished(&self) -> bool {
        self.status() == GameStatus::Finished
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
