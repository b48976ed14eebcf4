//! Kalah game server library.
//!
//! Wraps the [`kalah_core`] rules engine with persistence, a service layer
//! and a REST transport.
//!
//! # Architecture
//!
//! - **Storage**: the [`GameStorage`] lookup/save contract and an in-memory store
//! - **Service**: [`GameService`] creates games and plays moves, one at a time per game
//! - **HTTP**: axum routes for `POST /games` and `PUT /games/{id}/pits/{pit}`
//! - **Config**: [`ServerConfig`] from TOML with CLI overrides
//!
//! # Example
//!
//! ```
//! use kalah::{GameService, InMemoryGameStorage};
//!
//! # fn example() -> Result<(), kalah::GameError> {
//! let service = GameService::new(InMemoryGameStorage::new());
//! let game = service.create_game()?;
//! let game = service.make_move(game.id(), 6)?;
//! assert_eq!(game.board().store(kalah::Side::PlayerOne), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
pub mod http;
mod service;
mod storage;

pub use config::{ConfigError, ServerConfig};
pub use error::{GameError, StorageError};
pub use service::GameService;
pub use storage::{GameStorage, InMemoryGameStorage};

pub use kalah_core::{Board, Game, GameId, GameStatus, InvalidMoveReason, Side};
