//! Kalah rules engine.
//!
//! Pure, synchronous game logic for the classic six-pit Kalah layout.
//!
//! # Architecture
//!
//! - **Board**: the fourteen-slot stone array (twelve pits, two stores)
//! - **Rules**: move validation, sowing, the empty-pit capture and end-game scoring
//! - **Turn**: orchestrates one accepted move into the next [`Game`] value
//!
//! # Example
//!
//! ```
//! use kalah_core::{Game, Side, make_move};
//!
//! # fn example() -> Result<(), kalah_core::MoveError> {
//! let game = Game::new();
//! let game = make_move(game, 6)?;
//! assert_eq!(*game.turn(), Side::PlayerTwo);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
pub mod rules;
mod side;
mod turn;

pub use board::{
    Board, CLASSIC_STONES_PER_PIT, PIT_COUNT, PITS_PER_SIDE, PLAYER_ONE_STORE, PLAYER_TWO_STORE,
};
pub use error::{InvalidArgument, InvalidMoveReason, MoveError};
pub use game::{Game, GameId, GameStatus};
pub use rules::{capture, distribute, is_finished, legal_slots, opposite_pit, validate_move, winner};
pub use side::Side;
pub use turn::{make_move, make_move_at};
