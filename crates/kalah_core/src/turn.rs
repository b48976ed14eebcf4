//! Turn orchestration: one accepted move into the next game value.

use crate::error::MoveError;
use crate::game::Game;
use crate::rules::{distribute, validate_move, winner};
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

/// Plays the 1-based `slot` for the side to move, stamping completion with
/// the current time.
///
/// See [`make_move_at`].
pub fn make_move(game: Game, slot: u32) -> Result<Game, MoveError> {
    make_move_at(game, slot, Utc::now())
}

/// Validates and plays the 1-based `slot`, returning the next game value.
///
/// Sowing (with any capture) runs first. If either row is then empty the
/// game finishes at `now` with its winner recorded and the turn left as is.
/// Otherwise the turn passes to the opponent, unless the last stone landed
/// in the mover's own store.
///
/// # Errors
///
/// Returns the first failing validation check. The input game is consumed
/// either way; callers that need it on failure should clone first.
#[instrument(skip(game), fields(game_id = %game.id(), turn = %game.turn()))]
pub fn make_move_at(game: Game, slot: u32, now: DateTime<Utc>) -> Result<Game, MoveError> {
    validate_move(&game, slot)?;

    let mover = *game.turn();
    let mut board = *game.board();
    let stones_before = board.total_stones();

    let last = distribute(&mut board, slot as usize - 1, mover)?;
    debug_assert_eq!(
        board.total_stones(),
        stones_before,
        "sowing must conserve stones"
    );
    debug!(last, %board, "Board after sowing");

    let game = game.with_board(board);

    // A winner exists exactly when one row has been emptied.
    if let Some(winner) = winner(&board) {
        info!(%winner, "Game finished");
        return Ok(game.with_finished_at(now).with_winner(winner));
    }

    if last == mover.store_index() {
        info!(slot, "Last stone in own store, extra turn");
        Ok(game)
    } else {
        debug!(slot, next = %mover.opponent(), "Turn passes");
        Ok(game.with_turn(mover.opponent()))
    }
}
