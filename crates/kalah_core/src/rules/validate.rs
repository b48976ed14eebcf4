//! Move legality checks.

use crate::board::PIT_COUNT;
use crate::error::{InvalidMoveReason, MoveError};
use crate::game::Game;
use tracing::{instrument, warn};

/// Checks whether the 1-based `slot` is a legal move for `game`.
///
/// Checks run in order and the first failure wins: the game must be in
/// progress, the slot in `1..=14`, on the side to move, not a store, and
/// its pit must hold at least one stone.
///
/// # Errors
///
/// [`MoveError::GameAlreadyFinished`] or [`MoveError::InvalidMove`].
#[instrument(skip(game), fields(game_id = %game.id(), turn = %game.turn()))]
pub fn validate_move(game: &Game, slot: u32) -> Result<(), MoveError> {
    if game.is_finished() {
        warn!("Move attempted on finished game");
        return Err(MoveError::GameAlreadyFinished);
    }

    let reason = if !(1..=PIT_COUNT as u32).contains(&slot) {
        Some(InvalidMoveReason::OutOfRange(slot))
    } else if !game.turn().owns_slot(slot) {
        Some(InvalidMoveReason::AdversaryPit(slot))
    } else if is_store_slot(slot) {
        Some(InvalidMoveReason::HousePit(slot))
    } else if game.board().get(slot as usize - 1) == Some(0) {
        Some(InvalidMoveReason::EmptyPit(slot))
    } else {
        None
    };

    match reason {
        Some(reason) => {
            warn!(%reason, "Invalid move");
            Err(reason.into())
        }
        None => Ok(()),
    }
}

/// Every slot the side to move may legally play, in ascending order.
///
/// Empty for a finished game.
pub fn legal_slots(game: &Game) -> Vec<u32> {
    if game.is_finished() {
        return Vec::new();
    }
    game.turn()
        .pit_range()
        .filter(|&index| game.board().get(index).is_some_and(|stones| stones > 0))
        .map(|index| index as u32 + 1)
        .collect()
}

fn is_store_slot(slot: u32) -> bool {
    slot == crate::PLAYER_ONE_STORE as u32 + 1 || slot == crate::PLAYER_TWO_STORE as u32 + 1
}
