//! Stone sowing.

use super::capture::capture;
use crate::board::{Board, PIT_COUNT};
use crate::error::InvalidArgument;
use crate::side::Side;
use tracing::{debug, instrument};

/// Sows the stones from `start` one per slot in play direction.
///
/// The opponent's store is skipped without consuming a stone. If the last
/// stone lands in a previously empty pit on the mover's side (not the
/// store), the capture rule is applied before returning.
///
/// Returns the 0-based index of the last slot that received a stone.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `start` is not in `0..14` or its slot is empty.
///
/// An empty start slot is rejected here rather than sowing nothing and
/// reporting index 0, so a no-op move can never be mistaken for a sowing
/// that ended in pit 0. [`crate::validate_move`] already refuses empty pits,
/// so [`crate::make_move`] never reaches this branch.
#[instrument(skip(board))]
pub fn distribute(board: &mut Board, start: usize, turn: Side) -> Result<usize, InvalidArgument> {
    if start >= PIT_COUNT {
        return Err(InvalidArgument::new(format!(
            "Start index {} should be between 0 and {}",
            start,
            PIT_COUNT - 1
        )));
    }
    if board.get(start) == Some(0) {
        return Err(InvalidArgument::new(format!("Slot {} has no stones to sow", start)));
    }

    let skipped = turn.opponent_store_index();
    let mut remaining = board.take(start);
    let mut last = start;
    while remaining > 0 {
        last = (last + 1) % PIT_COUNT;
        if last == skipped {
            continue;
        }
        board.add(last, 1);
        remaining -= 1;
    }
    debug!(last, "Stones sown");

    if board.get(last) == Some(1) && turn.owns_index(last) && last != turn.store_index() {
        capture(board, last, turn)?;
    }

    Ok(last)
}
