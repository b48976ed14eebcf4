//! Empty-pit capture.

use crate::board::{Board, PLAYER_TWO_STORE};
use crate::error::InvalidArgument;
use crate::side::Side;
use tracing::{debug, instrument};

/// Index of the pit directly across the board from `index`.
///
/// `index` must be a pit (0-5 or 7-12). Pits mirror around the twelve-pit
/// cycle, so pit 0 faces 12 and 5 faces 7.
pub fn opposite_pit(index: usize) -> usize {
    PLAYER_TWO_STORE - 1 - index
}

/// Moves the captor's stone at `index` and everything in the opposite pit
/// into `mover`'s store, leaving both pits empty.
///
/// Returns the number of stones banked.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `index` is not one of `mover`'s pits.
#[instrument(skip(board))]
pub fn capture(board: &mut Board, index: usize, mover: Side) -> Result<u32, InvalidArgument> {
    if !mover.pit_range().contains(&index) {
        return Err(InvalidArgument::new(format!(
            "Index {} is not a pit of {}",
            index, mover
        )));
    }

    let opposite = opposite_pit(index);
    let banked = board.take(index) + board.take(opposite);
    board.add(mover.store_index(), banked);
    debug!(opposite, banked, "Stones captured");
    Ok(banked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_pits_mirror() {
        assert_eq!(opposite_pit(0), 12);
        assert_eq!(opposite_pit(5), 7);
        assert_eq!(opposite_pit(7), 5);
        assert_eq!(opposite_pit(12), 0);
        for index in Side::PlayerOne.pit_range() {
            assert!(Side::PlayerTwo.pit_range().contains(&opposite_pit(index)));
            assert_eq!(opposite_pit(opposite_pit(index)), index);
        }
    }

    #[test]
    fn test_capture_banks_both_pits() {
        let mut board = Board::from([0, 0, 1, 0, 0, 0, 4, 0, 0, 0, 8, 0, 0, 2]);
        let banked = capture(&mut board, 2, Side::PlayerOne).unwrap();
        assert_eq!(banked, 9);
        assert_eq!(board.pits(), &[0, 0, 0, 0, 0, 0, 13, 0, 0, 0, 0, 0, 0, 2]);
    }

    #[test]
    fn test_capture_for_player_two() {
        let mut board = Board::from([0, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0]);
        let banked = capture(&mut board, 8, Side::PlayerTwo).unwrap();
        assert_eq!(banked, 4);
        assert_eq!(board.store(Side::PlayerTwo), 4);
        assert_eq!(board.store(Side::PlayerOne), 0);
        assert_eq!(board.total_stones(), 4);
    }

    #[test]
    fn test_capture_rejects_stores_and_opponent_pits() {
        let mut board = Board::classic();
        assert!(capture(&mut board, 6, Side::PlayerOne).is_err());
        assert!(capture(&mut board, 13, Side::PlayerTwo).is_err());
        assert!(capture(&mut board, 8, Side::PlayerOne).is_err());
        assert_eq!(board, Board::classic());
    }
}
