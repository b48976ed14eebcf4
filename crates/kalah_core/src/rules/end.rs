//! End-of-game detection and scoring.

use crate::board::Board;
use crate::side::Side;
use tracing::instrument;

/// Whether either side has emptied all six of its pits.
///
/// Stores are not counted.
#[instrument(skip(board))]
pub fn is_finished(board: &Board) -> bool {
    board.pit_stones(Side::PlayerOne) == 0 || board.pit_stones(Side::PlayerTwo) == 0
}

/// The winner of a finished board, or `None` while play continues.
///
/// Each side scores its remaining pits plus its store. Player one wins only
/// with a strictly greater total; a tie goes to player two.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Side> {
    if !is_finished(board) {
        return None;
    }
    if board.side_total(Side::PlayerOne) > board.side_total(Side::PlayerTwo) {
        Some(Side::PlayerOne)
    } else {
        Some(Side::PlayerTwo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_board_not_finished() {
        assert!(!is_finished(&Board::classic()));
        assert_eq!(winner(&Board::classic()), None);
    }

    #[test]
    fn test_finished_when_either_row_empty() {
        let one_empty = Board::from([0, 0, 0, 0, 0, 0, 30, 1, 0, 0, 0, 0, 0, 10]);
        let two_empty = Board::from([0, 0, 3, 0, 0, 0, 30, 0, 0, 0, 0, 0, 0, 10]);
        assert!(is_finished(&one_empty));
        assert!(is_finished(&two_empty));
    }

    #[test]
    fn test_stores_do_not_keep_game_alive() {
        let board = Board::from([0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0]);
        assert!(is_finished(&board));
        let board = Board::from([0, 0, 0, 0, 0, 1, 50, 0, 0, 0, 0, 0, 1, 50]);
        assert!(!is_finished(&board));
    }

    #[test]
    fn test_winner_counts_remaining_pits() {
        // Player one's store is larger, but player two still has stones on the board.
        let board = Board::from([0, 0, 0, 0, 0, 0, 20, 10, 5, 0, 0, 0, 0, 6]);
        assert_eq!(winner(&board), Some(Side::PlayerTwo));
        let board = Board::from([0, 0, 0, 0, 0, 0, 22, 10, 5, 0, 0, 0, 0, 6]);
        assert_eq!(winner(&board), Some(Side::PlayerOne));
    }

    #[test]
    fn test_tie_goes_to_player_two() {
        let board = Board::from([0, 0, 0, 0, 0, 0, 36, 0, 0, 0, 0, 0, 0, 36]);
        assert_eq!(winner(&board), Some(Side::PlayerTwo));
    }
}
