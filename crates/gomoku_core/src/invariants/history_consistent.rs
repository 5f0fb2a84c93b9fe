//! History invariants: the move list fully explains the grid.

use super::Invariant;
use crate::Board;
use std::collections::HashSet;

/// Invariant: every history entry is on the grid and nothing else is.
///
/// The number of stones equals the history length and each move's cell
/// still holds that move's colour.
pub struct HistoryMatchesGrid;

impl Invariant<Board> for HistoryMatchesGrid {
    fn holds(board: &Board) -> bool {
        board.stone_count() == board.history().len()
            && board
                .history()
                .iter()
                .all(|mv| board.get(mv.row, mv.col) == Some(mv.stone) && mv.stone.is_player())
    }

    fn description() -> &'static str {
        "History length and contents match the stones on the grid"
    }
}

/// Invariant: no two history entries address the same cell.
pub struct HistoryUniqueCells;

impl Invariant<Board> for HistoryUniqueCells {
    fn holds(board: &Board) -> bool {
        let mut seen = HashSet::new();
        board.history().iter().all(|mv| seen.insert((mv.row, mv.col)))
    }

    fn description() -> &'static str {
        "Each cell appears at most once in the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stone;

    #[test]
    fn test_empty_board_holds() {
        let board = Board::new(5).unwrap();
        assert!(HistoryMatchesGrid::holds(&board));
        assert!(HistoryUniqueCells::holds(&board));
    }

    #[test]
    fn test_holds_through_place_and_undo() {
        let mut board = Board::new(6).unwrap();
        board.place(0, 0, Stone::Black).unwrap();
        board.place(5, 5, Stone::White).unwrap();
        board.undo();
        board.place(5, 5, Stone::Black).unwrap();

        assert!(HistoryMatchesGrid::holds(&board));
        assert!(HistoryUniqueCells::holds(&board));
    }
}
