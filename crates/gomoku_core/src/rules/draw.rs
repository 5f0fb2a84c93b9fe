//! Draw detection logic for five-in-a-row.

use crate::{Board, Stone};
use tracing::instrument;

/// Checks if every cell holds a stone.
///
/// A full board with no five-in-a-row through the last move is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|s| *s != Stone::Empty)
}
