//! Win detection logic for five-in-a-row.

use crate::{Axis, Board, Stone};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Run length that wins the game.
pub const WIN_LENGTH: usize = 5;

/// Counts the run of `stone` through `(row, col)` along one axis.
///
/// The point itself always counts as one, whatever the cell really holds,
/// so the same walk serves both win detection and hypothetical placement.
/// The walk proceeds forward along `(dr, dc)` and then backward, stopping at
/// the board edge or the first cell that does not hold `stone`.
pub fn line_run(
    board: &Board,
    row: usize,
    col: usize,
    (dr, dc): (isize, isize),
    stone: Stone,
) -> usize {
    let count_from = |sign: isize| {
        let mut count = 0;
        let mut r = row as isize + dr * sign;
        let mut c = col as isize + dc * sign;
        while board.cell(r, c) == Some(stone) {
            count += 1;
            r += dr * sign;
            c += dc * sign;
        }
        count
    };
    1 + count_from(1) + count_from(-1)
}

/// Returns true if the stone at `(row, col)` is part of five or more in a row.
///
/// Empty or out-of-range cells never win.
#[instrument(skip(board))]
pub fn check_five_through(board: &Board, row: usize, col: usize) -> bool {
    let stone = match board.get(row, col) {
        Some(stone) if stone.is_player() => stone,
        _ => return false,
    };

    Axis::iter().any(|axis| line_run(board, row, col, axis.delta(), stone) >= WIN_LENGTH)
}
