//! Heuristic computer opponent.
//!
//! Each candidate cell is scored by the runs a stone there would make for
//! either colour; the highest score wins. There is no look-ahead.

use crate::rules::line_run;
use crate::{Axis, Board, GameError, SearchWindow, Stone, Weights};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Stateless move picker for one colour.
///
/// Reads the board it is given and never modifies it, so repeated calls on
/// an unchanged board return the same move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicAi {
    own: Stone,
    opponent: Stone,
    window: SearchWindow,
    weights: Weights,
}

impl HeuristicAi {
    /// Creates an opponent playing `own` with default tuning.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidStone` if `own` is `Empty`.
    #[instrument]
    pub fn new(own: Stone) -> Result<Self, GameError> {
        if !own.is_player() {
            return Err(GameError::InvalidStone(own.to_char()));
        }
        Ok(Self {
            own,
            opponent: own.other(),
            window: SearchWindow::default(),
            weights: Weights::default(),
        })
    }

    /// Replaces the candidate search window.
    #[must_use]
    pub fn with_window(mut self, window: SearchWindow) -> Self {
        self.window = window;
        self
    }

    /// Replaces the score weights.
    #[must_use]
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Colour this opponent plays.
    pub fn own(&self) -> Stone {
        self.own
    }

    /// Colour it plays against.
    pub fn opponent(&self) -> Stone {
        self.opponent
    }

    /// Run length a hypothetical `stone` at `(row, col)` would make along `axis`.
    pub fn run_length(board: &Board, row: usize, col: usize, axis: Axis, stone: Stone) -> usize {
        line_run(board, row, col, axis.delta(), stone)
    }

    /// Scores a stone at `(row, col)`.
    ///
    /// Sums, over the four axes, the squared own run times the own weight
    /// and the squared opponent run times the block weight.
    pub fn evaluate_point(&self, board: &Board, row: usize, col: usize) -> usize {
        Axis::iter()
            .map(|axis| {
                let own_run = Self::run_length(board, row, col, axis, self.own);
                let opp_run = Self::run_length(board, row, col, axis, self.opponent);
                (own_run * own_run)
                    .saturating_mul(*self.weights.own())
                    .saturating_add((opp_run * opp_run).saturating_mul(*self.weights.block()))
            })
            .fold(0, usize::saturating_add)
    }

    /// Empty cells near the most recent moves, in row-major order.
    #[instrument(skip(self, board), fields(moves = board.history().len()))]
    pub fn candidates(&self, board: &Board) -> BTreeSet<(usize, usize)> {
        let history = board.history();
        let recent = &history[history.len().saturating_sub(*self.window.history_window())..];
        let radius = *self.window.radius();
        let last = board.size() - 1;

        let mut cells = BTreeSet::new();
        for mv in recent {
            let rows = mv.row.saturating_sub(radius)..=mv.row.saturating_add(radius).min(last);
            for row in rows {
                let cols = mv.col.saturating_sub(radius)..=mv.col.saturating_add(radius).min(last);
                for col in cols {
                    if board.get(row, col) == Some(Stone::Empty) {
                        cells.insert((row, col));
                    }
                }
            }
        }
        cells
    }

    /// Picks the highest-scoring candidate cell.
    ///
    /// On an empty board this is the centre. Ties go to the first cell in
    /// row-major order. Returns `None` only when moves exist but no empty
    /// cell lies within the search window.
    #[instrument(skip(self, board), fields(own = ?self.own))]
    pub fn best_move(&self, board: &Board) -> Option<(usize, usize)> {
        if board.history().is_empty() {
            let mid = board.size() / 2;
            return Some((mid, mid));
        }

        let candidates = self.candidates(board);
        let mut best: Option<((usize, usize), usize)> = None;
        for (row, col) in candidates.iter().copied() {
            let score = self.evaluate_point(board, row, col);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some(((row, col), score));
            }
        }

        debug!(candidates = candidates.len(), ?best, "Heuristic move chosen");
        best.map(|(pos, _)| pos)
    }
}
