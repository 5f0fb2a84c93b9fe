//! Tunable parameters for the heuristic opponent.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which empty cells the opponent considers.
///
/// Only cells within `radius` (Chebyshev distance) of one of the last
/// `history_window` moves are scored, keeping the search near the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchWindow {
    /// Chebyshev distance around each recent move.
    #[serde(default = "default_radius")]
    radius: usize,

    /// Number of most recent moves that seed candidates.
    #[serde(default = "default_history_window")]
    history_window: usize,
}

#[instrument]
fn default_radius() -> usize {
    2
}

#[instrument]
fn default_history_window() -> usize {
    40
}

impl SearchWindow {
    /// Creates a search window.
    pub fn new(radius: usize, history_window: usize) -> Self {
        Self {
            radius,
            history_window,
        }
    }
}

impl Default for SearchWindow {
    fn default() -> Self {
        Self::new(default_radius(), default_history_window())
    }
}

/// Score weights applied to squared run lengths.
///
/// Extending one's own line outweighs blocking the opponent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Weights {
    /// Multiplier for the own-colour run.
    #[serde(default = "default_own")]
    own: usize,

    /// Multiplier for the opponent run that a stone here would block.
    #[serde(default = "default_block")]
    block: usize,
}

#[instrument]
fn default_own() -> usize {
    10
}

#[instrument]
fn default_block() -> usize {
    6
}

impl Weights {
    /// Creates a set of weights.
    pub fn new(own: usize, block: usize) -> Self {
        Self { own, block }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::new(default_own(), default_block())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let window = SearchWindow::default();
        assert_eq!(*window.radius(), 2);
        assert_eq!(*window.history_window(), 40);

        let weights = Weights::default();
        assert_eq!(*weights.own(), 10);
        assert_eq!(*weights.block(), 6);
    }
}
