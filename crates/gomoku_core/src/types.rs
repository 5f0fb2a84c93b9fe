//! Core domain types for five-in-a-row.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stone {
    /// Vacant cell.
    #[default]
    Empty,
    /// Black stone (moves first).
    Black,
    /// White stone (moves second).
    White,
}

impl Stone {
    /// Returns the opposing colour. `Empty` has no opponent and maps to itself.
    pub fn other(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Returns true for `Black` and `White`.
    pub fn is_player(self) -> bool {
        !matches!(self, Stone::Empty)
    }

    /// Single-character form used in rendering and save files.
    pub fn to_char(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'B',
            Stone::White => 'W',
        }
    }

    /// Parses the single-character form.
    #[instrument]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Stone::Empty),
            'B' => Some(Stone::Black),
            'W' => Some(Stone::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stone::Empty => write!(f, "empty"),
            Stone::Black => write!(f, "Black (B)"),
            Stone::White => write!(f, "White (W)"),
        }
    }
}

/// A played stone. Moves only exist as history records and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index (0-based).
    pub row: usize,
    /// Column index (0-based).
    pub col: usize,
    /// Colour of the stone played.
    pub stone: Stone,
}

impl Move {
    /// Creates a new move record.
    pub fn new(row: usize, col: usize, stone: Stone) -> Self {
        Self { row, col, stone }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.row, self.col, self.stone.to_char())
    }
}

/// One of the four lines a run can follow through a point.
///
/// Each axis is walked in its own direction and the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right (↘).
    Diagonal,
    /// Bottom-left to top-right (↗).
    AntiDiagonal,
}

impl Axis {
    /// Row/column step for the forward direction of this axis.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (-1, 1),
        }
    }
}
