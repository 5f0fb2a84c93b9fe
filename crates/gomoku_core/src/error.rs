//! Error kinds raised by the game core.

/// Error that can occur when building, mutating, saving or restoring a game.
///
/// Every failure leaves the board and game untouched, so callers may simply
/// retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Requested board size is outside the supported range.
    #[display("Board size {} is outside the supported range 5 to 64", _0)]
    InvalidBoardSize(usize),

    /// Coordinate lies outside the board.
    #[display("Position ({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board size.
        size: usize,
    },

    /// Target cell already holds a stone.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Stone is not Black or White.
    #[display("Invalid stone '{}' (expected B or W)", _0)]
    InvalidStone(char),

    /// A move was attempted after the game ended.
    #[display("Game is already finished")]
    GameFinished,

    /// Board or save text could not be parsed.
    #[display("Malformed game data: {}", _0)]
    MalformedSerialization(String),

    /// Save file could not be read or written.
    #[display("I/O error: {}", _0)]
    Io(String),
}

impl std::error::Error for GameError {}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err.to_string())
    }
}
