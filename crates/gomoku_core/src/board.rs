//! Square five-in-a-row board with move history.

#[cfg(debug_assertions)]
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::rules;
use crate::{GameError, Move, Stone};
use tracing::{debug, instrument, warn};

/// Smallest board on which five-in-a-row is possible.
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest board accepted, keeping the grid allocation small.
pub const MAX_BOARD_SIZE: usize = 64;

/// Board size used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Square grid of stones plus the ordered history that produced it.
///
/// The last move is always the tail of the history, so the grid, the
/// history and the last-move pointer cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    grid: Vec<Stone>,
    history: Vec<Move>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidBoardSize` if `size` is outside
    /// [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            warn!(size, "Board size out of range");
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            grid: vec![Stone::Empty; size * size],
            history: Vec::new(),
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `(row, col)` lies on the board.
    pub fn inside(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Gets the stone at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Stone> {
        if self.inside(row, col) {
            Some(self.grid[row * self.size + col])
        } else {
            None
        }
    }

    /// Signed lookup used when walking lines off the edge of the board.
    pub(crate) fn cell(&self, row: isize, col: isize) -> Option<Stone> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Stone] {
        &self.grid
    }

    /// Moves in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Most recently played move, if any.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.grid.iter().filter(|s| s.is_player()).count()
    }

    /// Places `stone` at `(row, col)` and records the move.
    ///
    /// All-or-nothing: on failure the board is left untouched.
    ///
    /// # Errors
    ///
    /// - `GameError::OutOfBounds` if the coordinate is off the board
    /// - `GameError::InvalidStone` if `stone` is `Empty`
    /// - `GameError::CellOccupied` if the cell already holds a stone
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, row: usize, col: usize, stone: Stone) -> Result<(), GameError> {
        if !self.inside(row, col) {
            warn!("Placement off the board");
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        if !stone.is_player() {
            warn!("Placement of a non-player stone");
            return Err(GameError::InvalidStone(stone.to_char()));
        }
        let idx = row * self.size + col;
        if self.grid[idx] != Stone::Empty {
            warn!("Placement on an occupied cell");
            return Err(GameError::CellOccupied { row, col });
        }

        self.grid[idx] = stone;
        self.history.push(Move::new(row, col, stone));
        debug!(moves = self.history.len(), "Stone placed");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(())
    }

    /// Takes back the most recent move, returning it.
    ///
    /// Returns `None` when there is nothing to undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.grid[mv.row * self.size + mv.col] = Stone::Empty;
        debug!(%mv, "Move undone");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Some(mv)
    }

    /// Returns true if the stone at `(row, col)` belongs to a run of five or more.
    pub fn check_five_through(&self, row: usize, col: usize) -> bool {
        rules::check_five_through(self, row, col)
    }

    /// Returns the colour of the last move if it completed five in a row.
    #[instrument(skip(self))]
    pub fn winner_of(&self) -> Option<Stone> {
        let last = self.last_move()?;
        self.check_five_through(last.row, last.col)
            .then_some(last.stone)
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Encodes the board as `<size>|r,c,S;r,c,S;...` in play order.
    pub fn serialize(&self) -> String {
        let moves: Vec<String> = self.history.iter().map(Move::to_string).collect();
        format!("{}|{}", self.size, moves.join(";"))
    }

    /// Rebuilds a board by replaying an encoded history through [`Board::place`].
    ///
    /// Empty move tokens (such as a trailing `;`) are skipped.
    ///
    /// # Errors
    ///
    /// Returns `GameError::MalformedSerialization` for unparsable text and the
    /// usual placement errors for an illegal move sequence.
    #[instrument]
    pub fn deserialize(data: &str) -> Result<Self, GameError> {
        let (size_str, moves_str) = data.split_once('|').ok_or_else(|| {
            GameError::MalformedSerialization(format!("missing '|' in board data {:?}", data))
        })?;
        let size = parse_index(size_str, "board size")?;
        let mut board = Self::new(size)?;

        for token in moves_str.split(';').map(str::trim).filter(|t| !t.is_empty()) {
            let (row, col, stone) = parse_move(token)?;
            board.place(row, col, stone)?;
        }

        debug!(size, moves = board.history.len(), "Board restored");
        Ok(board)
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        if let Err(violations) = BoardInvariants::check_all(self) {
            panic!("Board invariant violated: {:?}", violations);
        }
    }
}

fn parse_index(text: &str, what: &str) -> Result<usize, GameError> {
    text.trim().parse().map_err(|_| {
        GameError::MalformedSerialization(format!("invalid {} {:?}", what, text))
    })
}

fn parse_move(token: &str) -> Result<(usize, usize, Stone), GameError> {
    let parts: Vec<&str> = token.split(',').collect();
    let [row, col, stone] = parts.as_slice() else {
        return Err(GameError::MalformedSerialization(format!(
            "expected row,col,stone but found {:?}",
            token
        )));
    };

    let row = parse_index(row, "row")?;
    let col = parse_index(col, "column")?;

    let mut chars = stone.trim().chars();
    let stone = match (chars.next(), chars.next()) {
        (Some(c), None) => Stone::from_char(c).ok_or(GameError::InvalidStone(c))?,
        _ => {
            return Err(GameError::MalformedSerialization(format!(
                "invalid stone {:?}",
                stone
            )));
        }
    };

    Ok((row, col, stone))
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            grid: vec![Stone::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
            history: Vec::new(),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{:>3}", col)?;
        }
        for (row, cells) in self.grid.chunks(self.size).enumerate() {
            write!(f, "\n{:>2} ", row)?;
            for stone in cells {
                write!(f, "{:>3}", stone.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7).unwrap();
        assert_eq!(board.size(), 7);
        assert!(board.cells().iter().all(|s| *s == Stone::Empty));
        assert!(board.history().is_empty());
        assert!(board.last_move().is_none());
    }

    #[test]
    fn test_board_too_small() {
        assert_eq!(Board::new(4), Err(GameError::InvalidBoardSize(4)));
        assert!(Board::new(MIN_BOARD_SIZE).is_ok());
    }

    #[test]
    fn test_board_too_large() {
        assert!(Board::new(MAX_BOARD_SIZE).is_ok());
        assert_eq!(Board::new(65), Err(GameError::InvalidBoardSize(65)));
        assert_eq!(
            Board::new(usize::MAX),
            Err(GameError::InvalidBoardSize(usize::MAX))
        );
    }

    #[test]
    fn test_deserialize_huge_size_is_rejected() {
        assert_eq!(
            Board::deserialize("4294967296|"),
            Err(GameError::InvalidBoardSize(4_294_967_296))
        );
        assert_eq!(
            Board::deserialize("100000|"),
            Err(GameError::InvalidBoardSize(100_000))
        );
    }

    #[test]
    fn test_default_is_fifteen() {
        assert_eq!(Board::default(), Board::new(15).unwrap());
    }

    #[test]
    fn test_place_records_history() {
        let mut board = Board::new(9).unwrap();
        board.place(2, 3, Stone::Black).unwrap();
        board.place(4, 4, Stone::White).unwrap();

        assert_eq!(board.get(2, 3), Some(Stone::Black));
        assert_eq!(board.get(4, 4), Some(Stone::White));
        assert_eq!(
            board.history(),
            &[Move::new(2, 3, Stone::Black), Move::new(4, 4, Stone::White)]
        );
        assert_eq!(board.last_move(), Some(&Move::new(4, 4, Stone::White)));
        assert_eq!(board.stone_count(), 2);
    }

    #[test]
    fn test_failed_place_changes_nothing() {
        let mut board = Board::new(9).unwrap();
        board.place(0, 0, Stone::Black).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(9, 0, Stone::White),
            Err(GameError::OutOfBounds { row: 9, col: 0, size: 9 })
        );
        assert_eq!(
            board.place(0, 0, Stone::White),
            Err(GameError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(board.place(1, 1, Stone::Empty), Err(GameError::InvalidStone('.')));
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_is_left_inverse_of_place() {
        let mut board = Board::new(9).unwrap();
        board.place(1, 1, Stone::Black).unwrap();
        let before = board.clone();

        board.place(2, 2, Stone::White).unwrap();
        assert_eq!(board.undo(), Some(Move::new(2, 2, Stone::White)));
        assert_eq!(board, before);
        assert_eq!(board.last_move(), Some(&Move::new(1, 1, Stone::Black)));

        board.undo();
        assert!(board.last_move().is_none());
        assert_eq!(board.undo(), None);
    }

    #[test]
    fn test_winner_only_on_fifth_stone() {
        let mut board = Board::new(9).unwrap();
        for col in 0..4 {
            board.place(3, col, Stone::White).unwrap();
            assert_eq!(board.winner_of(), None);
        }
        board.place(3, 4, Stone::White).unwrap();
        assert_eq!(board.winner_of(), Some(Stone::White));
    }

    #[test]
    fn test_winner_requires_last_move_in_line() {
        let mut board = Board::new(9).unwrap();
        for col in 0..5 {
            board.place(0, col, Stone::Black).unwrap();
        }
        board.place(8, 8, Stone::White).unwrap();
        assert_eq!(board.winner_of(), None);
    }

    #[test]
    fn test_serialize_format() {
        let mut board = Board::new(15).unwrap();
        assert_eq!(board.serialize(), "15|");
        board.place(7, 7, Stone::Black).unwrap();
        board.place(7, 8, Stone::White).unwrap();
        assert_eq!(board.serialize(), "15|7,7,B;7,8,W");
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let mut board = Board::new(10).unwrap();
        for (i, &(r, c)) in [(5, 5), (0, 9), (9, 0), (3, 4)].iter().enumerate() {
            let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
            board.place(r, c, stone).unwrap();
        }
        let restored = Board::deserialize(&board.serialize()).unwrap();
        assert_eq!(restored, board);
        assert_eq!(restored.history(), board.history());
    }

    #[test]
    fn test_deserialize_accepts_trailing_separator() {
        let board = Board::deserialize("9|4,4,B;4,5,W;").unwrap();
        assert_eq!(board.history().len(), 2);
    }

    #[test]
    fn test_deserialize_reuses_placement_errors() {
        assert_eq!(
            Board::deserialize("9|1,1,B;1,1,W"),
            Err(GameError::CellOccupied { row: 1, col: 1 })
        );
        assert_eq!(
            Board::deserialize("9|9,1,B"),
            Err(GameError::OutOfBounds { row: 9, col: 1, size: 9 })
        );
        assert_eq!(Board::deserialize("9|1,1,X"), Err(GameError::InvalidStone('X')));
        assert_eq!(Board::deserialize("9|1,1,."), Err(GameError::InvalidStone('.')));
        assert_eq!(Board::deserialize("3|"), Err(GameError::InvalidBoardSize(3)));
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        for data in ["", "15", "x|", "9|1,1", "9|a,1,B", "9|-1,1,B", "9|1,1,BW"] {
            assert!(
                matches!(Board::deserialize(data), Err(GameError::MalformedSerialization(_))),
                "expected malformed for {:?}",
                data
            );
        }
    }

    #[test]
    fn test_display_marks_stones() {
        let mut board = Board::new(5).unwrap();
        board.place(1, 2, Stone::Black).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "     0  1  2  3  4");
        assert_eq!(lines[2], " 1   .  .  B  .  .");
    }
}
