//! Turn state machine for five-in-a-row.

#[cfg(debug_assertions)]
use crate::invariants::{GameInvariants, InvariantSet};
use crate::{Board, GameError, Stone};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
///
/// A finished game always carries its outcome, so "finished" can never
/// disagree with "has a winner or a full board".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with five in a row for this colour.
    Won(Stone),
    /// Board filled up without five in a row.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Stone> {
        match self {
            GameStatus::Won(stone) => Some(*stone),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(stone) => write!(f, "{} wins", stone),
            GameStatus::Draw => write!(f, "Draw (board is full)"),
        }
    }
}

/// A game of five-in-a-row: an owned board plus whose turn it is.
///
/// Black always moves first. While the game is in progress the turn
/// alternates after each successful move; once finished it stays frozen on
/// the colour that made the last move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current: Stone,
    pub(crate) status: GameStatus,
}

impl Game {
    /// Creates a new game on an empty `size` x `size` board.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidBoardSize` if `size` is outside the
    /// supported range.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(size)?,
            current: Stone::Black,
            status: GameStatus::InProgress,
        })
    }

    /// Wraps an existing board, deriving the turn and status from its history.
    ///
    /// The side to move is the opponent of the last mover (Black on an empty
    /// board). A board whose last move made five, or which is full, yields a
    /// finished game with the turn frozen on the last mover.
    #[instrument(skip(board), fields(size = board.size(), moves = board.history().len()))]
    pub fn from_board(board: Board) -> Self {
        let (current, status) = match board.last_move() {
            None => (Stone::Black, GameStatus::InProgress),
            Some(last) => match board.winner_of() {
                Some(winner) => (last.stone, GameStatus::Won(winner)),
                None if board.is_full() => (last.stone, GameStatus::Draw),
                None => (last.stone.other(), GameStatus::InProgress),
            },
        };
        debug!(?current, ?status, "Game derived from board");
        Self {
            board,
            current,
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the colour whose turn it is.
    pub fn current(&self) -> Stone {
        self.current
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game has ended.
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Returns the winner, or `None` while in progress or after a draw.
    pub fn winner(&self) -> Option<Stone> {
        self.status.winner()
    }

    /// Places the current player's stone at `(row, col)`.
    ///
    /// Returns the status after the move. A rejected move consumes no turn.
    ///
    /// # Errors
    ///
    /// - `GameError::GameFinished` if the game has already ended
    /// - any placement error from [`Board::place`], unchanged
    #[instrument(skip(self), fields(player = ?self.current))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }

        self.board.place(row, col, self.current)?;

        if self.board.winner_of() == Some(self.current) {
            self.status = GameStatus::Won(self.current);
            info!(winner = ?self.current, "Five in a row");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!("Board full, game drawn");
        } else {
            self.current = self.current.other();
        }

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(self.status)
    }

    /// Takes back the last move.
    ///
    /// The mover plays again: afterwards [`Game::current`] is the colour of
    /// the removed stone, whether or not that move had ended the game. A
    /// finished game goes back to in progress. Returns `false` when there is
    /// nothing to undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let Some(mv) = self.board.undo() else {
            return false;
        };

        self.status = GameStatus::InProgress;
        if mv.stone != self.current {
            self.current = self.current.other();
        }
        debug!(current = ?self.current, "Turn restored after undo");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        true
    }

    #[cfg(debug_assertions)]
    pub(crate) fn assert_invariants(&self) {
        if let Err(violations) = GameInvariants::check_all(self) {
            panic!("Game invariant violated: {:?}", violations);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays alternating moves, panicking on any rejection.
    fn play_all(game: &mut Game, moves: &[(usize, usize)]) {
        for &(r, c) in moves {
            game.make_move(r, c).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(15).unwrap();
        assert_eq!(game.current(), Stone::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_finished());
        assert_eq!(game.winner(), None);
        assert_eq!(Game::new(2), Err(GameError::InvalidBoardSize(2)));
        assert_eq!(
            Game::new(usize::MAX),
            Err(GameError::InvalidBoardSize(usize::MAX))
        );
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(15).unwrap();
        let mut seen = Vec::new();
        for i in 0..6 {
            seen.push(game.current());
            game.make_move(i, 0).unwrap();
        }
        assert_eq!(
            seen,
            [
                Stone::Black,
                Stone::White,
                Stone::Black,
                Stone::White,
                Stone::Black,
                Stone::White
            ]
        );
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new(9).unwrap();
        game.make_move(4, 4).unwrap();
        let before = game.clone();

        assert_eq!(
            game.make_move(4, 4),
            Err(GameError::CellOccupied { row: 4, col: 4 })
        );
        assert_eq!(
            game.make_move(0, 9),
            Err(GameError::OutOfBounds { row: 0, col: 9, size: 9 })
        );
        assert_eq!(game, before);
        assert_eq!(game.current(), Stone::White);
    }

    #[test]
    fn test_win_freezes_turn() {
        let mut game = Game::new(9).unwrap();
        play_all(
            &mut game,
            &[(0, 0), (8, 0), (0, 1), (8, 1), (0, 2), (8, 2), (0, 3), (8, 3)],
        );
        assert_eq!(game.make_move(0, 4), Ok(GameStatus::Won(Stone::Black)));
        assert_eq!(game.winner(), Some(Stone::Black));
        assert_eq!(game.current(), Stone::Black);
        assert_eq!(game.make_move(5, 5), Err(GameError::GameFinished));
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut game = Game::new(5).unwrap();
        let order = draw_order_5x5();
        for (i, &(r, c)) in order.iter().enumerate() {
            let status = game.make_move(r, c).unwrap();
            if i + 1 < order.len() {
                assert_eq!(status, GameStatus::InProgress, "finished early at move {}", i);
            }
        }
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.winner(), None);
        assert!(game.is_finished());
    }

    /// Move order for a 5x5 board that ends full without any five in a row.
    ///
    /// Black plays the `B` cells and White the `W` cells of
    /// ```text
    /// B B W W B
    /// W W B B W
    /// B B W W B
    /// W W B B W
    /// B W B W B
    /// ```
    /// (13 black, 12 white), interleaved so the colours alternate.
    fn draw_order_5x5() -> Vec<(usize, usize)> {
        let pattern = ["BBWWB", "WWBBW", "BBWWB", "WWBBW", "BWBWB"];
        let cells = |want: char| -> Vec<(usize, usize)> {
            pattern
                .iter()
                .enumerate()
                .flat_map(|(r, row)| {
                    row.chars()
                        .enumerate()
                        .filter(move |&(_, ch)| ch == want)
                        .map(move |(c, _)| (r, c))
                })
                .collect()
        };
        let black = cells('B');
        let white = cells('W');
        let mut order = Vec::new();
        for i in 0..black.len() {
            order.push(black[i]);
            if let Some(&w) = white.get(i) {
                order.push(w);
            }
        }
        order
    }

    #[test]
    fn test_undo_after_normal_move_returns_turn_to_mover() {
        let mut game = Game::new(9).unwrap();
        play_all(&mut game, &[(4, 4), (4, 5)]);
        assert_eq!(game.current(), Stone::Black);

        assert!(game.undo());
        assert_eq!(game.current(), Stone::White);
        assert_eq!(game.board().history().len(), 1);

        assert!(game.undo());
        assert_eq!(game.current(), Stone::Black);
        assert!(!game.undo());
        assert_eq!(game.current(), Stone::Black);
    }

    #[test]
    fn test_undo_winning_move_reopens_game() {
        let mut game = Game::new(9).unwrap();
        play_all(
            &mut game,
            &[(0, 0), (8, 0), (0, 1), (8, 1), (0, 2), (8, 2), (0, 3), (8, 3), (0, 4)],
        );
        assert!(game.is_finished());

        assert!(game.undo());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.winner(), None);
        assert_eq!(game.current(), Stone::Black);

        // Black can now play elsewhere
        game.make_move(5, 5).unwrap();
        assert_eq!(game.current(), Stone::White);
    }

    #[test]
    fn test_undo_after_draw() {
        let mut game = Game::new(5).unwrap();
        play_all(&mut game, &draw_order_5x5());
        assert_eq!(game.status(), GameStatus::Draw);
        let last_mover = game.current();

        assert!(game.undo());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.board().is_full());
        assert_eq!(game.current(), last_mover);
    }

    #[test]
    fn test_from_board_derives_turn() {
        let mut board = Board::new(9).unwrap();
        let game = Game::from_board(board.clone());
        assert_eq!(game.current(), Stone::Black);

        board.place(4, 4, Stone::Black).unwrap();
        let game = Game::from_board(board.clone());
        assert_eq!(game.current(), Stone::White);
        assert_eq!(game.status(), GameStatus::InProgress);

        for c in 0..5 {
            board.place(0, c, Stone::White).unwrap();
        }
        let game = Game::from_board(board);
        assert_eq!(game.status(), GameStatus::Won(Stone::White));
        assert_eq!(game.current(), Stone::White);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Won(Stone::White).to_string(), "White (W) wins");
        assert_eq!(GameStatus::Draw.to_string(), "Draw (board is full)");
    }
}
