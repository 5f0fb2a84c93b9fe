//! Five-in-a-row game logic.
//!
//! # Architecture
//!
//! - **Board**: square grid, move history, win detection, text encoding
//! - **Game**: owns a board and tracks whose turn it is and how the game ended
//! - **HeuristicAi**: read-only move picker scoring cells near recent play
//! - **Rules**: run counting shared by win detection and the opponent
//! - **Invariants**: properties asserted after every mutation in debug builds
//!
//! # Example
//!
//! ```
//! use gomoku_core::{Game, HeuristicAi, Stone};
//!
//! let mut game = Game::new(15)?;
//! game.make_move(7, 7)?;
//!
//! let ai = HeuristicAi::new(Stone::White)?;
//! if let Some((row, col)) = ai.best_move(game.board()) {
//!     game.make_move(row, col)?;
//! }
//! assert_eq!(game.board().history().len(), 2);
//! # Ok::<(), gomoku_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod board;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod save;
mod tuning;
mod types;

pub use ai::HeuristicAi;
pub use board::{Board, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::GameError;
pub use game::{Game, GameStatus};
pub use tuning::{SearchWindow, Weights};
pub use types::{Axis, Move, Stone};
