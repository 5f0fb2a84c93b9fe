//! Gomoku - five in a row on the console
//!
//! This crate wraps the [`gomoku_core`] engine with everything needed to
//! play it from a terminal.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for board size, play mode and opponent tuning
//! - **Console**: line-oriented session reading commands and printing the board
//! - **Engine**: re-exported from [`gomoku_core`]
//!
//! # Example
//!
//! ```
//! use gomoku::{AppConfig, Game, Session};
//! use std::io::Cursor;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::default();
//! let game = Game::new(*config.size())?;
//! let input = Cursor::new("move 7 7\nexit\n");
//! let mut session = Session::new(game, config.opponent()?, input, Vec::new());
//! session.run()?;
//! assert_eq!(session.game().board().history().len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;

pub use config::{AppConfig, ConfigError, Mode, Side};
pub use console::{Command, CommandError, Session};
pub use gomoku_core::{
    Axis, Board, DEFAULT_BOARD_SIZE, Game, GameError, GameStatus, HeuristicAi, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE, Move, SearchWindow, Stone, Weights,
};
