//! Three-line saved-game format.
//!
//! ```text
//! 15|7,7,B;7,8,W      board serialization
//! B                   colour to move
//!                     winner (B, W, or empty)
//! ```
//!
//! Whether the game is finished is never stored. It is recomputed on load
//! from the winner line and the board, so an edited file cannot claim a
//! finished game on a board that is still open.

use crate::{Board, Game, GameError, GameStatus, Stone};
use std::path::Path;
use tracing::{info, instrument, warn};

impl Game {
    /// Renders the game in the three-line save format.
    pub fn to_save_string(&self) -> String {
        let winner = self
            .winner()
            .map(|s| s.to_char().to_string())
            .unwrap_or_default();
        format!(
            "{}\n{}\n{}\n",
            self.board.serialize(),
            self.current.to_char(),
            winner
        )
    }

    /// Restores a game from the three-line save format.
    ///
    /// The board is rebuilt by replaying its moves through validated
    /// placement. A missing third line means there is no winner.
    ///
    /// # Errors
    ///
    /// Returns `GameError::MalformedSerialization` if a line is missing or
    /// holds an unexpected value, and any placement error from the replay.
    #[instrument(skip(text))]
    pub fn from_save_string(text: &str) -> Result<Self, GameError> {
        let mut lines = text.lines();

        let board_line = lines
            .next()
            .ok_or_else(|| GameError::MalformedSerialization("save data is empty".into()))?;
        let board = Board::deserialize(board_line.trim())?;

        let current = match lines.next().map(str::trim) {
            Some("B") => Stone::Black,
            Some("W") => Stone::White,
            other => {
                warn!(line = ?other, "Bad side-to-move line");
                return Err(GameError::MalformedSerialization(format!(
                    "expected B or W for the side to move, found {:?}",
                    other.unwrap_or("")
                )));
            }
        };

        let winner = match lines.next().map(str::trim).unwrap_or("") {
            "" => None,
            "B" => Some(Stone::Black),
            "W" => Some(Stone::White),
            other => {
                warn!(line = other, "Bad winner line");
                return Err(GameError::MalformedSerialization(format!(
                    "expected B, W or nothing for the winner, found {:?}",
                    other
                )));
            }
        };

        let status = match winner {
            Some(stone) => GameStatus::Won(stone),
            None if board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        };

        let game = Self {
            board,
            current,
            status,
        };

        #[cfg(debug_assertions)]
        game.assert_invariants();

        Ok(game)
    }

    /// Writes the game to `path` in the save format.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Io` if the file cannot be written.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GameError> {
        std::fs::write(path.as_ref(), self.to_save_string())?;
        info!(moves = self.board.history().len(), "Game saved");
        Ok(())
    }

    /// Reads a game previously written by [`Game::save`].
    ///
    /// # Errors
    ///
    /// Returns `GameError::Io` if the file cannot be read, otherwise the
    /// errors of [`Game::from_save_string`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let game = Self::from_save_string(&text)?;
        info!(
            size = game.board.size(),
            moves = game.board.history().len(),
            status = %game.status,
            "Game loaded"
        );
        Ok(game)
    }
}
