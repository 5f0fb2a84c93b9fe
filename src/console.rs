//! Line-oriented console session driving a game.
//!
//! Reads commands from any [`BufRead`] and writes the board and messages to
//! any [`Write`], so the same loop serves stdin/stdout and tests.

use derive_more::Display;
use gomoku_core::{Game, GameStatus, HeuristicAi, Stone};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's stone.
    Move {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// Ask the computer to play its turn.
    Ai,
    /// Take back the last move.
    Undo,
    /// Write the game to a file.
    Save(PathBuf),
    /// Print the board.
    Show,
    /// Print the command list.
    Help,
    /// Leave the session.
    Exit,
}

/// Error parsing a console command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Unrecognised command word or wrong argument count.
    #[display("Unknown command '{}', type help for the command list", _0)]
    Unknown(String),

    /// Coordinates that are not non-negative integers.
    #[display("Row and column must be non-negative integers, got '{}'", _0)]
    BadCoordinate(String),
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let op = parts.first().map(|op| op.to_lowercase()).unwrap_or_default();

        match (op.as_str(), parts.as_slice()) {
            ("move", [_, row, col]) => {
                let parse = |text: &str| {
                    text.parse::<usize>()
                        .map_err(|_| CommandError::BadCoordinate(text.to_string()))
                };
                Ok(Command::Move {
                    row: parse(row)?,
                    col: parse(col)?,
                })
            }
            ("ai", [_]) => Ok(Command::Ai),
            ("undo", [_]) => Ok(Command::Undo),
            ("save", [_, path]) => Ok(Command::Save(PathBuf::from(path))),
            ("show", [_]) => Ok(Command::Show),
            ("help", [_]) => Ok(Command::Help),
            ("exit" | "quit", [_]) => Ok(Command::Exit),
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

const HELP: &str = "Commands:
  move r c    place a stone at row r, column c
  ai          let the computer play its turn
  undo        take back the last move (a full round against the computer)
  save file   save the game to a file
  show        print the board
  help        print this list
  exit        leave";

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// An interactive game between the console and, optionally, the computer.
pub struct Session<R, W> {
    game: Game,
    ai: Option<HeuristicAi>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session. With `ai` set, the computer plays its colour
    /// automatically whenever it is its turn.
    pub fn new(game: Game, ai: Option<HeuristicAi>, input: R, output: W) -> Self {
        Self {
            game,
            ai,
            input,
            output,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session, returning the game and the output sink.
    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.output)
    }

    /// Runs until the game ends, `exit` is entered or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    #[instrument(
        skip(self),
        fields(size = self.game.board().size(), ai = ?self.ai.map(|ai| ai.own()))
    )]
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!("Session started");
        writeln!(self.output, "Five in a row. {} to move.", self.game.current())?;
        writeln!(self.output, "{}", self.game.board())?;
        writeln!(self.output, "{}", HELP)?;

        let mut line = String::new();
        loop {
            if self.game.is_finished() {
                self.report_outcome()?;
                break;
            }

            if self.is_ai_turn() {
                if !self.ai_turn()? {
                    writeln!(self.output, "The computer has no move to play.")?;
                    break;
                }
                continue;
            }

            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                writeln!(self.output, "Goodbye.")?;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command)? == Flow::Exit {
                        writeln!(self.output, "Goodbye.")?;
                        break;
                    }
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }

        info!(status = %self.game.status(), "Session ended");
        Ok(())
    }

    fn is_ai_turn(&self) -> bool {
        self.ai
            .is_some_and(|ai| !self.game.is_finished() && self.game.current() == ai.own())
    }

    #[instrument(skip(self))]
    fn execute(&mut self, command: Command) -> anyhow::Result<Flow> {
        debug!(?command, "Executing command");
        match command {
            Command::Move { row, col } => match self.game.make_move(row, col) {
                Ok(_) => {
                    writeln!(self.output, "{}", self.game.board())?;
                    if !self.game.is_finished() {
                        writeln!(self.output, "{} to move.", self.game.current())?;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Move rejected");
                    writeln!(self.output, "Move failed: {}", e)?;
                }
            },
            Command::Ai => {
                if self.ai.is_none() {
                    writeln!(self.output, "There is no computer player in this mode.")?;
                } else if !self.is_ai_turn() {
                    writeln!(self.output, "It is not the computer's turn.")?;
                } else if !self.ai_turn()? {
                    writeln!(self.output, "The computer has no move to play.")?;
                }
            }
            Command::Undo => self.undo()?,
            Command::Save(path) => match self.game.save(&path) {
                Ok(()) => writeln!(self.output, "Saved to {}.", path.display())?,
                Err(e) => writeln!(self.output, "Save failed: {}", e)?,
            },
            Command::Show => writeln!(self.output, "{}", self.game.board())?,
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Plays the computer's move. Returns false if it had none.
    fn ai_turn(&mut self) -> anyhow::Result<bool> {
        let Some(ai) = self.ai else {
            return Ok(false);
        };
        let Some((row, col)) = ai.best_move(self.game.board()) else {
            warn!("Computer found no candidate move");
            return Ok(false);
        };

        match self.game.make_move(row, col) {
            Ok(_) => {
                info!(row, col, "Computer moved");
                writeln!(self.output, "Computer plays {} {}", row, col)?;
                writeln!(self.output, "{}", self.game.board())?;
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, row, col, "Computer move rejected");
                writeln!(self.output, "Computer move failed: {}", e)?;
                Ok(false)
            }
        }
    }

    /// Takes back one move, or a full round when playing the computer so
    /// that control returns to the human.
    fn undo(&mut self) -> anyhow::Result<()> {
        if !self.game.undo() {
            writeln!(self.output, "Nothing to undo.")?;
            return Ok(());
        }
        if self.is_ai_turn() {
            self.game.undo();
        }
        writeln!(self.output, "Move taken back. {} to move.", self.game.current())?;
        writeln!(self.output, "{}", self.game.board())?;
        Ok(())
    }

    fn report_outcome(&mut self) -> anyhow::Result<()> {
        match self.game.status() {
            GameStatus::Won(stone) => {
                let who = match self.ai {
                    Some(ai) if ai.own() == stone => "the computer",
                    Some(_) => "you",
                    None => match stone {
                        Stone::Black => "Black",
                        _ => "White",
                    },
                };
                writeln!(self.output, "{} wins ({}).", stone, who)?;
            }
            GameStatus::Draw => writeln!(self.output, "Draw: the board is full.")?,
            GameStatus::InProgress => {}
        }
        Ok(())
    }
}
