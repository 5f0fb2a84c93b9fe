//! Outcome invariants: the game status agrees with the board.

use super::Invariant;
use crate::{Game, GameStatus};

/// Invariant: a finished game has a winner or a full board.
pub struct FinishedMeansDecided;

impl Invariant<Game> for FinishedMeansDecided {
    fn holds(game: &Game) -> bool {
        match game.status() {
            GameStatus::InProgress => !game.board().is_full(),
            GameStatus::Won(stone) => stone.is_player(),
            GameStatus::Draw => game.board().is_full(),
        }
    }

    fn description() -> &'static str {
        "Finished exactly when there is a winner or the board is full"
    }
}

/// Invariant: the side to move is Black or White.
pub struct TurnIsPlayer;

impl Invariant<Game> for TurnIsPlayer {
    fn holds(game: &Game) -> bool {
        game.current().is_player()
    }

    fn description() -> &'static str {
        "The current turn names a player colour"
    }
}
