//! Rooted history invariant: the history starts from an empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: History is non-empty and its first snapshot is the empty board.
pub struct RootedHistoryInvariant;

impl Invariant<GameState> for RootedHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts from an empty board"
    }
}
