//! Cursor invariant: the displayed move exists.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_move` indexes an existing snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move indexes an existing snapshot"
    }
}
