//! Game status derived from a board snapshot.

use super::{Board, Player, rules};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the game at the displayed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A triple was completed.
    Won(Player),
    /// Board is full with no triple.
    Drawn,
}

impl GameStatus {
    /// Evaluates `board`, with `next` as the player to move if play continues.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, next: Player) -> Self {
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_draw(board) {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// Returns true once no further moves are possible.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// The status line shown above the board.
impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(winner) => write!(f, "Winner: {}", winner),
            GameStatus::Drawn => write!(f, "Draw: no moves left"),
        }
    }
}
