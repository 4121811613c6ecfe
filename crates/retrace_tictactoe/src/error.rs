//! Rejected intents.

use super::{Player, Position};
use derive_more::{Display, Error};

/// Reason an intent was not applied.
///
/// A rejected intent never changes the game state. Callers driving a UI
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Rejected {
    /// The current board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(#[error(not(source))] Player),

    /// The target square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The cell index is outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),

    /// The move number does not exist in the history.
    #[display("Move #{} is out of range (history has {} snapshots)", requested, len)]
    MoveOutOfRange {
        /// Requested move number.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}
