//! Plies recovered from consecutive board snapshots.

use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single ply: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ply {
    /// The player who moved.
    pub player: Player,
    /// The position where the mark was placed.
    pub position: Position,
}

impl Ply {
    /// Creates a new ply.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Recovers the ply that turned `before` into `after`.
    ///
    /// Returns `None` unless exactly one square went from empty to occupied
    /// and nothing else changed.
    #[instrument(skip(before, after))]
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut found = None;
        for pos in Position::ALL {
            match (before.get(pos), after.get(pos)) {
                (a, b) if a == b => {}
                (Square::Empty, Square::Occupied(player)) if found.is_none() => {
                    found = Some(Ply::new(player, pos));
                }
                _ => return None,
            }
        }
        found
    }
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}
