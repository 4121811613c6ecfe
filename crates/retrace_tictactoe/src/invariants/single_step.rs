//! Single-step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{GameState, Player, Ply};

/// Invariant: consecutive snapshots differ by one mark placed on an empty
/// square by the player whose turn it was.
///
/// Together with the rooted history this makes every square monotonic
/// along the branch: once occupied, it stays occupied by the same player.
pub struct SingleStepInvariant;

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| match Ply::between(&pair[0], &pair[1]) {
                Some(ply) => ply.player == Player::to_move_at(k),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position, Square};

    #[test]
    fn test_full_game_holds() {
        let game = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_mover_violates() {
        let mut game = GameState::new();
        game.history
            .push(Board::new().with(Position::Center, Square::Occupied(Player::O)));
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_skipped_snapshot_violates() {
        let mut game = GameState::new();
        game.history.push(
            Board::new()
                .with(Position::Center, Square::Occupied(Player::X))
                .with(Position::TopLeft, Square::Occupied(Player::O)),
        );
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameState::replay(&[4]).unwrap();
        game.history
            .push(Board::new().with(Position::Center, Square::Occupied(Player::O)));
        assert!(!SingleStepInvariant::holds(&game));
    }
}
