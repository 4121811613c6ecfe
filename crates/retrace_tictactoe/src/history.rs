//! Snapshot history with branch-and-truncate and time travel.

use super::invariants::{GameInvariants, InvariantSet};
use super::{Board, GameStatus, MoveEntry, Player, Ply, Position, Rejected, Square, rules};
use serde::Serialize;
use tracing::{debug, instrument};

/// Complete game state: every board snapshot plus the displayed one.
///
/// `GameState` is a value. Transitions return a new state and leave the
/// receiver untouched, so a caller can swap states atomically.
///
/// Guarantees:
/// - `history` is never empty and `history[0]` is the empty board
/// - `history[k]` adds exactly one mark to `history[k - 1]`
/// - `current_move < history.len()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
}

impl GameState {
    /// Creates a new game with a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Builds a game by playing `cells` in order from the start.
    ///
    /// Stops at the first rejected cell and returns its rejection.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, Rejected> {
        cells
            .iter()
            .try_fold(Self::new(), |game, &cell| game.apply_move(cell))
    }

    /// All snapshots, index 0 being the game start.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Player to move at the displayed snapshot.
    pub fn current_player(&self) -> Player {
        Player::to_move_at(self.current_move)
    }

    /// Winner of the displayed snapshot.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_board())
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board(), self.current_player())
    }

    /// Whether the displayed snapshot is the latest one.
    pub fn is_at_latest(&self) -> bool {
        self.current_move + 1 == self.history.len()
    }

    /// Places the current player's mark at cell `index` (0-8).
    ///
    /// Snapshots after the displayed one are discarded before the new
    /// snapshot is appended.
    ///
    /// # Errors
    ///
    /// - [`Rejected::CellOutOfRange`] if `index > 8`
    /// - [`Rejected::GameOver`] if the displayed board already has a winner
    /// - [`Rejected::SquareOccupied`] if the cell is taken
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&self, index: usize) -> Result<Self, Rejected> {
        let pos = Position::from_index(index).ok_or(Rejected::CellOutOfRange(index))?;
        self.place(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Same transition as [`GameState::apply_move`] for callers holding a
    /// [`Position`].
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn place(&self, pos: Position) -> Result<Self, Rejected> {
        let board = self.current_board();

        if let Some(winner) = board.winner() {
            return Err(Rejected::GameOver(winner));
        }
        if !board.is_empty(pos) {
            return Err(Rejected::SquareOccupied(pos));
        }

        let player = self.current_player();
        let next_board = board.with(pos, Square::Occupied(player));

        let mut history = self.history[..=self.current_move].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(next_board);

        let next = Self {
            current_move: history.len() - 1,
            history,
        };
        debug!(
            player = %player,
            position = %pos,
            discarded,
            current_move = next.current_move,
            "Move applied"
        );

        debug_assert!(
            GameInvariants::check_all(&next).is_ok(),
            "Game invariants violated after move"
        );
        Ok(next)
    }

    /// Displays snapshot `move_number` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected::MoveOutOfRange`] if no such snapshot exists.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&self, move_number: usize) -> Result<Self, Rejected> {
        if move_number >= self.history.len() {
            return Err(Rejected::MoveOutOfRange {
                requested: move_number,
                len: self.history.len(),
            });
        }
        debug!(move_number, "Jumped");
        Ok(Self {
            history: self.history.clone(),
            current_move: move_number,
        })
    }

    /// Plies that produced each snapshot after the first.
    ///
    /// Entry `k - 1` is the ply that produced snapshot `k`.
    pub fn plies(&self) -> Vec<Ply> {
        self.history
            .windows(2)
            .filter_map(|pair| Ply::between(&pair[0], &pair[1]))
            .collect()
    }

    /// History list entries, one per snapshot.
    pub fn timeline(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|move_number| MoveEntry::new(move_number, move_number == self.current_move))
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
