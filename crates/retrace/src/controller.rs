//! Controller that owns the game state and applies user intents.

use derive_getters::Getters;
use retrace_tictactoe::{Board, GameState, GameStatus, MoveEntry, Player, Position, rules};
use tracing::{debug, info, instrument};

/// A user intent forwarded by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// A cell (0-8) was clicked.
    CellClick(usize),
    /// A history entry was activated.
    JumpTo(usize),
}

impl Intent {
    /// One click binding per cell, bound to the cell's static index.
    pub fn cell_bindings() -> [Intent; 9] {
        std::array::from_fn(Intent::CellClick)
    }
}

/// Everything a renderer needs to draw the board and status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Displayed snapshot.
    pub board: Board,
    /// Player to move at the displayed snapshot.
    pub current_player: Player,
    /// Winner of the displayed snapshot.
    pub winner: Option<Player>,
    /// Completed triple, if any.
    pub winning_line: Option<[Position; 3]>,
    /// Status of the displayed snapshot.
    pub status: GameStatus,
}

impl BoardView {
    /// The status line text.
    pub fn status_line(&self) -> String {
        self.status.to_string()
    }
}

/// Owns the single [`GameState`] and replaces it on every applied intent.
///
/// Rejected intents are ignored: the state is left as it was and nothing
/// is reported to the user.
#[derive(Debug, Clone, Default, Getters)]
pub struct Controller {
    /// Current game state.
    state: GameState,
}

impl Controller {
    /// Creates a controller for a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Creates a controller resuming `state`.
    pub fn with_state(state: GameState) -> Self {
        Self { state }
    }

    /// Plays `cells` in order, then jumps to `jump` if given.
    ///
    /// Rejected intents are skipped the same way [`Controller::dispatch`]
    /// skips them.
    #[instrument]
    pub fn scripted(cells: &[usize], jump: Option<usize>) -> Self {
        let mut controller = Self::new();
        for &cell in cells {
            controller.dispatch(Intent::CellClick(cell));
        }
        if let Some(move_number) = jump {
            controller.dispatch(Intent::JumpTo(move_number));
        }
        controller
    }

    /// Applies an intent. Returns whether the state changed.
    #[instrument(skip(self), fields(current_move = self.state.current_move()))]
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let result = match intent {
            Intent::CellClick(index) => self.state.apply_move(index),
            Intent::JumpTo(move_number) => self.state.jump_to(move_number),
        };

        match result {
            Ok(next) => {
                let changed = next != self.state;
                self.state = next;
                changed
            }
            Err(rejected) => {
                debug!(%rejected, "Intent ignored");
                false
            }
        }
    }

    /// Starts a new game, discarding the history.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.state = GameState::new();
    }

    /// Snapshot of what the board renderer draws.
    pub fn view(&self) -> BoardView {
        let board = self.state.current_board().clone();
        BoardView {
            current_player: self.state.current_player(),
            winner: rules::check_winner(&board),
            winning_line: rules::winning_line(&board),
            status: self.state.status(),
            board,
        }
    }

    /// History list entries.
    pub fn timeline(&self) -> Vec<MoveEntry> {
        self.state.timeline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrace_tictactoe::Square;

    fn click_all(controller: &mut Controller, cells: &[usize]) {
        for &cell in cells {
            controller.dispatch(Intent::CellClick(cell));
        }
    }

    #[test]
    fn test_cell_bindings_use_static_index() {
        let bindings = Intent::cell_bindings();
        for (i, binding) in bindings.iter().enumerate() {
            assert_eq!(*binding, Intent::CellClick(i));
        }
    }

    #[test]
    fn test_rejected_click_is_noop() {
        let mut controller = Controller::new();
        assert!(controller.dispatch(Intent::CellClick(0)));
        let before = controller.state().clone();

        assert!(!controller.dispatch(Intent::CellClick(0)));
        assert!(!controller.dispatch(Intent::CellClick(42)));
        assert!(!controller.dispatch(Intent::JumpTo(7)));
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_jump_to_current_reports_no_change() {
        let mut controller = Controller::new();
        click_all(&mut controller, &[0, 1]);
        assert!(!controller.dispatch(Intent::JumpTo(2)));
        assert!(controller.dispatch(Intent::JumpTo(0)));
        assert_eq!(controller.state().current_move(), 0);
    }

    #[test]
    fn test_view_after_win() {
        let mut controller = Controller::new();
        click_all(&mut controller, &[0, 3, 1, 4, 2]);

        let view = controller.view();
        assert_eq!(view.winner, Some(Player::X));
        assert_eq!(
            view.winning_line,
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(view.status_line(), "Winner: X");

        // Further clicks are swallowed.
        assert!(!controller.dispatch(Intent::CellClick(8)));
        assert_eq!(controller.state().history().len(), 6);
    }

    #[test]
    fn test_view_in_progress() {
        let mut controller = Controller::new();
        click_all(&mut controller, &[4]);

        let view = controller.view();
        assert_eq!(view.board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(view.current_player, Player::O);
        assert_eq!(view.status_line(), "Next player: O");
    }

    #[test]
    fn test_scripted_skips_rejections() {
        let controller = Controller::scripted(&[0, 0, 4, 9], Some(9));
        assert_eq!(controller.state(), &GameState::replay(&[0, 4]).unwrap());

        let rewound = Controller::scripted(&[0, 4, 8], Some(1));
        assert_eq!(rewound.state().current_move(), 1);
        assert_eq!(rewound.state().history().len(), 4);
    }

    #[test]
    fn test_restart() {
        let mut controller = Controller::new();
        click_all(&mut controller, &[4, 0]);
        controller.restart();
        assert_eq!(controller.state(), &GameState::new());
        assert_eq!(controller.timeline(), vec![MoveEntry::new(0, true)]);
    }
}
