//! Tic-tac-toe game logic with move history and time travel.
//!
//! The engine keeps every board snapshot of the game. Moves made from an
//! earlier snapshot discard the snapshots after it, and jumps only move the
//! pointer into the history.
//!
//! # Example
//!
//! ```
//! use retrace_tictactoe::{GameState, GameStatus, Player};
//!
//! let game = GameState::new()
//!     .apply_move(0)
//!     .and_then(|g| g.apply_move(4))
//!     .expect("empty cells");
//! assert_eq!(game.current_player(), Player::X);
//!
//! let rewound = game.jump_to(1).expect("move 1 exists");
//! assert_eq!(rewound.current_player(), Player::O);
//! assert_eq!(rewound.history().len(), 3);
//! assert!(matches!(rewound.status(), GameStatus::InProgress { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod timeline;
mod types;

pub use action::Ply;
pub use error::Rejected;
pub use history::GameState;
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::Position;
pub use rules::check_winner as winner;
pub use status::GameStatus;
pub use timeline::MoveEntry;
pub use types::{Board, Player, Square};
