//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They do not depend on the
//! history, so any snapshot can be evaluated on its own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
