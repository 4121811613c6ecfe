//! History list entries.

use serde::{Deserialize, Serialize};

/// One row of the move-history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Index into the history (0 is the game start).
    pub move_number: usize,
    /// Whether this is the displayed snapshot.
    pub is_current: bool,
}

impl MoveEntry {
    /// Creates a new entry.
    pub fn new(move_number: usize, is_current: bool) -> Self {
        Self {
            move_number,
            is_current,
        }
    }

    /// Only entries other than the current one jump when activated.
    pub fn is_jumpable(&self) -> bool {
        !self.is_current
    }

    /// Text shown for this entry.
    pub fn label(&self) -> String {
        if self.is_current {
            format!("You are at move #{}", self.move_number)
        } else if self.move_number == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.move_number)
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
