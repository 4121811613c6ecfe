//! Headless rendering of a game for the `replay` command.

use retrace_tictactoe::{GameState, GameStatus, Ply};
use serde::Serialize;
use std::fmt::Write;

/// Printable summary of a game: displayed board, status and history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    /// Index of the displayed snapshot.
    pub current_move: usize,
    /// Status line of the displayed snapshot.
    pub status: String,
    /// Whether the displayed snapshot is terminal.
    pub game_over: bool,
    /// Displayed board as nine cells (`"X"`, `"O"` or `null`).
    pub board: Vec<Option<String>>,
    /// Every ply in the history, including those after the displayed move.
    pub plies: Vec<Ply>,
    /// History list labels.
    pub history: Vec<String>,
}

impl Transcript {
    /// Builds a transcript from a game state.
    pub fn new(game: &GameState) -> Self {
        let status: GameStatus = game.status();
        Self {
            current_move: game.current_move(),
            status: status.to_string(),
            game_over: status.is_over(),
            board: game
                .current_board()
                .squares()
                .iter()
                .map(|sq| sq.player().map(|p| p.to_string()))
                .collect(),
            plies: game.plies(),
            history: game.timeline().iter().map(|e| e.label()).collect(),
        }
    }

    /// Plain-text rendering: status, grid, then the numbered history list.
    pub fn render_text(game: &GameState) -> String {
        let transcript = Self::new(game);
        let mut out = String::new();
        let _ = writeln!(out, "{}", transcript.status);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", game.current_board().display());
        let _ = writeln!(out);
        let plies = transcript.plies.iter().map(Some);
        for (i, (label, ply)) in transcript
            .history
            .iter()
            .zip(std::iter::once(None).chain(plies))
            .enumerate()
        {
            match ply {
                Some(ply) => {
                    let _ = writeln!(out, "{:>2}. {:<20} ({})", i + 1, label, ply);
                }
                None => {
                    let _ = writeln!(out, "{:>2}. {}", i + 1, label);
                }
            }
        }
        out
    }

    /// JSON rendering.
    pub fn render_json(game: &GameState) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::new(game))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_after_win() {
        let game = GameState::replay(&[0, 3, 1, 4, 2]).unwrap();
        let text = Transcript::render_text(&game);
        let expected = "\
Winner: X

X|X|X
-+-+-
O|O|6
-+-+-
7|8|9

 1. Go to game start
 2. Go to move #1        (X -> Top-left)
 3. Go to move #2        (O -> Middle-left)
 4. Go to move #3        (X -> Top-center)
 5. Go to move #4        (O -> Center)
 6. You are at move #5   (X -> Top-right)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_after_jump() {
        let game = GameState::replay(&[4, 0]).and_then(|g| g.jump_to(1)).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&Transcript::render_json(&game).unwrap()).unwrap();

        assert_eq!(value["current_move"], 1);
        assert_eq!(value["status"], "Next player: O");
        assert_eq!(value["game_over"], false);
        assert_eq!(value["board"][4], "X");
        assert_eq!(value["board"][0], serde_json::Value::Null);
        assert_eq!(value["plies"].as_array().unwrap().len(), 2);
        assert_eq!(value["plies"][1]["position"], "TopLeft");
        assert_eq!(
            value["history"],
            serde_json::json!(["Go to game start", "You are at move #1", "Go to move #2"])
        );
    }

    #[test]
    fn test_draw_flagged_game_over() {
        let game = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        let transcript = Transcript::new(&game);
        assert!(transcript.game_over);
        assert_eq!(transcript.status, "Draw: no moves left");
        assert!(transcript.board.iter().all(Option::is_some));
    }
}
