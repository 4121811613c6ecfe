//! Application state and input handling.

use super::input::{digit_cell, move_cursor};
use super::ui::{Hit, ScreenLayout};
use crate::config::Palette;
use crate::controller::{Controller, Intent};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::layout::Rect;
use retrace_tictactoe::Position;
use tracing::{debug, instrument};

/// Which widget receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select a history entry.
    History,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// Owner of the game state.
    controller: Controller,
    /// Board cell targeted by `Enter`.
    cursor: Position,
    /// Widget receiving navigation keys.
    focus: Focus,
    /// Highlighted history entry while the history has focus.
    history_selected: usize,
    /// Resolved theme colors.
    palette: Palette,
    /// Set once the user asks to quit.
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(palette: Palette) -> Self {
        Self {
            controller: Controller::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_selected: 0,
            palette,
            should_quit: false,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char('[') => {
                let current = self.controller.state().current_move();
                if let Some(previous) = current.checked_sub(1) {
                    self.dispatch(Intent::JumpTo(previous));
                }
            }
            KeyCode::Char(']') => {
                let current = self.controller.state().current_move();
                self.dispatch(Intent::JumpTo(current + 1));
            }
            key => {
                if let Some(cell) = digit_cell(key) {
                    self.dispatch(Intent::CellClick(cell));
                    return;
                }
                match self.focus {
                    Focus::Board => self.handle_board_key(key),
                    Focus::History => self.handle_history_key(key),
                }
            }
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(Intent::CellClick(self.cursor.to_index()));
            }
            key => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.controller.state().history().len() - 1;
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.history_selected = self.history_selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.history_selected = (self.history_selected + 1).min(last);
            }
            KeyCode::Home => self.history_selected = 0,
            KeyCode::End => self.history_selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(Intent::JumpTo(self.history_selected));
            }
            _ => {}
        }
    }

    /// Handles a mouse event on a terminal of size `area`.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match ScreenLayout::new(area).hit(event.column, event.row) {
            Some(Hit::Cell(pos)) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.dispatch(Intent::CellClick(pos.to_index()));
            }
            Some(Hit::HistoryEntry(move_number)) => {
                if move_number < self.controller.state().history().len() {
                    self.focus = Focus::History;
                    self.history_selected = move_number;
                    self.dispatch(Intent::JumpTo(move_number));
                }
            }
            None => {}
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        self.controller.dispatch(intent);
        self.sync_history_selection();
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        };
        self.history_selected = self.controller.state().current_move();
        debug!(focus = ?self.focus, "Focus changed");
    }

    fn sync_history_selection(&mut self) {
        let state = self.controller.state();
        if self.focus == Focus::Board {
            self.history_selected = state.current_move();
        } else {
            self.history_selected = self.history_selected.min(state.history().len() - 1);
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.controller.restart();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.history_selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use retrace_tictactoe::{Player, Square};

    fn app() -> App {
        App::new(Palette::default())
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            app.handle_key(key);
        }
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digits_place_marks() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        let board = app.controller().state().current_board().clone();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = app();
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(*app.cursor(), Position::TopLeft);
        assert_eq!(
            app.controller().state().current_board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        // Same cell again is silently ignored.
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.controller().state().history().len(), 2);
    }

    #[test]
    fn test_bracket_steps_through_history() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('3')]);
        press(&mut app, &[KeyCode::Char('['), KeyCode::Char('[')]);
        assert_eq!(app.controller().state().current_move(), 1);
        press(&mut app, &[KeyCode::Char(']')]);
        assert_eq!(app.controller().state().current_move(), 2);
        press(&mut app, &[KeyCode::Char(']'), KeyCode::Char(']')]);
        assert_eq!(app.controller().state().current_move(), 3);
    }

    #[test]
    fn test_history_focus_jump() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('3')]);
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(*app.focus(), Focus::History);
        assert_eq!(*app.history_selected(), 3);

        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.controller().state().current_move(), 1);
        assert_eq!(app.controller().state().history().len(), 4);

        // Placing from the past truncates the future.
        press(&mut app, &[KeyCode::Char('9')]);
        assert_eq!(app.controller().state().history().len(), 3);
        assert_eq!(*app.history_selected(), 1);
    }

    #[test]
    fn test_mouse_click_cell() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = ScreenLayout::new(area);
        let center = layout.cells[Position::Center.to_index()];

        let mut app = app();
        app.handle_mouse(left_click(center.x + 1, center.y + 1), area);
        assert_eq!(*app.cursor(), Position::Center);
        assert_eq!(
            app.controller().state().current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_mouse_click_history() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = ScreenLayout::new(area);
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2')]);

        app.handle_mouse(
            left_click(layout.history_inner.x + 2, layout.history_inner.y),
            area,
        );
        assert_eq!(app.controller().state().current_move(), 0);

        // Rows past the last entry do nothing.
        app.handle_mouse(
            left_click(layout.history_inner.x + 2, layout.history_inner.y + 5),
            area,
        );
        assert_eq!(app.controller().state().current_move(), 0);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Tab, KeyCode::Char('r')]);
        assert_eq!(app.controller().state().history().len(), 1);
        assert_eq!(*app.focus(), Focus::Board);
        assert!(!*app.should_quit());
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(*app.should_quit());
    }
}
