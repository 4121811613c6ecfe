//! Stateless UI rendering for the board, status line and history list.

use super::app::{App, Focus};
use crate::config::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use retrace_tictactoe::{MoveEntry, Player, Ply, Position, Square};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
/// Grid is three cells plus two separators each way.
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// A row of the history list (not checked against the history length).
    HistoryEntry(usize),
}

/// Screen regions, computed from the terminal size alone so rendering and
/// mouse hit-testing always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line block.
    pub status: Rect,
    /// Bordered block around the grid.
    pub board: Rect,
    /// Cell rectangles in index order.
    pub cells: [Rect; 9],
    /// Bordered history block.
    pub history: Rect,
    /// History rows, one entry per line.
    pub history_inner: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Computes the layout for a terminal area.
    pub fn new(area: Rect) -> Self {
        let [title, body, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let [left, history] =
            Layout::horizontal([Constraint::Length(GRID_WIDTH + 4), Constraint::Min(0)]).areas(body);

        let [status, board, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(GRID_HEIGHT + 2),
            Constraint::Min(0),
        ])
        .areas(left);

        let grid = Block::bordered().inner(board);
        let grid_x = grid.x + grid.width.saturating_sub(GRID_WIDTH) / 2;
        let cells = std::array::from_fn(|i| {
            let pos = Position::ALL[i];
            let cell = Rect::new(
                grid_x + pos.col() as u16 * (CELL_WIDTH + 1),
                grid.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            );
            cell.intersection(grid)
        });

        Self {
            title,
            status,
            board,
            cells,
            history,
            history_inner: Block::bordered().inner(history),
            help,
        }
    }

    /// Finds what lies under a terminal coordinate.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        if let Some(i) = self.cells.iter().position(|r| contains(*r, column, row)) {
            return Some(Hit::Cell(Position::ALL[i]));
        }
        if contains(self.history_inner, column, row) {
            return Some(Hit::HistoryEntry((row - self.history_inner.y) as usize));
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let palette = *app.palette();

    let title = Paragraph::new("Retrace - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_status(frame, &layout, app, palette);
    draw_board(frame, &layout, app, palette);
    draw_history(frame, &layout, app, palette);

    let help = Paragraph::new(
        "1-9/Enter: place  arrows: move  Tab: history  [ ]: step  r: restart  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_status(frame: &mut Frame, layout: &ScreenLayout, app: &App, palette: Palette) {
    let view = app.controller().view();
    let style = if view.status.is_over() {
        Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status_line())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(status, layout.status);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App, palette: Palette) {
    let view = app.controller().view();
    let focused = *app.focus() == Focus::Board;

    let block = Block::bordered()
        .title("Board")
        .border_style(focus_style(focused, palette));
    let grid = block.inner(layout.board);
    frame.render_widget(block, layout.board);

    let rule = Style::default().fg(Color::DarkGray);
    let lines: Vec<Line> = (0..GRID_HEIGHT)
        .map(|y| {
            if y % (CELL_HEIGHT + 1) == CELL_HEIGHT {
                Line::styled("───────┼───────┼───────", rule)
            } else {
                Line::styled("       │       │       ", rule)
            }
        })
        .collect();
    let grid_x = grid.x + grid.width.saturating_sub(GRID_WIDTH) / 2;
    let grid_area = Rect::new(grid_x, grid.y, GRID_WIDTH, GRID_HEIGHT).intersection(grid);
    frame.render_widget(Paragraph::new(lines), grid_area);

    for pos in Position::ALL {
        let winning = view.winning_line.is_some_and(|line| line.contains(&pos));
        let cursor = focused && pos == *app.cursor();
        draw_cell(
            frame,
            layout.cells[pos.to_index()],
            view.board.get(pos),
            pos,
            winning,
            cursor,
            palette,
        );
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    winning: bool,
    cursor: bool,
    palette: Palette,
) {
    let (symbol, mut style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(mark_color(player, palette))
                .add_modifier(Modifier::BOLD),
        ),
    };
    if winning {
        style = style.bg(palette.highlight).fg(Color::Black);
    }
    if cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let text = vec![Line::default(), Line::from(symbol), Line::default()];
    let cell = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn draw_history(frame: &mut Frame, layout: &ScreenLayout, app: &App, palette: Palette) {
    let focused = *app.focus() == Focus::History;
    let state = app.controller().state();
    let plies = state.plies();

    let title = if state.is_at_latest() {
        "History"
    } else {
        "History (viewing the past)"
    };
    let block = Block::bordered()
        .title(title)
        .border_style(focus_style(focused, palette));
    frame.render_widget(block, layout.history);

    let lines: Vec<Line> = state
        .timeline()
        .into_iter()
        .map(|entry| {
            let ply = entry
                .move_number
                .checked_sub(1)
                .and_then(|i| plies.get(i).copied());
            let selected = focused && entry.move_number == *app.history_selected();
            history_line(entry, ply, selected, palette)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), layout.history_inner);
}

fn history_line(entry: MoveEntry, ply: Option<Ply>, selected: bool, palette: Palette) -> Line<'static> {
    let mut label_style = if entry.is_jumpable() {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    if selected {
        label_style = label_style.add_modifier(Modifier::REVERSED);
    }

    let marker = if entry.is_current { "▶ " } else { "  " };
    let mut spans = vec![Span::raw(marker), Span::styled(entry.label(), label_style)];
    if let Some(ply) = ply {
        spans.push(Span::styled(
            format!("  {} {}", ply.player, ply.position),
            Style::default().fg(mark_color(ply.player, palette)),
        ));
    }
    Line::from(spans)
}

fn mark_color(player: Player, palette: Palette) -> Color {
    match player {
        Player::X => palette.x,
        Player::O => palette.o,
    }
}

fn focus_style(focused: bool, palette: Palette) -> Style {
    if focused {
        Style::default().fg(palette.highlight)
    } else {
        Style::default()
    }
}
