use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::{CELL_COLUMNS, COLOR_BOARD, COLOR_FRUIT, COLOR_SNAKE, GLYPH_CELL, GridSize};
use crate::game::Game;
use crate::grid::CellState;
use crate::ui::hud::render_hud;
use crate::ui::panels::{render_about_panel, render_lose_panel, render_title_panel};
use crate::ui::{Panel, Presentation};

/// Renders the full frame: score bar, board, and the active panel on top.
pub fn render(frame: &mut Frame<'_>, game: &Game, view: &Presentation) {
    let area = frame.area();
    let play_area = render_hud(frame, area, view.running_score());
    let board_area = board_rect(play_area, game.grid_size());

    let block = Block::bordered().style(Style::new().bg(COLOR_BOARD));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_cells(frame, inner, game);

    match view.panel() {
        Panel::Title => render_title_panel(frame, play_area),
        Panel::About => render_about_panel(frame, play_area),
        Panel::Lose => render_lose_panel(frame, play_area, view.result()),
        Panel::Game => {}
    }
}

/// Style of a non-empty cell; empty cells are not drawn.
#[must_use]
pub fn cell_style(state: CellState) -> Option<Style> {
    match state {
        CellState::Empty => None,
        CellState::SnakeBody => Some(Style::new().fg(COLOR_SNAKE).bg(COLOR_BOARD)),
        CellState::Fruit => Some(Style::new().fg(COLOR_FRUIT).bg(COLOR_BOARD)),
    }
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, game: &Game) {
    let size = game.grid_size();
    let buffer = frame.buffer_mut();

    for y in 0..size.height {
        for x in 0..size.width {
            let Some(style) = cell_style(game.cell_at(x, y)) else {
                continue;
            };
            let Some((column, row)) = logical_to_terminal(inner, x, y) else {
                continue;
            };
            buffer.set_string(column, row, GLYPH_CELL, style);
        }
    }
}

fn board_rect(area: Rect, size: GridSize) -> Rect {
    let width = size.width.saturating_mul(CELL_COLUMNS).saturating_add(2);
    let height = size.height.saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    board
}

fn logical_to_terminal(inner: Rect, x: u16, y: u16) -> Option<(u16, u16)> {
    let column = inner.x.checked_add(x.checked_mul(CELL_COLUMNS)?)?;
    let row = inner.y.checked_add(y)?;
    if column.saturating_add(CELL_COLUMNS) > inner.right() || row >= inner.bottom() {
        return None;
    }

    Some((column, row))
}
