use ratatui::style::Color;

use crate::input::Heading;
use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Board width in cells.
pub const GRID_WIDTH: u16 = 25;

/// Board height in cells.
pub const GRID_HEIGHT: u16 = 30;

/// Board dimensions used for every match.
pub const GRID_SIZE: GridSize = GridSize {
    width: GRID_WIDTH,
    height: GRID_HEIGHT,
};

/// Fixed tick period in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Where a fresh snake's head starts.
pub const START_POSITION: Position = Position { x: 10, y: 10 };

/// Heading of a fresh snake.
pub const START_HEADING: Heading = Heading::Down;

/// Terminal columns used to draw one board cell, keeping cells roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// Solid fill for one board cell.
pub const GLYPH_CELL: &str = "██";

/// Fill for snake segments.
pub const COLOR_SNAKE: Color = Color::Black;

/// Fill for the fruit.
pub const COLOR_FRUIT: Color = Color::Rgb(0xff, 0xcc, 0xcc);

/// Background of the play area; empty cells are left undrawn on top of it.
pub const COLOR_BOARD: Color = Color::Rgb(0x9c, 0xb8, 0x6f);

/// Accent for panel titles and the score.
pub const COLOR_ACCENT: Color = Color::Green;

/// Muted colour for hints and footers.
pub const COLOR_MUTED: Color = Color::DarkGray;
