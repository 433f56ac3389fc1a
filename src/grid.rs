use crate::config::GridSize;
use crate::snake::Position;

/// What occupies a single board cell.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum CellState {
    #[default]
    Empty,
    SnakeBody,
    Fruit,
}

/// Rectangular board of cell states, stored row-major.
///
/// Coordinates must lie in `[0, width) × [0, height)`; callers wrap positions
/// before touching the grid, so out-of-range access panics.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Allocates a board with every cell empty.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![CellState::Empty; size.total_cells()],
        }
    }

    /// Replaces all prior state with an empty board of `size`.
    pub fn init(&mut self, size: GridSize) {
        self.size = size;
        self.cells.clear();
        self.cells.resize(size.total_cells(), CellState::Empty);
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.size.height
    }

    /// Returns the state at `(x, y)`.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> CellState {
        self.cells[self.index(x, y)]
    }

    /// Overwrites the state at `(x, y)`.
    pub fn set(&mut self, x: u16, y: u16, state: CellState) {
        let index = self.index(x, y);
        self.cells[index] = state;
    }

    /// Returns the state at an in-bounds logical position.
    #[must_use]
    pub fn cell_at(&self, position: Position) -> CellState {
        let (x, y) = self.coordinates(position);
        self.get(x, y)
    }

    /// Overwrites the state at an in-bounds logical position.
    pub fn set_cell(&mut self, position: Position, state: CellState) {
        let (x, y) = self.coordinates(position);
        self.set(x, y, state);
    }

    /// Returns every empty cell in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position> {
        let width = usize::from(self.size.width);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == CellState::Empty)
            .filter_map(|(index, _)| {
                Some(Position {
                    x: i32::try_from(index % width).ok()?,
                    y: i32::try_from(index / width).ok()?,
                })
            })
            .collect()
    }

    /// Counts the cells currently holding `state`.
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        assert!(
            x < self.size.width && y < self.size.height,
            "cell ({x}, {y}) outside {}×{} grid",
            self.size.width,
            self.size.height,
        );
        usize::from(y) * usize::from(self.size.width) + usize::from(x)
    }

    fn coordinates(&self, position: Position) -> (u16, u16) {
        // Negative values saturate to u16::MAX and trip the bounds check in `index`.
        (
            u16::try_from(position.x).unwrap_or(u16::MAX),
            u16::try_from(position.y).unwrap_or(u16::MAX),
        )
    }
}
