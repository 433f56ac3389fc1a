use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::grid::{CellState, Grid};
use crate::snake::Position;

/// Why a fruit could not be placed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum PlacementError {
    #[error("no empty cell left on the board")]
    BoardFull,
}

/// The single fruit active on the board.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Fruit {
    position: Option<Position>,
}

impl Fruit {
    /// Creates a fruit record with nothing placed yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts the fruit at `position` and marks the grid, clearing any previous fruit cell.
    pub fn place_at(&mut self, grid: &mut Grid, position: Position) {
        self.clear(grid);
        grid.set_cell(position, CellState::Fruit);
        self.position = Some(position);
    }

    /// Moves the fruit to a uniformly random empty cell.
    ///
    /// Only a cell that is `Empty` right now can be chosen, so snake segments are never
    /// overwritten. The previous fruit cell is left as-is because the snake is about to
    /// cover it. On a full board the fruit is left without a position.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<Position, PlacementError> {
        let candidates = grid.empty_cells();
        if candidates.is_empty() {
            self.position = None;
            return Err(PlacementError::BoardFull);
        }

        let position = candidates[rng.gen_range(0..candidates.len())];
        grid.set_cell(position, CellState::Fruit);
        self.position = Some(position);

        debug!(x = position.x, y = position.y, free = candidates.len(), "fruit placed");
        Ok(position)
    }

    /// Active fruit position, if one is on the board.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns true when the fruit sits at `position`.
    #[must_use]
    pub fn is_at(&self, position: Position) -> bool {
        self.position == Some(position)
    }

    fn clear(&mut self, grid: &mut Grid) {
        let Some(previous) = self.position.take() else {
            return;
        };

        if grid.cell_at(previous) == CellState::Fruit {
            grid.set_cell(previous, CellState::Empty);
        }
    }
}
