use std::collections::VecDeque;

use rand::Rng;
use tracing::{debug, trace};

use crate::config::GridSize;
use crate::fruit::{Fruit, PlacementError};
use crate::grid::{CellState, Grid};
use crate::input::{Heading, heading_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighbouring position one cell towards `heading`, unwrapped.
    #[must_use]
    pub fn stepped(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Whether the snake is still moving.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SnakeState {
    Alive,
    Dead,
}

/// What happened during one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The head advanced onto an empty cell.
    Moved,
    /// The head ate the fruit and a new one was placed.
    Ate { next_fruit: Position },
    /// The head ate the fruit and no empty cell was left for the next one.
    BoardFilled,
    /// The head ran into the body. Nothing on the grid changed.
    Died,
}

/// Snake head, heading, and body history.
///
/// The body is stored oldest-first; its newest entry is the head. Steady-state
/// body length is `target_length + 1`, reached one cell per tick after growth.
#[derive(Debug, Clone)]
pub struct Snake {
    head: Position,
    heading: Heading,
    target_length: usize,
    body: VecDeque<Position>,
    state: SnakeState,
}

impl Snake {
    /// Creates a snake with an empty body whose first tick leaves `start`.
    #[must_use]
    pub fn new(start: Position, heading: Heading) -> Self {
        Self {
            head: start,
            heading,
            target_length: 0,
            body: VecDeque::new(),
            state: SnakeState::Alive,
        }
    }

    /// Creates a snake from explicit body segments, oldest first; the last one is the head.
    ///
    /// The target length is set so the body neither grows nor shrinks on the next tick.
    /// Call [`Snake::paint`] to mirror the segments onto a grid.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Heading) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            head: segments.last().copied().unwrap_or_default(),
            heading,
            target_length: segments.len().saturating_sub(1),
            body: VecDeque::from(segments),
            state: SnakeState::Alive,
        }
    }

    /// Marks every body segment as `SnakeBody` on `grid`.
    pub fn paint(&self, grid: &mut Grid) {
        for segment in &self.body {
            grid.set_cell(*segment, CellState::SnakeBody);
        }
    }

    /// Changes the heading unless it is the exact reverse of the current one.
    ///
    /// Returns whether the change was accepted.
    pub fn set_heading(&mut self, heading: Heading) -> bool {
        if !heading_change_is_valid(self.heading, heading) {
            trace!(current = ?self.heading, rejected = ?heading, "reversal ignored");
            return false;
        }

        self.heading = heading;
        true
    }

    /// Advances the snake by one cell, updating `grid` and relocating `fruit` when eaten.
    ///
    /// The next head position is wrapped onto the board before any collision test, so
    /// crossing an edge behaves exactly like moving between interior cells. A collision
    /// with any current body segment (the tail included) kills the snake before the grid
    /// is touched. Growth raises the target length before trimming, which keeps the tail
    /// in place on the tick the fruit is eaten.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        fruit: &mut Fruit,
        rng: &mut R,
    ) -> TickOutcome {
        if self.state == SnakeState::Dead {
            return TickOutcome::Died;
        }

        let next = self.head.stepped(self.heading).wrapped(grid.size());

        if self.occupies(next) {
            self.state = SnakeState::Dead;
            debug!(x = next.x, y = next.y, length = self.body.len(), "snake hit itself");
            return TickOutcome::Died;
        }

        let outcome = if fruit.is_at(next) {
            self.target_length += 1;
            match fruit.place(grid, rng) {
                Ok(next_fruit) => TickOutcome::Ate { next_fruit },
                Err(PlacementError::BoardFull) => TickOutcome::BoardFilled,
            }
        } else {
            TickOutcome::Moved
        };

        while self.body.len() > self.target_length {
            let Some(oldest) = self.body.pop_front() else {
                break;
            };
            grid.set_cell(oldest, CellState::Empty);
        }

        self.head = next;
        self.body.push_back(next);
        grid.set_cell(next, CellState::SnakeBody);

        outcome
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Length the body is growing towards.
    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    #[must_use]
    pub fn state(&self) -> SnakeState {
        self.state
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.state == SnakeState::Alive
    }

    /// Returns true if any body segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from oldest (tail) to newest (head).
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
