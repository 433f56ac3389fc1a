use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Direction of travel. Indices run clockwise starting at `Up`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// All headings in clockwise order.
    pub const ALL: [Heading; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Returns the clockwise index (`Up` = 0 .. `Left` = 3).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// Returns the heading for a clockwise index, wrapping modulo 4.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Returns the opposite heading.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Unit step `(dx, dy)` for this heading, y growing downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

/// High-level intents produced by the keyboard.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Heading(Heading),
    Confirm,
    About,
    Back,
    Quit,
    /// The terminal was resized and needs a full redraw.
    Resize,
}

/// Returns whether a heading change is legal (no immediate 180° turns).
#[must_use]
pub fn heading_change_is_valid(current: Heading, next: Heading) -> bool {
    next != current.opposite()
}

/// Maps one key press to a game intent.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(GameInput::Quit),
            _ => None,
        };
    }

    let input = match key.code {
        KeyCode::Up => GameInput::Heading(Heading::Up),
        KeyCode::Right => GameInput::Heading(Heading::Right),
        KeyCode::Down => GameInput::Heading(Heading::Down),
        KeyCode::Left => GameInput::Heading(Heading::Left),
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Confirm,
        KeyCode::Esc | KeyCode::Backspace => GameInput::Back,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => GameInput::Heading(Heading::Up),
            'd' => GameInput::Heading(Heading::Right),
            's' => GameInput::Heading(Heading::Down),
            'a' => GameInput::Heading(Heading::Left),
            'i' | '?' => GameInput::About,
            'q' => GameInput::Quit,
            _ => return None,
        },
        _ => return None,
    };

    Some(input)
}

/// Reads keyboard events from the terminal.
#[derive(Debug, Clone, Copy)]
pub struct InputHandler {
    wait: Duration,
}

impl InputHandler {
    /// Creates a handler that blocks at most `wait` per poll.
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self { wait }
    }

    /// Returns the next mapped intent, or `None` when nothing usable arrived in time.
    pub fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        if !event::poll(self.wait)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            Event::Resize(..) => Ok(Some(GameInput::Resize)),
            _ => Ok(None),
        }
    }
}
