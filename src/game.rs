use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::{GRID_SIZE, GridSize, START_HEADING, START_POSITION, TICK_INTERVAL_MS};
use crate::fruit::Fruit;
use crate::grid::{CellState, Grid};
use crate::input::Heading;
use crate::scheduler::TickScheduler;
use crate::snake::{Position, Snake, TickOutcome};

/// Fixed parameters of every match.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameSettings {
    pub grid: GridSize,
    pub tick_period: Duration,
    pub start: Position,
    pub heading: Heading,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid: GRID_SIZE,
            tick_period: Duration::from_millis(TICK_INTERVAL_MS),
            start: START_POSITION,
            heading: START_HEADING,
        }
    }
}

/// Receives lifecycle notifications from the game loop.
///
/// Every method defaults to doing nothing.
pub trait GameObserver {
    /// A new match began; the gameplay view should be shown.
    fn on_match_started(&mut self) {}

    /// The running score changed.
    fn on_score_changed(&mut self, _score: u32) {}

    /// The snake hit itself. Sent once per match.
    fn on_game_over(&mut self, _final_score: u32) {}

    /// The snake filled the whole board. Sent once per match.
    fn on_victory(&mut self, _final_score: u32) {}

    /// A tick finished and the board should be redrawn.
    fn on_refresh(&mut self) {}
}

impl GameObserver for () {}

/// Notification recorded by the `Vec<GameEvent>` observer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    MatchStarted,
    ScoreChanged(u32),
    GameOver { final_score: u32 },
    Victory { final_score: u32 },
    Refresh,
}

impl GameObserver for Vec<GameEvent> {
    fn on_match_started(&mut self) {
        self.push(GameEvent::MatchStarted);
    }

    fn on_score_changed(&mut self, score: u32) {
        self.push(GameEvent::ScoreChanged(score));
    }

    fn on_game_over(&mut self, final_score: u32) {
        self.push(GameEvent::GameOver { final_score });
    }

    fn on_victory(&mut self, final_score: u32) {
        self.push(GameEvent::Victory { final_score });
    }

    fn on_refresh(&mut self) {
        self.push(GameEvent::Refresh);
    }
}

/// Board, snake, and fruit of one match.
#[derive(Debug, Clone)]
pub struct Match {
    pub grid: Grid,
    pub snake: Snake,
    pub fruit: Fruit,
}

impl Match {
    /// Builds a fresh board with the snake at its start cell and one fruit placed.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(settings: &GameSettings, rng: &mut R) -> Self {
        let mut grid = Grid::new(settings.grid);
        let snake = Snake::new(settings.start.wrapped(settings.grid), settings.heading);
        let mut fruit = Fruit::new();

        if let Err(error) = fruit.place(&mut grid, rng) {
            warn!(%error, "match started without a fruit");
        }

        Self { grid, snake, fruit }
    }

    /// Assembles a match from a prepared layout. The snake is painted onto `grid`.
    #[must_use]
    pub fn from_parts(mut grid: Grid, snake: Snake, fruit: Fruit) -> Self {
        snake.paint(&mut grid);
        Self { grid, snake, fruit }
    }

    /// Advances the snake by one step.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        self.snake.tick(&mut self.grid, &mut self.fruit, rng)
    }

    /// Read-only cell query used by renderers.
    #[must_use]
    pub fn cell_at(&self, x: u16, y: u16) -> CellState {
        self.grid.get(x, y)
    }
}

/// Lifecycle of the current (or last) match.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// No match has been played yet.
    Idle,
    Playing,
    Lost,
    Won,
}

/// Fixed-tick game loop: owns the match, the score, queued input, and the timer.
#[derive(Debug)]
pub struct Game {
    settings: GameSettings,
    current: Option<Match>,
    status: GameStatus,
    score: u32,
    final_score: Option<u32>,
    intents: VecDeque<Heading>,
    scheduler: TickScheduler,
    rng: StdRng,
}

impl Game {
    /// Creates an idle game seeded from system entropy.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Creates an idle game with reproducible fruit placement.
    #[must_use]
    pub fn new_with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: GameSettings, rng: StdRng) -> Self {
        Self {
            settings,
            current: None,
            status: GameStatus::Idle,
            score: 0,
            final_score: None,
            intents: VecDeque::new(),
            scheduler: TickScheduler::new(settings.tick_period),
            rng,
        }
    }

    /// Starts a fresh match and arms the tick timer.
    pub fn start(&mut self, now: Instant, observer: &mut impl GameObserver) {
        let fresh = Match::new(&self.settings, &mut self.rng);
        self.start_with(fresh, now, observer);
    }

    /// Starts a match from a prepared layout, resetting score and queued input.
    pub fn start_with(&mut self, fresh: Match, now: Instant, observer: &mut impl GameObserver) {
        self.score = 0;
        self.final_score = None;
        self.intents.clear();
        self.current = Some(fresh);
        self.status = GameStatus::Playing;
        self.scheduler.start(now);

        info!(
            width = self.settings.grid.width,
            height = self.settings.grid.height,
            "match started"
        );
        observer.on_match_started();
    }

    /// Queues a heading change for the next tick. Ignored while no match is active.
    pub fn queue_heading(&mut self, heading: Heading) -> bool {
        if !self.is_active() {
            return false;
        }

        self.intents.push_back(heading);
        true
    }

    /// Runs one tick if the timer is due at `now`. Returns whether a tick ran.
    pub fn update(&mut self, now: Instant, observer: &mut impl GameObserver) -> bool {
        if !self.is_active() {
            self.scheduler.cancel();
            return false;
        }

        if !self.scheduler.poll(now) {
            return false;
        }

        self.tick(observer);
        true
    }

    /// Applies queued input, advances the snake, and requests a redraw.
    pub fn tick(&mut self, observer: &mut impl GameObserver) {
        if !self.is_active() {
            return;
        }
        let Some(current) = self.current.as_mut() else {
            return;
        };

        while let Some(heading) = self.intents.pop_front() {
            current.snake.set_heading(heading);
        }

        match current.tick(&mut self.rng) {
            TickOutcome::Moved => {}
            TickOutcome::Ate { next_fruit } => {
                debug!(x = next_fruit.x, y = next_fruit.y, "fruit eaten");
                self.add_to_score(observer);
            }
            TickOutcome::BoardFilled => {
                self.add_to_score(observer);
                self.win(observer);
            }
            TickOutcome::Died => self.lose(observer),
        }

        observer.on_refresh();
    }

    /// Ends the match as lost, exposing the final score and zeroing the running one.
    pub fn lose(&mut self, observer: &mut impl GameObserver) {
        if let Some(final_score) = self.finish(GameStatus::Lost) {
            info!(final_score, "match lost");
            observer.on_game_over(final_score);
        }
    }

    /// Adds one point and publishes the new score.
    pub fn add_to_score(&mut self, observer: &mut impl GameObserver) {
        self.score += 1;
        observer.on_score_changed(self.score);
    }

    fn win(&mut self, observer: &mut impl GameObserver) {
        if let Some(final_score) = self.finish(GameStatus::Won) {
            info!(final_score, "board filled");
            observer.on_victory(final_score);
        }
    }

    fn finish(&mut self, status: GameStatus) -> Option<u32> {
        if !self.is_active() {
            return None;
        }

        self.status = status;
        self.scheduler.cancel();
        self.intents.clear();

        let final_score = self.score;
        self.final_score = Some(final_score);
        self.score = 0;
        Some(final_score)
    }

    /// True while a match is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Playing
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Running score of the active match.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score of the last finished match, kept until the next start.
    #[must_use]
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// The current match, or the last one after it ended.
    #[must_use]
    pub fn current_match(&self) -> Option<&Match> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        self.settings.grid
    }

    /// Read-only cell query for renderers; empty before the first match.
    #[must_use]
    pub fn cell_at(&self, x: u16, y: u16) -> CellState {
        self.current
            .as_ref()
            .map_or(CellState::Empty, |current| current.cell_at(x, y))
    }

    /// Whether the tick timer is armed.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_running()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::config::GridSize;
    use crate::fruit::Fruit;
    use crate::grid::{CellState, Grid};
    use crate::input::Heading;
    use crate::snake::{Position, Snake};

    use super::{Game, GameEvent, GameSettings, GameStatus, Match};

    const SMALL: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    fn settings() -> GameSettings {
        GameSettings {
            grid: SMALL,
            ..GameSettings::default()
        }
    }

    fn layout(snake: Snake, fruit_at: Position) -> Match {
        let mut grid = Grid::new(SMALL);
        let mut fruit = Fruit::new();
        fruit.place_at(&mut grid, fruit_at);
        Match::from_parts(grid, snake, fruit)
    }

    #[test]
    fn default_settings_match_the_classic_board() {
        let settings = GameSettings::default();

        assert_eq!(settings.grid.width, 25);
        assert_eq!(settings.grid.height, 30);
        assert_eq!(settings.tick_period, Duration::from_millis(100));
        assert_eq!(settings.start, Position { x: 10, y: 10 });
        assert_eq!(settings.heading, Heading::Down);
    }

    #[test]
    fn start_resets_state_and_places_one_fruit() {
        let mut game = Game::new_with_seed(GameSettings::default(), 1);
        let mut events = Vec::new();

        game.start(Instant::now(), &mut events);

        assert!(game.is_active());
        assert!(game.is_ticking());
        assert_eq!(game.score(), 0);
        assert_eq!(events, vec![GameEvent::MatchStarted]);

        let current = game.current_match().expect("match should exist");
        assert_eq!(current.grid.count(CellState::Fruit), 1);
        assert_eq!(current.grid.count(CellState::SnakeBody), 0);
        assert_eq!(current.snake.head(), Position { x: 10, y: 10 });
        assert_eq!(current.snake.heading(), Heading::Down);
        assert_eq!(current.snake.target_length(), 0);
    }

    #[test]
    fn eating_fruit_scores_and_notifies() {
        let mut game = Game::new_with_seed(settings(), 2);
        let mut events = Vec::new();
        let snake = Snake::new(Position { x: 1, y: 1 }, Heading::Right);
        game.start_with(layout(snake, Position { x: 2, y: 1 }), Instant::now(), &mut events);

        game.tick(&mut events);

        assert_eq!(game.score(), 1);
        assert_eq!(
            events,
            vec![
                GameEvent::MatchStarted,
                GameEvent::ScoreChanged(1),
                GameEvent::Refresh
            ]
        );
    }

    #[test]
    fn queued_reversal_is_ignored_but_turns_apply() {
        let mut game = Game::new_with_seed(settings(), 3);
        let snake = Snake::new(Position { x: 5, y: 5 }, Heading::Down);
        game.start_with(layout(snake, Position { x: 0, y: 0 }), Instant::now(), &mut ());

        assert!(game.queue_heading(Heading::Up));
        game.tick(&mut ());
        let head = game.current_match().map(|current| current.snake.head());
        assert_eq!(head, Some(Position { x: 5, y: 6 }));

        game.queue_heading(Heading::Right);
        game.queue_heading(Heading::Left);
        game.tick(&mut ());
        let head = game.current_match().map(|current| current.snake.head());
        assert_eq!(head, Some(Position { x: 6, y: 6 }));
    }

    #[test]
    fn input_is_ignored_while_inactive() {
        let mut game = Game::new_with_seed(settings(), 4);

        assert!(!game.queue_heading(Heading::Left));
        assert_eq!(game.status(), GameStatus::Idle);
    }

    #[test]
    fn losing_notifies_once_and_stops_ticking() {
        let mut game = Game::new_with_seed(settings(), 5);
        let mut events = Vec::new();
        let snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
            ],
            Heading::Up,
        );
        let start = Instant::now();
        game.start_with(layout(snake, Position { x: 8, y: 8 }), start, &mut events);
        game.add_to_score(&mut events);

        assert!(game.update(start, &mut events));
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.final_score(), Some(1));
        assert_eq!(game.score(), 0);
        assert!(!game.is_ticking());

        let later = start + Duration::from_secs(1);
        assert!(!game.update(later, &mut events));
        game.lose(&mut events);

        let game_overs = events
            .iter()
            .filter(|event| matches!(event, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
        assert!(events.contains(&GameEvent::GameOver { final_score: 1 }));
    }

    #[test]
    fn restart_clears_final_score() {
        let mut game = Game::new_with_seed(settings(), 6);
        let now = Instant::now();
        game.start(now, &mut ());
        game.lose(&mut ());
        assert_eq!(game.final_score(), Some(0));

        game.start(now, &mut ());

        assert_eq!(game.final_score(), None);
        assert!(game.is_active());
    }

    #[test]
    fn update_respects_the_tick_period() {
        let mut game = Game::new_with_seed(settings(), 7);
        let snake = Snake::new(Position { x: 0, y: 5 }, Heading::Right);
        let start = Instant::now();
        game.start_with(layout(snake, Position { x: 9, y: 0 }), start, &mut ());

        assert!(game.update(start, &mut ()));
        assert!(!game.update(start + Duration::from_millis(50), &mut ()));
        assert!(game.update(start + Duration::from_millis(100), &mut ()));

        let head = game.current_match().map(|current| current.snake.head());
        assert_eq!(head, Some(Position { x: 2, y: 5 }));
    }

    #[test]
    fn filling_the_board_wins() {
        let tiny = GridSize {
            width: 3,
            height: 1,
        };
        let mut game = Game::new_with_seed(
            GameSettings {
                grid: tiny,
                ..GameSettings::default()
            },
            8,
        );
        let mut events = Vec::new();
        let mut grid = Grid::new(tiny);
        let mut fruit = Fruit::new();
        fruit.place_at(&mut grid, Position { x: 2, y: 0 });
        let snake = Snake::from_segments(
            vec![Position { x: 0, y: 0 }, Position { x: 1, y: 0 }],
            Heading::Right,
        );
        game.start_with(Match::from_parts(grid, snake, fruit), Instant::now(), &mut events);

        game.tick(&mut events);

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.final_score(), Some(1));
        assert!(!game.is_ticking());
        assert!(events.contains(&GameEvent::Victory { final_score: 1 }));
    }

    #[test]
    fn cell_query_is_empty_before_first_match() {
        let game = Game::new_with_seed(settings(), 9);

        assert_eq!(game.cell_at(3, 3), CellState::Empty);
    }
}
