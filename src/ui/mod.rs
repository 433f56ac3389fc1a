pub mod hud;
pub mod panels;

use std::time::Instant;

use tracing::debug;

use crate::game::{Game, GameObserver};
use crate::input::GameInput;

/// Which screen is visible.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Panel {
    Title,
    About,
    Game,
    Lose,
}

/// How the last match ended, shown on the lose panel.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MatchResult {
    Collided { final_score: u32 },
    BoardCleared { final_score: u32 },
}

impl MatchResult {
    #[must_use]
    pub fn final_score(self) -> u32 {
        match self {
            Self::Collided { final_score } | Self::BoardCleared { final_score } => final_score,
        }
    }
}

/// Presentation-side view state fed by game notifications.
#[derive(Debug, Clone)]
pub struct Presentation {
    panel: Panel,
    running_score: u32,
    result: Option<MatchResult>,
    dirty: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation {
    /// Starts on the title panel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            panel: Panel::Title,
            running_score: 0,
            result: None,
            dirty: true,
        }
    }

    /// Switches the visible panel.
    pub fn show_panel(&mut self, panel: Panel) {
        if self.panel != panel {
            debug!(from = ?self.panel, to = ?panel, "panel switched");
        }
        self.panel = panel;
        self.dirty = true;
    }

    #[must_use]
    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Score shown while playing.
    #[must_use]
    pub fn running_score(&self) -> u32 {
        self.running_score
    }

    /// Outcome of the last match, kept until the next one starts.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    /// Returns whether a redraw was requested since the last call, clearing the request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Requests a redraw, e.g. after a terminal resize.
    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }
}

impl GameObserver for Presentation {
    fn on_match_started(&mut self) {
        self.running_score = 0;
        self.result = None;
        self.show_panel(Panel::Game);
    }

    fn on_score_changed(&mut self, score: u32) {
        self.running_score = score;
        self.dirty = true;
    }

    fn on_game_over(&mut self, final_score: u32) {
        self.result = Some(MatchResult::Collided { final_score });
        self.running_score = 0;
        self.show_panel(Panel::Lose);
    }

    fn on_victory(&mut self, final_score: u32) {
        self.result = Some(MatchResult::BoardCleared { final_score });
        self.running_score = 0;
        self.show_panel(Panel::Lose);
    }

    fn on_refresh(&mut self) {
        self.dirty = true;
    }
}

/// Routes one intent according to the visible panel. Returns `false` when the user quits.
pub fn handle_input(
    game: &mut Game,
    view: &mut Presentation,
    input: GameInput,
    now: Instant,
) -> bool {
    match (view.panel(), input) {
        (_, GameInput::Quit) => return false,
        (_, GameInput::Resize) => view.request_redraw(),
        (Panel::Title | Panel::Lose, GameInput::Confirm) => game.start(now, view),
        (Panel::Title, GameInput::About) => view.show_panel(Panel::About),
        (Panel::About | Panel::Lose, GameInput::Back) => view.show_panel(Panel::Title),
        (_, GameInput::Heading(heading)) => {
            game.queue_heading(heading);
        }
        _ => {}
    }

    true
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::game::{Game, GameObserver, GameSettings};
    use crate::input::{GameInput, Heading};

    use super::{MatchResult, Panel, Presentation, handle_input};

    #[test]
    fn starts_on_title_and_switches_to_game_on_start() {
        let mut view = Presentation::new();
        assert_eq!(view.panel(), Panel::Title);

        view.on_match_started();

        assert_eq!(view.panel(), Panel::Game);
        assert_eq!(view.running_score(), 0);
    }

    #[test]
    fn game_over_shows_final_score_and_resets_running_score() {
        let mut view = Presentation::new();
        view.on_match_started();
        view.on_score_changed(1);
        view.on_score_changed(2);

        view.on_game_over(2);

        assert_eq!(view.panel(), Panel::Lose);
        assert_eq!(view.running_score(), 0);
        assert_eq!(view.result(), Some(MatchResult::Collided { final_score: 2 }));

        view.on_match_started();
        assert_eq!(view.result(), None);
    }

    #[test]
    fn victory_reuses_the_lose_panel() {
        let mut view = Presentation::new();
        view.on_match_started();

        view.on_victory(749);

        assert_eq!(view.panel(), Panel::Lose);
        assert_eq!(view.result().map(MatchResult::final_score), Some(749));
    }

    #[test]
    fn redraw_requests_are_consumed_once() {
        let mut view = Presentation::new();
        assert!(view.take_redraw());
        assert!(!view.take_redraw());

        view.on_refresh();

        assert!(view.take_redraw());
    }

    #[test]
    fn panel_navigation_follows_the_menus() {
        let mut game = Game::new_with_seed(GameSettings::default(), 1);
        let mut view = Presentation::new();
        let now = Instant::now();

        assert!(handle_input(&mut game, &mut view, GameInput::About, now));
        assert_eq!(view.panel(), Panel::About);

        handle_input(&mut game, &mut view, GameInput::Back, now);
        assert_eq!(view.panel(), Panel::Title);

        handle_input(&mut game, &mut view, GameInput::Confirm, now);
        assert_eq!(view.panel(), Panel::Game);
        assert!(game.is_active());

        assert!(!handle_input(&mut game, &mut view, GameInput::Quit, now));
    }

    #[test]
    fn heading_keys_do_nothing_before_a_match() {
        let mut game = Game::new_with_seed(GameSettings::default(), 2);
        let mut view = Presentation::new();

        handle_input(
            &mut game,
            &mut view,
            GameInput::Heading(Heading::Left),
            Instant::now(),
        );

        assert_eq!(view.panel(), Panel::Title);
        assert!(!game.is_active());
    }

    #[test]
    fn play_again_starts_a_new_match_from_the_lose_panel() {
        let mut game = Game::new_with_seed(GameSettings::default(), 3);
        let mut view = Presentation::new();
        let now = Instant::now();
        handle_input(&mut game, &mut view, GameInput::Confirm, now);
        game.lose(&mut view);
        assert_eq!(view.panel(), Panel::Lose);

        handle_input(&mut game, &mut view, GameInput::Confirm, now);

        assert_eq!(view.panel(), Panel::Game);
        assert!(game.is_active());
        assert_eq!(game.final_score(), None);
    }
}
