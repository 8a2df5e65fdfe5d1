use std::io;

use rand::Rng;
use tracing::{debug, info};

use crate::config::Config;
use crate::engine::{GameState, GameStatus, TickOutcome};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::snake::Direction;
use crate::timer::Timer;
use crate::ui::{Frontend, GameOutcome};

/// Everything that may change the game, in the order it happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Turn(Direction),
    Tick,
    Restart,
    TogglePause,
}

/// Owns one game and drives it from a timer and direction requests.
///
/// All mutation goes through `&mut self`, so input handling and ticks can
/// never interleave; a threaded host should funnel [`GameEvent`]s through a
/// single channel into [`GameController::handle`].
pub struct GameController<R, T> {
    config: Config,
    grid: Grid,
    state: GameState,
    pending: Option<Direction>,
    paused: bool,
    rng: R,
    timer: T,
}

impl<R: Rng, T: Timer> GameController<R, T> {
    pub fn new(config: Config, mut rng: R, timer: T) -> Result<Self, ConfigError> {
        let grid = config.grid()?;
        let state = GameState::new(grid, config.initial_length, &mut rng);

        Ok(GameController { config, grid, state, pending: None, paused: false, rng, timer })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Draws the opening board and starts ticking.
    pub fn start<U: Frontend>(&mut self, ui: &mut U) -> io::Result<()> {
        ui.render(self.state.snake(), self.state.food(), &self.grid)?;
        ui.set_score(self.state.score())?;
        self.timer.start(self.config.tick_interval());
        info!(width = self.grid.width(), height = self.grid.height(), "game started");
        Ok(())
    }

    /// Buffers a turn for the next tick. Later requests replace earlier ones;
    /// reversing onto the body is refused.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.state.is_over() {
            return false;
        }

        let current = self.state.snake().direction();
        if direction.is_opposite(current) {
            debug!(?direction, ?current, "reversal rejected");
            return false;
        }

        self.pending = Some(direction);
        true
    }

    pub fn tick<U: Frontend>(&mut self, ui: &mut U) -> io::Result<TickOutcome> {
        if let Some(direction) = self.pending.take() {
            self.state.snake_mut().set_direction(direction);
        }

        let old_score = self.state.score();
        let outcome = self.state.tick(&mut self.rng);
        if outcome == TickOutcome::Halted {
            return Ok(outcome);
        }

        ui.render(self.state.snake(), self.state.food(), &self.grid)?;
        if self.state.score() != old_score {
            ui.set_score(self.state.score())?;
        }

        if outcome.ends_game() {
            self.timer.stop();
            let result = match outcome {
                TickOutcome::Filled => GameOutcome::BoardFilled,
                _ => GameOutcome::Crashed,
            };
            info!(score = self.state.score(), ?result, "game over");
            ui.notify_game_over(self.state.score(), result)?;
        }

        Ok(outcome)
    }

    /// Runs one tick for every interval the timer reports, stopping early if
    /// the game ends. Returns the last outcome, if any tick ran.
    pub fn run_pending<U: Frontend>(&mut self, ui: &mut U) -> io::Result<Option<TickOutcome>> {
        let mut last = None;

        for _ in 0..self.timer.due_ticks() {
            last = Some(self.tick(ui)?);
            if self.state.is_over() {
                break;
            }
        }

        Ok(last)
    }

    pub fn restart<U: Frontend>(&mut self, ui: &mut U) -> io::Result<()> {
        self.timer.stop();
        self.state = GameState::new(self.grid, self.config.initial_length, &mut self.rng);
        self.pending = None;
        self.paused = false;
        info!("game restarted");
        self.start(ui)
    }

    /// Freezes or resumes the timer. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.state.is_over() {
            return self.paused;
        }

        self.paused = !self.paused;
        if self.paused {
            self.timer.stop();
        } else {
            self.timer.start(self.config.tick_interval());
        }

        debug!(paused = self.paused, "pause toggled");
        self.paused
    }

    pub fn handle<U: Frontend>(&mut self, event: GameEvent, ui: &mut U) -> io::Result<Option<TickOutcome>> {
        match event {
            GameEvent::Turn(direction) => {
                self.request_direction(direction);
            }
            GameEvent::Tick if !self.paused => return self.tick(ui).map(Some),
            GameEvent::Tick => {}
            GameEvent::Restart => self.restart(ui)?,
            GameEvent::TogglePause => {
                self.toggle_pause();
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Snake;
    use crate::timer::ManualTimer;
    use crate::Cell;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[derive(Default)]
    struct Silent {
        renders: usize,
    }

    impl crate::ui::Renderer for Silent {
        fn render(&mut self, _: &Snake, _: Option<Cell>, _: &Grid) -> io::Result<()> {
            self.renders += 1;
            Ok(())
        }
    }

    impl crate::ui::ScoreDisplay for Silent {
        fn set_score(&mut self, _: u32) -> io::Result<()> {
            Ok(())
        }
    }

    impl crate::ui::Notifier for Silent {
        fn notify_game_over(&mut self, _: u32, _: GameOutcome) -> io::Result<()> {
            Ok(())
        }
    }

    fn controller() -> GameController<StdRng, ManualTimer> {
        GameController::new(Config::default(), StdRng::seed_from_u64(3), ManualTimer::new()).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = Config { canvas_size: 390, ..Config::default() };
        let res = GameController::new(config, StdRng::seed_from_u64(3), ManualTimer::new());
        assert!(res.is_err());
    }

    #[test]
    fn latest_turn_wins() {
        let mut game = controller();
        assert!(game.request_direction(Direction::Up));
        assert!(game.request_direction(Direction::Down));
        assert_eq!(game.pending_direction(), Some(Direction::Down));
        assert!(!game.request_direction(Direction::Left));
        assert_eq!(game.pending_direction(), Some(Direction::Down));
    }

    #[test]
    fn pause_stops_the_timer() {
        let mut ui = Silent::default();
        let mut game = controller();
        game.start(&mut ui).unwrap();

        assert!(game.toggle_pause());
        game.timer_mut().advance(Duration::from_secs(1));
        assert_eq!(game.run_pending(&mut ui).unwrap(), None);
        assert_eq!(game.handle(GameEvent::Tick, &mut ui).unwrap(), None);

        assert!(!game.toggle_pause());
        game.timer_mut().advance(Duration::from_millis(100));
        assert!(game.run_pending(&mut ui).unwrap().is_some());
        assert_eq!(ui.renders, 2);
    }
}
