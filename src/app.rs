//! The terminal session: intro screen, the poll loop and teardown.

use std::{io, thread::sleep, time::Duration};

use anyhow::{bail, Context, Result};
use rand::Rng;
use tracing::{error, info};

use crate::config::Config;
use crate::engine::GameStatus;
use crate::game::{GameController, GameEvent};
use crate::grid::Grid;
use crate::input::{command_from_key, Command};
use crate::term::TermManager;
use crate::Coords;
use crate::timer::IntervalTimer;

const POLL_INTERVAL_MS: u64 = 5;

pub struct App<R> {
    term: TermManager,
    game: GameController<R, IntervalTimer>,
}

impl<R: Rng> App<R> {
    pub fn new(config: Config, rng: R) -> Result<Self> {
        let grid = config.grid().context("invalid game configuration")?;
        let term = TermManager::new().context("failed to read terminal size")?;
        check_fits(&grid, term.get_terminal_size())?;

        // Only build the board once it is known to be drawable.
        let game = GameController::new(config, rng, IntervalTimer::new())
            .context("invalid game configuration")?;

        Ok(App { term, game })
    }

    pub fn run(&mut self) -> Result<()> {
        self.term.setup().context("failed to prepare terminal")?;
        let result = self.play();

        if let Err(err) = self.term.restore() {
            error!(?err, "failed to restore terminal");
        }

        result
    }

    fn play(&mut self) -> Result<()> {
        if !self.show_intro()? {
            return Ok(());
        }

        self.game.start(&mut self.term)?;

        loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue()? {
                let Some(command) = command_from_key(&key_ev) else { continue };
                let Some(event) = command.game_event() else {
                    info!(score = self.game.score(), "quit");
                    return Ok(());
                };
                self.dispatch(event)?;
            }

            self.game.run_pending(&mut self.term)?;
        }
    }

    /// Returns false if the player quit from the intro.
    fn show_intro(&mut self) -> io::Result<bool> {
        self.term.show_message(&[
            "Arrow keys or WASD to move",
            "Esc to pause, R to restart",
            "Q or CTRL+C to quit",
            "",
            "Press any key to begin"
        ])?;

        let key = self.term.read_key_blocking()?;
        self.term.hide_message()?;

        Ok(command_from_key(&key) != Some(Command::Quit))
    }

    /// Feeds one event to the game, keeping the message boxes in step.
    fn dispatch(&mut self, event: GameEvent) -> io::Result<()> {
        match event {
            GameEvent::TogglePause if self.game.status() == GameStatus::Over => return Ok(()),
            GameEvent::Restart => self.term.hide_message()?,
            _ => {}
        }

        self.game.handle(event, &mut self.term)?;

        if event == GameEvent::TogglePause {
            if self.game.is_paused() {
                self.term.show_message(&["Paused", "Press Esc to resume", "or Q to quit"])?;
            } else {
                self.term.hide_message()?;
            }
        }

        Ok(())
    }
}

/// Fails when the terminal cannot show the whole board and its score line.
pub fn check_fits(grid: &Grid, terminal: Coords) -> Result<()> {
    if !TermManager::fits_within(grid, terminal) {
        let (need_w, need_h) = TermManager::required_size(grid);
        let (have_w, have_h) = terminal;
        bail!("terminal too small: need {need_w}x{need_h}, have {have_w}x{have_h}");
    }
    Ok(())
}
