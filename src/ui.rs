//! Output collaborators of the game controller.

use std::io;

use crate::grid::Grid;
use crate::snake::Snake;
use crate::Cell;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Crashed,
    BoardFilled,
}

pub trait Renderer {
    /// Draws the whole board. Must not touch game state.
    fn render(&mut self, snake: &Snake, food: Option<Cell>, grid: &Grid) -> io::Result<()>;
}

pub trait ScoreDisplay {
    fn set_score(&mut self, score: u32) -> io::Result<()>;
}

pub trait Notifier {
    fn notify_game_over(&mut self, score: u32, outcome: GameOutcome) -> io::Result<()>;
}

/// Everything the controller talks to on its way out.
pub trait Frontend: Renderer + ScoreDisplay + Notifier {}

impl<T: Renderer + ScoreDisplay + Notifier> Frontend for T {}
