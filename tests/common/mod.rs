#![allow(dead_code)]

use std::io;

use grid_snake::grid::Grid;
use grid_snake::snake::Snake;
use grid_snake::ui::{GameOutcome, Notifier, Renderer, ScoreDisplay};
use grid_snake::Cell;

/// Frontend that remembers everything the controller told it.
#[derive(Debug, Default)]
pub struct Recorder {
    pub frames: Vec<(Vec<Cell>, Option<Cell>)>,
    pub scores: Vec<u32>,
    pub game_overs: Vec<(u32, GameOutcome)>,
}

impl Recorder {
    pub fn last_frame(&self) -> &(Vec<Cell>, Option<Cell>) {
        self.frames.last().expect("nothing rendered yet")
    }
}

impl Renderer for Recorder {
    fn render(&mut self, snake: &Snake, food: Option<Cell>, _grid: &Grid) -> io::Result<()> {
        self.frames.push((snake.body().iter().copied().collect(), food));
        Ok(())
    }
}

impl ScoreDisplay for Recorder {
    fn set_score(&mut self, score: u32) -> io::Result<()> {
        self.scores.push(score);
        Ok(())
    }
}

impl Notifier for Recorder {
    fn notify_game_over(&mut self, score: u32, outcome: GameOutcome) -> io::Result<()> {
        self.game_overs.push((score, outcome));
        Ok(())
    }
}
