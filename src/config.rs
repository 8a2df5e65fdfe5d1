use std::time::Duration;

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::TermInt;

pub const DEFAULT_GRID_SIZE: u32 = 20;
pub const DEFAULT_GAME_SPEED_MS: u64 = 100;
pub const DEFAULT_CANVAS_SIZE: u32 = 400;
pub const MIN_SNAKE_LENGTH: usize = 3;
/// Largest board side whose border and score line still fit terminal coordinates.
pub const MAX_GRID_CELLS: u32 = TermInt::MAX as u32 - 3;

/// Settings fixed for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Side of one cell, in canvas pixels.
    pub grid_size: u32,
    /// Milliseconds between ticks.
    pub game_speed: u64,
    /// Side of the square canvas, in pixels.
    pub canvas_size: u32,
    pub initial_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            grid_size: DEFAULT_GRID_SIZE,
            game_speed: DEFAULT_GAME_SPEED_MS,
            canvas_size: DEFAULT_CANVAS_SIZE,
            initial_length: MIN_SNAKE_LENGTH,
        }
    }
}

impl Config {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.game_speed)
    }

    /// Checks every startup constraint and derives the grid.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.canvas_size == 0 {
            return Err(ConfigError::ZeroCanvasSize);
        }
        if self.game_speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        if self.canvas_size % self.grid_size != 0 {
            return Err(ConfigError::UnevenCanvas { canvas: self.canvas_size, cell: self.grid_size });
        }

        let cells = self.canvas_size / self.grid_size;
        let side = i32::try_from(cells)
            .ok()
            .filter(|_| cells <= MAX_GRID_CELLS)
            .ok_or(ConfigError::GridTooLarge { cells, max: MAX_GRID_CELLS })?;
        let grid = Grid::new(side, side);

        if self.initial_length < MIN_SNAKE_LENGTH {
            return Err(ConfigError::SnakeTooShort { length: self.initial_length, min: MIN_SNAKE_LENGTH });
        }
        if self.initial_length > grid.width() as usize {
            return Err(ConfigError::SnakeTooWide { length: self.initial_length, width: grid.width() });
        }
        if self.initial_length >= grid.capacity() {
            return Err(ConfigError::SnakeFillsGrid {
                length: self.initial_length,
                width: grid.width(),
                height: grid.height(),
            });
        }

        Ok(grid)
    }
}
