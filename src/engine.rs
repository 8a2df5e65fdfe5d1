//! The per-tick state machine: moves the snake, resolves collisions and
//! feeds it.

use rand::Rng;
use tracing::debug;

use crate::food::place_food;
use crate::grid::Grid;
use crate::snake::{Collision, MoveResult, Snake};
use crate::Cell;

pub const SCORE_PER_FOOD: u32 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over,
}

/// What a single tick did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved { new_head: Cell },
    Ate { new_head: Cell, food: Cell },
    Crashed(Collision),
    /// The snake ate the last reachable food and covers the whole grid.
    Filled,
    /// The game was already over; nothing changed.
    Halted,
}

impl TickOutcome {
    pub fn ends_game(&self) -> bool {
        matches!(self, TickOutcome::Crashed(_) | TickOutcome::Filled)
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    score: u32,
    status: GameStatus,
}

impl GameState {
    /// A fresh game: the default snake layout and one piece of food.
    pub fn new<R: Rng + ?Sized>(grid: Grid, initial_length: usize, rng: &mut R) -> Self {
        let snake = Snake::initial(&grid, initial_length);
        let food = place_food(&snake.occupied(), &grid, rng);
        GameState::with_snake(grid, snake, food)
    }

    pub fn with_snake(grid: Grid, snake: Snake, food: Option<Cell>) -> Self {
        GameState { grid, snake, food, score: 0, status: GameStatus::Running }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Halted;
        }

        let grow = self.food == Some(self.snake.next_head());

        match self.snake.move_step(&self.grid, grow) {
            MoveResult::Crashed(collision) => {
                debug!(?collision, head = ?self.snake.head(), "snake crashed");
                self.status = GameStatus::Over;
                TickOutcome::Crashed(collision)
            }
            MoveResult::Moved { new_head } if !grow => TickOutcome::Moved { new_head },
            MoveResult::Moved { new_head } => {
                self.score += SCORE_PER_FOOD;
                self.food = place_food(&self.snake.occupied(), &self.grid, rng);
                debug!(score = self.score, food = ?self.food, "food eaten");

                match self.food {
                    Some(food) => TickOutcome::Ate { new_head, food },
                    None => {
                        self.status = GameStatus::Over;
                        TickOutcome::Filled
                    }
                }
            }
        }
    }
}
