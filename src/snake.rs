use std::collections::{HashSet, VecDeque};

use crate::grid::Grid;
use crate::Cell;
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// What a wall or the snake itself did to the head.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell },
    Crashed(Collision)
}

/// The cell one step away from `current`. Bounds are not checked here.
pub fn advance_head(current: Cell, direction: Direction) -> Cell {
    let (dx, dy) = direction.delta();
    (current.0 + dx, current.1 + dy)
}

pub fn is_occupied<'a>(cells: impl IntoIterator<Item = &'a Cell>, cell: Cell) -> bool {
    cells.into_iter().any(|c| *c == cell)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    // Head first
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snake {
    /// A straight snake of `size` cells whose tail trails behind `head`.
    ///
    /// Panics if `size` is zero.
    pub fn new(head: Cell, size: usize, direction: Direction) -> Self {
        assert!(size > 0, "a snake needs at least one cell");
        let back = direction.opposite();
        let body = std::iter::successors(Some(head), |c| Some(advance_head(*c, back)))
            .take(size)
            .collect();
        Snake { body, direction }
    }

    /// The starting layout: a horizontal snake facing right on the middle row,
    /// with its tail four cells in from the left wall when there is room.
    pub fn initial(grid: &Grid, size: usize) -> Self {
        let tail_x = 4.min(grid.width() - size as i32).max(0);
        let head = (tail_x + size as i32 - 1, grid.height() / 2);
        Snake::new(head, size, Right)
    }

    /// Head first. Panics if `cells` is empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one cell");
        Snake { body, direction }
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    pub fn next_head(&self) -> Cell {
        advance_head(self.head(), self.direction)
    }

    /// Advances one cell. When `grow` is false the tail vacates during this
    /// same step, so moving into it is not a collision.
    pub fn move_step(&mut self, grid: &Grid, grow: bool) -> MoveResult {
        let new_head = self.next_head();

        if !grid.contains(new_head) {
            return Crashed(Collision::Wall);
        }

        let staying = if grow { self.body.len() } else { self.body.len() - 1 };
        if is_occupied(self.body.iter().take(staying), new_head) {
            return Crashed(Collision::Body);
        }

        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }

        Moved { new_head }
    }

    pub fn set_direction(&mut self, new_direction: Direction) {
        if !new_direction.is_opposite(self.direction) {
            self.direction = new_direction;
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}
