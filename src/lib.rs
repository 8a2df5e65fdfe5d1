//! Grid-based snake: the game state machine plus the terminal adapters that
//! drive it.

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod snake;
pub mod term;
pub mod timer;
pub mod ui;

/// A grid coordinate. Signed so a head that steps past a wall is still representable.
pub type Cell = (i32, i32);

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);
