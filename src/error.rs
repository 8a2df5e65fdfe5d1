//! Startup errors

use thiserror::Error;

/// Reasons a game configuration is rejected before anything is drawn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    ZeroCellSize,

    #[error("canvas size must be positive")]
    ZeroCanvasSize,

    #[error("tick interval must be positive")]
    ZeroSpeed,

    #[error("canvas size {canvas} is not divisible by cell size {cell}")]
    UnevenCanvas { canvas: u32, cell: u32 },

    #[error("grid of {cells}x{cells} cells exceeds the maximum side of {max}")]
    GridTooLarge { cells: u32, max: u32 },

    #[error("initial snake length must be at least {min}, got {length}")]
    SnakeTooShort { length: usize, min: usize },

    #[error("initial snake of length {length} does not fit a row of width {width}")]
    SnakeTooWide { length: usize, width: i32 },

    #[error("initial snake of length {length} leaves no free cell on a {width}x{height} grid")]
    SnakeFillsGrid {
        length: usize,
        width: i32,
        height: i32,
    },
}
