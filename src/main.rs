use std::{fs::File, path::{Path, PathBuf}, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::app::App;
use grid_snake::config::{Config, DEFAULT_CANVAS_SIZE, DEFAULT_GAME_SPEED_MS, DEFAULT_GRID_SIZE, MIN_SNAKE_LENGTH};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Snake on a fixed grid, played in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side of one grid cell, in canvas pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u32,
    /// Milliseconds between snake steps.
    #[arg(
        long,
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_GAME_SPEED_MS,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    game_speed: u64,
    /// Side of the square canvas in pixels. Must be a multiple of the cell size.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_CANVAS_SIZE)]
    canvas_size: u32,
    /// Number of cells the snake starts with.
    #[arg(long, value_name = "CELLS", default_value_t = MIN_SNAKE_LENGTH)]
    initial_length: usize,
    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
    /// Write logs to this file (filtered by RUST_LOG, default "info").
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = Config {
        grid_size: args.grid_size,
        game_speed: args.game_speed,
        canvas_size: args.canvas_size,
        initial_length: args.initial_length,
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    App::new(config, rng)?.run()
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
