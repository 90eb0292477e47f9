// main.rs - Reads a pattern file, runs one generation and prints it

use std::fs;
use std::process::ExitCode;

use conway::{Config, Grid, TickScheduler};
use tracing::{error, info};

const EXIT_OK: u8 = 0;
const EXIT_UNREADABLE: u8 = 1;
const EXIT_MALFORMED: u8 = 2;
const EXIT_RUNTIME: u8 = 3;

fn main() -> ExitCode {
    let config = Config::from_env();

    // Logs go to stderr; stdout carries only the grid
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(next) => {
            println!("{next}");
            ExitCode::from(EXIT_OK)
        }
        Err(status) => ExitCode::from(status),
    }
}

/// Next generation of the configured input file, or the exit status to fail with.
fn run(config: &Config) -> Result<Grid, u8> {
    let text = fs::read_to_string(&config.input).map_err(|e| {
        error!("cannot read {}: {e}", config.input.display());
        EXIT_UNREADABLE
    })?;

    let grid = Grid::parse(&text).map_err(|e| {
        error!("{}: {e}", config.input.display());
        EXIT_MALFORMED
    })?;
    info!(
        height = grid.height(),
        width = grid.width(),
        population = grid.population(),
        "loaded {}",
        config.input.display()
    );

    let scheduler = TickScheduler::new(&config.tick).map_err(|e| {
        error!("{e}");
        EXIT_RUNTIME
    })?;

    Ok(scheduler.tick(grid))
}
