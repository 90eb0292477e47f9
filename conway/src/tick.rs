// tick.rs - One generation step with row bands as tokio tasks

use std::panic;
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};
use tracing::{debug, trace};

use crate::cell::Cell;
use crate::config::TickConfig;
use crate::error::Error;
use crate::grid::Grid;
use crate::neighborhood::Neighborhood;
use crate::rule;

/// Owns the runtime that generation steps run on.
pub struct TickScheduler {
    runtime: Runtime,
    workers: usize,
}

impl TickScheduler {
    pub fn new(config: &TickConfig) -> Result<Self, Error> {
        let workers = config.workers.max(1);
        let runtime = Builder::new_multi_thread()
            .worker_threads(workers)
            .thread_name("conway-tick")
            .build()
            .map_err(Error::Runtime)?;
        Ok(Self { runtime, workers })
    }

    /// Computes the next generation, blocking until every band has finished.
    ///
    /// # Panics
    ///
    /// Panics when called from inside an async context; use [`tick_async`]
    /// there instead.
    pub fn tick(&self, grid: impl Into<Arc<Grid>>) -> Grid {
        self.runtime.block_on(tick_async(grid.into(), self.workers))
    }
}

/// Rows per band so that at most `tasks` bands cover `height` rows.
fn band_rows(height: usize, tasks: usize) -> usize {
    height.div_ceil(tasks.max(1))
}

/// Band coroutine: next state of `count` rows starting at `first`.
async fn process_band(grid: Arc<Grid>, first: usize, count: usize) -> (usize, Vec<Cell>) {
    let width = grid.width();
    let mut band = Vec::with_capacity(count * width);
    for y in first..first + count {
        for x in 0..width {
            band.push(rule::next_state(&Neighborhood::extract(&grid, x, y)));
        }
        tokio::task::yield_now().await;
    }
    trace!(first, count, "band done");
    (first, band)
}

/// Computes the next generation on the current tokio runtime.
///
/// Rows are split into at most `tasks` contiguous bands, one spawned task
/// each. `grid` is only read; the result is a new grid of the same size.
/// A panic in any band resumes on the caller.
pub async fn tick_async(grid: Arc<Grid>, tasks: usize) -> Grid {
    let (height, width) = (grid.height(), grid.width());
    let rows = band_rows(height, tasks);

    let handles: Vec<_> = (0..height)
        .step_by(rows)
        .map(|first| {
            let count = rows.min(height - first);
            tokio::spawn(process_band(Arc::clone(&grid), first, count))
        })
        .collect();
    debug!(height, width, bands = handles.len(), "tick dispatched");

    let mut next = Grid::empty(height, width);
    for handle in handles {
        match handle.await {
            Ok((first, band)) => {
                next.rows_mut(first, band.len() / width).copy_from_slice(&band);
            }
            Err(e) if e.is_panic() => panic::resume_unwind(e.into_panic()),
            Err(e) => panic!("tick band did not finish: {e}"),
        }
    }

    debug!(population = next.population(), "generation ready");
    next
}
