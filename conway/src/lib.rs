//! Conway's Game of Life, one generation at a time.
//!
//! A [`Grid`] is parsed from text, stepped by a [`TickScheduler`] that
//! computes row bands concurrently, and rendered back to text.
//!
//! ```
//! use conway::{Grid, TickConfig, TickScheduler};
//!
//! let blinker = Grid::parse("___\nXXX\n___")?;
//! let scheduler = TickScheduler::new(&TickConfig { workers: 2 })?;
//! assert_eq!(scheduler.tick(blinker).to_string(), "_X_\n_X_\n_X_");
//! # Ok::<(), conway::Error>(())
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod neighborhood;
pub mod patterns;
pub mod rule;
pub mod tick;

pub use cell::{Cell, Glyphs};
pub use config::{Config, TickConfig};
pub use error::{Error, PatternError};
pub use grid::Grid;
pub use neighborhood::Neighborhood;
pub use patterns::Pattern;
pub use tick::{TickScheduler, tick_async};
