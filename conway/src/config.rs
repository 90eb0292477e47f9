//! Runtime configuration
//!
//! Read from `CONWAY_*` environment variables; anything missing or
//! unparsable keeps its default.

use std::env;
use std::path::PathBuf;
use std::thread;

use tracing::Level;

pub const DEFAULT_INPUT: &str = "input.txt";

/// How a tick spreads its work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickConfig {
    /// Runtime worker threads, also the most row bands one tick will spawn.
    pub workers: usize,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Pattern file read by the runner
    pub input: PathBuf,
    pub tick: TickConfig,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            tick: TickConfig::default(),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("CONWAY_INPUT").filter(|p| !p.trim().is_empty()) {
            config.input = PathBuf::from(path);
        }

        if let Some(workers) = lookup("CONWAY_WORKERS")
            && let Ok(n) = workers.trim().parse::<usize>()
            && n > 0
        {
            config.tick.workers = n;
        }

        if let Some(level) = lookup("CONWAY_LOG")
            && let Ok(level) = level.trim().parse()
        {
            config.log_level = level;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config.input, PathBuf::from("input.txt"));
        assert!(config.tick.workers >= 1);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("CONWAY_INPUT", "glider.txt"),
            ("CONWAY_WORKERS", " 3 "),
            ("CONWAY_LOG", "debug"),
        ]);
        assert_eq!(config.input, PathBuf::from("glider.txt"));
        assert_eq!(config.tick.workers, 3);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = config(&[
            ("CONWAY_INPUT", "  "),
            ("CONWAY_WORKERS", "0"),
            ("CONWAY_LOG", "loud"),
        ]);
        assert_eq!(config.input, PathBuf::from("input.txt"));
        assert_eq!(config.tick, TickConfig::default());
        assert_eq!(config.log_level, Level::INFO);

        assert_eq!(config_workers("many"), TickConfig::default().workers);
    }

    fn config_workers(value: &str) -> usize {
        config(&[("CONWAY_WORKERS", value)]).tick.workers
    }
}
