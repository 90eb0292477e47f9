//! Errors reported by this crate.

use std::io;
use thiserror::Error;

/// Why a textual pattern could not become a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedLine {
        line: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed pattern: {0}")]
    MalformedPattern(#[from] PatternError),
    #[error("unable to start tick runtime: {0}")]
    Runtime(#[source] io::Error),
}
