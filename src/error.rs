//! Error types for the solver and the input helpers.

use crate::tree::NodeId;
use thiserror::Error;

/// Fatal outcomes of a search run. None of them is retried.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("fringe exhausted before the goal was reached")]
    FringeExhausted,

    #[error("node {0} points to NULL")]
    MissingNode(NodeId),

    #[error("failed to write search output: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parsing a board written as text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 9 tiles, found {0}")]
    WrongTileCount(usize),

    #[error("invalid tile character '{0}'")]
    InvalidTile(char),

    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),
}
