use core::num::ParseIntError;
use thiserror::Error;

/// A broken tree invariant, reported by [`AvlTree::validate`](crate::AvlTree::validate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("binary search order violated")]
    Unordered,
    #[error("unbalanced node: left height {left}, right height {right}")]
    Unbalanced { left: i32, right: i32 },
    #[error("stale cached height {cached}, expected {expected}")]
    StaleHeight { cached: i32, expected: i32 },
    #[error("counted {counted} nodes but the tree records {recorded}")]
    CountMismatch { counted: usize, recorded: usize },
}

/// Rejected input line of the command front-end.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("missing integer argument")]
    MissingValue,
    #[error("invalid integer argument: {0}")]
    InvalidValue(#[from] ParseIntError),
}
