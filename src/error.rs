use thiserror::Error;

use crate::cell::Cell;

/// Errors reported by grid construction, queue operations and searches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The input does not describe a non-empty square grid.
    #[error("grid shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A cell lies outside the grid.
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Cell),

    /// A heuristic name that is neither `manhattan` nor `euclidean`.
    #[error("invalid heuristic {0:?}, expected \"manhattan\" or \"euclidean\"")]
    InvalidHeuristic(String),

    /// `pop_min` was called on a queue with no live entries.
    #[error("pop_min on an empty priority queue")]
    EmptyQueue,

    /// A route was requested to a goal the search never reached.
    #[error("no route found to {goal}")]
    NoRouteFound { goal: Cell },
}

pub type Result<T> = std::result::Result<T, PathError>;
