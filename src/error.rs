use thiserror::Error;

use crate::coord::Coord;
use crate::grid::Cell;

/// Errors raised while building a [Grid](crate::Grid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
}

/// Invalid input to a search. An unreachable goal is not an error, see
/// [AstarSolver::find_path](crate::AstarSolver::find_path).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no {0:?} marker in grid")]
    MissingMarker(Cell),

    #[error("more than one {0:?} marker in grid")]
    DuplicateMarker(Cell),

    #[error("{0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("{0} is a wall")]
    Blocked(Coord),

    #[error("search stopped after expanding {limit} nodes")]
    ExpansionLimit { limit: usize },
}
