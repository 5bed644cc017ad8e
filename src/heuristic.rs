use crate::coord::Coord;

/// Estimates the remaining cost between two cells.
///
/// Implementations must be admissible (never overestimate the true remaining cost) and
/// consistent (`h(a) <= 1 + h(b)` for neighbours `a` and `b`), otherwise the paths returned
/// by [AstarSolver](crate::AstarSolver) are no longer guaranteed to be shortest.
pub trait Heuristic {
    fn estimate(&self, from: &Coord, to: &Coord) -> usize;
}

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), exact on an open
/// 4-connected grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, from: &Coord, to: &Coord) -> usize {
        from.manhattan_distance(to)
    }
}

/// Always zero, which turns the search into Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHeuristic;

impl Heuristic for NoHeuristic {
    fn estimate(&self, _: &Coord, _: &Coord) -> usize {
        0
    }
}
