use log::{info, warn};

use crate::astar::{astar, Stop};
use crate::coord::Coord;
use crate::error::SearchError;
use crate::grid::{Cell, Grid};
use crate::heuristic::{Heuristic, Manhattan};

/// Every orthogonal move costs the same.
pub const STEP_COST: usize = 1;

/// Number of steps taken along a path, which is its cost on a uniform grid.
pub fn path_cost(path: &[Coord]) -> usize {
    path.len().saturating_sub(1) * STEP_COST
}

/// Computes a shortest path from `start` to `goal` with a default [AstarSolver].
pub fn find_path(grid: &Grid, start: Coord, goal: Coord) -> Result<Option<Vec<Coord>>, SearchError> {
    AstarSolver::new().find_path(grid, start, goal)
}

/// A* search over a [Grid] with orthogonal unit-cost moves.
///
/// The solver holds configuration only. All search state is created per call, so a solver
/// can be shared freely and repeated calls on the same grid return identical paths.
#[derive(Clone, Debug)]
pub struct AstarSolver<H = Manhattan> {
    pub heuristic: H,
    /// Answer disconnected endpoints from the grid's components instead of exhausting the
    /// open set.
    pub check_components: bool,
    /// Upper bound on the number of expanded nodes, [None] for unbounded search.
    pub max_expansions: Option<usize>,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::with_heuristic(Manhattan)
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl<H: Heuristic> AstarSolver<H> {
    pub fn with_heuristic(heuristic: H) -> AstarSolver<H> {
        AstarSolver {
            heuristic,
            check_components: true,
            max_expansions: None,
        }
    }

    /// Locates the unique [Cell::Start] and [Cell::Goal] markers and paths between them.
    pub fn solve(&self, grid: &Grid) -> Result<Option<Vec<Coord>>, SearchError> {
        let endpoints = grid
            .locate(Cell::Start)
            .and_then(|start| Ok((start, grid.locate(Cell::Goal)?)));
        match endpoints {
            Ok((start, goal)) => self.find_path(grid, start, goal),
            Err(e) => {
                warn!("Invalid grid: {}", e);
                Err(e)
            }
        }
    }

    /// Computes a shortest path from `start` to `goal`, both included.
    ///
    /// Returns `Ok(None)` if no path exists. Endpoints outside the grid or on a wall are
    /// rejected with a [SearchError].
    pub fn find_path(
        &self,
        grid: &Grid,
        start: Coord,
        goal: Coord,
    ) -> Result<Option<Vec<Coord>>, SearchError> {
        self.find_path_with_cost(grid, start, goal)
            .map(|found| found.map(|(path, _)| path))
    }

    /// Like [find_path](Self::find_path) but also returns the cost of the path.
    pub fn find_path_with_cost(
        &self,
        grid: &Grid,
        start: Coord,
        goal: Coord,
    ) -> Result<Option<(Vec<Coord>, usize)>, SearchError> {
        check_endpoint(grid, start)?;
        check_endpoint(grid, goal)?;
        if self.check_components && !grid.reachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        let result = astar(
            &start,
            |node| grid.neighbours(*node).map(|n| (n, STEP_COST)),
            |node| self.heuristic.estimate(node, &goal),
            |node| *node == goal,
            self.max_expansions.unwrap_or(usize::MAX),
        );
        match result {
            Ok(found) => Ok(Some(found)),
            Err(Stop::Exhausted) => {
                if self.check_components {
                    warn!("Reachable goal could not be pathed to, are the components correct?");
                } else {
                    info!("No path from {} to {}", start, goal);
                }
                Ok(None)
            }
            Err(Stop::Limit(limit)) => Err(SearchError::ExpansionLimit { limit }),
        }
    }
}

fn check_endpoint(grid: &Grid, coord: Coord) -> Result<(), SearchError> {
    if !grid.in_bounds(coord) {
        Err(SearchError::OutOfBounds(coord))
    } else if !grid.is_passable(coord) {
        Err(SearchError::Blocked(coord))
    } else {
        Ok(())
    }
}
