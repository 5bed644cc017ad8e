//! # grid_astar
//!
//! Shortest orthogonal paths between two marked cells of an obstacle grid, computed with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) and a
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) heuristic. Moves go
//! up, down, left or right at unit cost. Connected components are computed when a [Grid]
//! is built, so a disconnected goal is answered without flood-filling the grid.
//!
//! ```
//! use grid_astar::{AstarSolver, Grid, PathOverlay};
//!
//! let grid: Grid = "S 0 1\n1 0 0\n1 1 E".parse().unwrap();
//! let path = AstarSolver::new().solve(&grid).unwrap().unwrap();
//! assert_eq!(path.len(), 5);
//! print!("{}", PathOverlay::new(&grid, &path));
//! ```
mod astar;
pub mod coord;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod render;
pub mod solver;

pub use coord::Coord;
pub use error::{GridError, SearchError};
pub use grid::{Cell, Grid};
pub use heuristic::{Heuristic, Manhattan, NoHeuristic};
pub use render::PathOverlay;
pub use solver::{find_path, path_cost, AstarSolver};
