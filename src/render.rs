use core::fmt;

use fxhash::FxHashSet;
use itertools::Itertools;

use crate::coord::Coord;
use crate::grid::{Cell, Grid};

/// Symbol for free cells that lie on the path.
pub const PATH_SYMBOL: char = '*';

/// Displays a grid with a path drawn over it. Only [Cell::Free] cells on the path are
/// marked, so the start and goal keep their own symbols. The grid is not modified.
pub struct PathOverlay<'a> {
    grid: &'a Grid,
    path: FxHashSet<Coord>,
}

impl<'a> PathOverlay<'a> {
    pub fn new(grid: &'a Grid, path: &[Coord]) -> PathOverlay<'a> {
        PathOverlay {
            grid,
            path: path.iter().copied().collect(),
        }
    }

    fn symbol(&self, coord: Coord, cell: Cell) -> char {
        if cell == Cell::Free && self.path.contains(&coord) {
            PATH_SYMBOL
        } else {
            cell.symbol()
        }
    }
}

impl fmt::Display for PathOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (_, row) in &self.grid.iter().chunk_by(|(coord, _)| coord.row) {
            let line = row.map(|(coord, cell)| self.symbol(coord, cell)).join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
