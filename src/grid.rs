use core::fmt;
use std::str::FromStr;

use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::coord::Coord;
use crate::error::{GridError, SearchError};

/// Marker stored in a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Start,
    Goal,
    Free,
    Wall,
}

impl Cell {
    /// The text symbol used when reading and printing grids.
    pub fn symbol(self) -> char {
        match self {
            Cell::Start => 'S',
            Cell::Goal => 'E',
            Cell::Free => '0',
            Cell::Wall => '1',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            'S' => Some(Cell::Start),
            'E' => Some(Cell::Goal),
            '0' => Some(Cell::Free),
            '1' => Some(Cell::Wall),
            _ => None,
        }
    }

    pub fn is_passable(self) -> bool {
        self != Cell::Wall
    }
}

/// An immutable rectangular matrix of [Cell] markers stored in row-major order.
///
/// Connected components of passable cells are computed once on construction using a
/// [UnionFind] structure, so that [reachable](Grid::reachable) can tell a disconnected
/// goal apart without running a search.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    components: UnionFind<usize>,
}

impl Grid {
    /// Builds a grid from rows of cells. All rows must have the same, non-zero length.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Grid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::Jagged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        let mut grid = Grid {
            cells,
            width,
            height,
            components: UnionFind::new(0),
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn ix(&self, coord: &Coord) -> usize {
        coord.row * self.width + coord.col
    }

    fn coord(&self, ix: usize) -> Coord {
        Coord::new(ix / self.width, ix % self.width)
    }

    /// The cell at `coord`, or [None] if it lies outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.in_bounds(coord).then(|| self.cells[self.ix(&coord)])
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    pub fn is_passable(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::is_passable)
    }

    /// Passable orthogonal neighbours of `coord`, in the order up, down, left, right.
    pub fn neighbours(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        coord
            .neumann_neighborhood()
            .filter(move |n| self.is_passable(*n))
    }

    /// Row-major iterator over all coordinates and their cells.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(ix, cell)| (self.coord(ix), *cell))
    }

    /// The first coordinate bearing `marker` when scanning row by row.
    pub fn find_first(&self, marker: Cell) -> Option<Coord> {
        self.iter()
            .find(|(_, cell)| *cell == marker)
            .map(|(coord, _)| coord)
    }

    /// The unique coordinate bearing `marker`. Grids without the marker, or with more than
    /// one occurrence of it, are malformed.
    pub fn locate(&self, marker: Cell) -> Result<Coord, SearchError> {
        let mut found = self.iter().filter(|(_, cell)| *cell == marker);
        match (found.next(), found.next()) {
            (Some((coord, _)), None) => Ok(coord),
            (None, _) => Err(SearchError::MissingMarker(marker)),
            (Some(_), Some(_)) => Err(SearchError::DuplicateMarker(marker)),
        }
    }

    /// Links every passable cell to its passable right and lower neighbour.
    fn generate_components(&mut self) {
        let (w, h) = (self.width, self.height);
        let mut components = UnionFind::new(w * h);
        for (row, col) in (0..h).cartesian_product(0..w) {
            let point = Coord::new(row, col);
            if !self.is_passable(point) {
                continue;
            }
            let parent_ix = self.ix(&point);
            for n in [Coord::new(row + 1, col), Coord::new(row, col + 1)] {
                if self.is_passable(n) {
                    components.union(parent_ix, self.ix(&n));
                }
            }
        }
        self.components = components;
    }

    /// Retrieves the component id a given [Coord] belongs to.
    pub fn get_component(&self, coord: &Coord) -> Option<usize> {
        self.in_bounds(*coord)
            .then(|| self.components.find(self.ix(coord)))
    }

    /// Checks if start and goal are passable and on the same component.
    pub fn reachable(&self, start: &Coord, goal: &Coord) -> bool {
        if !self.is_passable(*start) || !self.is_passable(*goal) {
            return false;
        }
        if self.components.equiv(self.ix(start), self.ix(goal)) {
            true
        } else {
            info!("{} and {} are on different components", start, goal);
            false
        }
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses one row per line. Whitespace between symbols and blank lines are ignored.
    fn from_str(s: &str) -> Result<Grid, GridError> {
        let rows = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|symbols| !symbols.is_empty())
            .enumerate()
            .map(|(row, symbols)| {
                symbols
                    .into_iter()
                    .enumerate()
                    .map(|(col, symbol)| {
                        Cell::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                            row,
                            col,
                            symbol,
                        })
                    })
                    .collect::<Result<Vec<Cell>, GridError>>()
            })
            .collect::<Result<Vec<_>, GridError>>()?;
        Grid::new(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            writeln!(f, "{}", row.iter().map(|c| c.symbol()).join(" "))?;
        }
        Ok(())
    }
}
