use core::fmt;

/// A cell position on the grid as `(row, col)`. Rows grow downwards and columns to the right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Sum of the absolute row and column differences.
    pub fn manhattan_distance(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The orthogonal neighbours in the order up, down, left, right. Neighbours that would
    /// have a negative index are skipped, upper bounds are left to the grid.
    pub fn neumann_neighborhood(&self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = *self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            Some(Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            Some(Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Whether `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
