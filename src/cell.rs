use core::fmt;

/// A `(row, column)` position on a square grid.
///
/// Rows grow downward and columns grow rightward, so `(0, 0)` is the
/// top-left corner. The derived ordering is lexicographic on `(row, col)`,
/// which gives cells a stable row-major total order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// The cell at `(row + dr, col + dc)`, which may lie outside any grid.
    pub(crate) fn offset(self, dr: i32, dc: i32) -> Cell {
        Cell::new(self.row + dr, self.col + dc)
    }

    /// The cell halfway between `self` and `other`. Only meaningful when
    /// both coordinate deltas are even, as they are for the step-two moves
    /// of maze carving.
    pub(crate) fn midpoint(self, other: Cell) -> Cell {
        Cell::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
