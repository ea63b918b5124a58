use core::fmt;

use grid_util::grid::{BoolGrid, Grid as _};
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::error::{PathError, Result};
use crate::maze;

/// Side length of the default board.
pub const DEFAULT_GRID_SIZE: usize = 64;

/// What occupies a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Open,
    Wall,
}

/// Cardinal moves in the order every query enumerates them: up, right,
/// down, left.
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// A square lattice of open and walled cells.
///
/// [Grid] keeps the raw occupancy in a [BoolGrid] ([true] meaning walled)
/// and links every pair of adjacent open cells into a [UnionFind], so
/// whether two cells can possibly be connected is answered without running
/// a search. Grids are immutable once constructed; searches borrow them
/// read-only, which also makes them safe to share across threads.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: BoolGrid,
    components: UnionFind<usize>,
    maze_history: Vec<Cell>,
}

impl Grid {
    /// Creates a `size` by `size` grid with every cell set to `fill`.
    pub fn new(size: usize, fill: CellState) -> Result<Grid> {
        if size == 0 {
            return Err(PathError::ShapeMismatch(
                "grid size must be positive".to_string(),
            ));
        }
        Ok(Grid::wrap(BoolGrid::new(size, size, fill == CellState::Wall)))
    }

    /// Builds a grid from row-major cell states, copying the input.
    ///
    /// Fails with [PathError::ShapeMismatch] unless `rows` is non-empty and
    /// every row is as long as there are rows.
    pub fn from_cells(rows: &[Vec<CellState>]) -> Result<Grid> {
        let size = rows.len();
        if size == 0 {
            return Err(PathError::ShapeMismatch("grid has no rows".to_string()));
        }
        for (row, states) in rows.iter().enumerate() {
            if states.len() != size {
                return Err(PathError::ShapeMismatch(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    states.len(),
                    size
                )));
            }
        }
        let mut cells = BoolGrid::new(size, size, false);
        for (row, states) in rows.iter().enumerate() {
            for (col, &state) in states.iter().enumerate() {
                cells.set(col, row, state == CellState::Wall);
            }
        }
        Ok(Grid::wrap(cells))
    }

    /// Carves a random perfect maze by iterative depth-first carving.
    ///
    /// The board starts fully walled; carving opens every lattice node on
    /// `start`'s step-two parity plus the corridor cells between them, so
    /// the open cells form a single tree-shaped component in which any two
    /// cells are joined by exactly one route. Passing a `seed` makes the
    /// layout and the carve history reproducible; otherwise the generator
    /// is seeded from entropy.
    pub fn generate_maze(size: usize, start: Cell, seed: Option<u64>) -> Result<Grid> {
        let mut grid = Grid::new(size, CellState::Wall)?;
        if !grid.in_bounds(start) {
            return Err(PathError::OutOfBounds(start));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        maze::carve(&mut grid, start, &mut rng);
        grid.generate_components();
        info!(
            "Carved a {}x{} maze with {} open cells",
            size,
            size,
            grid.maze_history.len()
        );
        Ok(grid)
    }

    fn wrap(cells: BoolGrid) -> Grid {
        let mut grid = Grid {
            cells,
            components: UnionFind::new(0),
            maze_history: Vec::new(),
        };
        grid.generate_components();
        grid
    }

    /// The side length of the square lattice.
    pub fn size(&self) -> usize {
        self.cells.width
    }

    pub(crate) fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.size()
            && (cell.col as usize) < self.size()
    }

    pub(crate) fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.cells.get(cell.col as usize, cell.row as usize)
    }

    fn ix(&self, cell: Cell) -> usize {
        self.cells.get_ix(cell.col as usize, cell.row as usize)
    }

    /// The state of `cell`, or [PathError::OutOfBounds] for cells outside
    /// the lattice.
    pub fn cell_state(&self, cell: Cell) -> Result<CellState> {
        if !self.in_bounds(cell) {
            return Err(PathError::OutOfBounds(cell));
        }
        if self.cells.get(cell.col as usize, cell.row as usize) {
            Ok(CellState::Wall)
        } else {
            Ok(CellState::Open)
        }
    }

    /// The open in-bounds neighbours of `cell` at offset one, in the fixed
    /// order up, right, down, left. An out-of-bounds cell has no
    /// neighbours.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        if !self.in_bounds(cell) {
            return SmallVec::new();
        }
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| cell.offset(dr, dc))
            .filter(|&neighbor| self.is_open(neighbor))
            .collect()
    }

    /// Still-walled in-bounds cells two steps away, enumerated in the same
    /// order as [neighbors](Self::neighbors). Maze carving picks its next
    /// node from these.
    pub(crate) fn carve_candidates(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| cell.offset(2 * dr, 2 * dc))
            .filter(|&candidate| self.in_bounds(candidate) && !self.is_open(candidate))
            .collect()
    }

    /// Opens `cell` and appends it to the carve history.
    pub(crate) fn carve_open(&mut self, cell: Cell) {
        self.cells.set(cell.col as usize, cell.row as usize, false);
        self.maze_history.push(cell);
    }

    /// Whether `start` and `goal` are open cells of the same connected
    /// component. Walled and out-of-bounds cells are reachable from
    /// nowhere, themselves included.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        self.is_open(start)
            && self.is_open(goal)
            && self.components.equiv(self.ix(start), self.ix(goal))
    }

    /// The order in which [generate_maze](Self::generate_maze) opened its
    /// cells, one entry per cell. Empty for grids built any other way.
    pub fn maze_history(&self) -> &[Cell] {
        &self.maze_history
    }

    /// Rebuilds the [UnionFind] by linking every pair of adjacent open
    /// cells.
    pub(crate) fn generate_components(&mut self) {
        debug!("generating connected components");
        let size = self.size();
        let mut components = UnionFind::new(size * size);
        for row in 0..size {
            for col in 0..size {
                if self.cells.get(col, row) {
                    continue;
                }
                // Right and down links cover every adjacency exactly once.
                if col + 1 < size && !self.cells.get(col + 1, row) {
                    components.union(self.cells.get_ix(col, row), self.cells.get_ix(col + 1, row));
                }
                if row + 1 < size && !self.cells.get(col, row + 1) {
                    components.union(self.cells.get_ix(col, row), self.cells.get_ix(col, row + 1));
                }
            }
        }
        self.components = components;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.size() {
            let glyphs: String = (0..self.size())
                .map(|col| if self.cells.get(col, row) { '#' } else { '.' })
                .collect();
            writeln!(f, "{}", glyphs)?;
        }
        Ok(())
    }
}
