//! The four search strategies and their shared result contract.
//!
//! Every strategy walks the same skeleton: a frontier of scheduled cells,
//! a visited list in expansion order, and a parent map the route is read
//! back from. They differ only in how the frontier hands out the next
//! cell, so results are interchangeable and directly comparable.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;

pub use astar::astar;
pub use bfs::breadth_first;
pub use dfs::depth_first;
pub use dijkstra::dijkstra;

use core::fmt;

use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};

use crate::cell::Cell;
use crate::error::{PathError, Result};
use crate::grid::Grid;
use crate::heuristic::Heuristic;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub(crate) type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Both endpoints must lie on the grid before any search begins.
fn check_endpoints(grid: &Grid, start: Cell, goal: Cell) -> Result<()> {
    grid.cell_state(start)?;
    grid.cell_state(goal)?;
    Ok(())
}

/// Walks the parent links backward from `goal` and reverses the result.
///
/// A search that starts on its goal yields just `[start]`. When the
/// parent map never assigned `goal` a parent the goal was not reached,
/// and reconstruction fails with [PathError::NoRouteFound].
fn reconstruct_path(parents: &FxIndexMap<Cell, Cell>, start: Cell, goal: Cell) -> Result<Vec<Cell>> {
    if goal == start {
        return Ok(vec![start]);
    }
    if !parents.contains_key(&goal) {
        return Err(PathError::NoRouteFound { goal });
    }
    let mut path: Vec<Cell> = itertools::unfold(Some(goal), |state| {
        let cell = (*state)?;
        *state = parents.get(&cell).copied();
        Some(cell)
    })
    .collect();
    path.reverse();
    Ok(path)
}

/// The outcome of one search run: the discovered route, the order in
/// which cells were expanded, and a snapshot of the searched grid.
#[derive(Clone, Debug)]
pub struct SearchResult {
    path: Option<Vec<Cell>>,
    visited: Vec<Cell>,
    grid: Grid,
    start: Cell,
    goal: Cell,
}

impl SearchResult {
    /// Assembles the result every strategy returns: reconstructs the route
    /// if the goal was expanded and logs how the run went.
    pub(crate) fn from_search(
        grid: &Grid,
        start: Cell,
        goal: Cell,
        visited: Vec<Cell>,
        parents: &FxIndexMap<Cell, Cell>,
        reached: bool,
    ) -> SearchResult {
        let path = if reached {
            reconstruct_path(parents, start, goal).ok()
        } else {
            if grid.reachable(start, goal) {
                warn!("Reachable goal {} could not be pathed to", goal);
            }
            None
        };
        match &path {
            Some(path) => debug!(
                "reached {} over {} cells after expanding {}",
                goal,
                path.len(),
                visited.len()
            ),
            None => debug!(
                "exhausted {} cells without reaching {}",
                visited.len(),
                goal
            ),
        }
        SearchResult {
            path,
            visited,
            grid: grid.clone(),
            start,
            goal,
        }
    }

    /// The route from start to goal, both inclusive, or [None] when the
    /// goal was never reached.
    pub fn path(&self) -> Option<&[Cell]> {
        self.path.as_deref()
    }

    /// Like [path](Self::path), but failing with [PathError::NoRouteFound]
    /// when there is no route.
    pub fn require_path(&self) -> Result<&[Cell]> {
        self.path().ok_or(PathError::NoRouteFound { goal: self.goal })
    }

    /// Every expanded cell in expansion order. A cell never appears twice.
    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    /// The grid the search ran on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }
}

/// Tagged selector over the four search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    Dijkstra,
    AStar(Heuristic),
}

impl Algorithm {
    /// Every selectable strategy, with the two bundled A* heuristics
    /// listed separately.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar(Heuristic::Manhattan),
        Algorithm::AStar(Heuristic::Euclidean),
    ];

    /// Runs the selected strategy over `grid`.
    pub fn run(self, grid: &Grid, start: Cell, goal: Cell) -> Result<SearchResult> {
        match self {
            Algorithm::BreadthFirst => breadth_first(grid, start, goal),
            Algorithm::DepthFirst => depth_first(grid, start, goal),
            Algorithm::Dijkstra => dijkstra(grid, start, goal),
            Algorithm::AStar(heuristic) => astar(grid, start, goal, heuristic),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::BreadthFirst => write!(f, "Breadth-First Search"),
            Algorithm::DepthFirst => write!(f, "Depth-First Search"),
            Algorithm::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Algorithm::AStar(heuristic) => write!(f, "A* ({})", heuristic),
        }
    }
}
