//! # gridpath
//!
//! A grid-based pathfinding engine. Square [Grid]s of open and walled
//! cells are searched with four interchangeable strategies sharing one
//! result contract: [breadth-first](breadth_first),
//! [depth-first](depth_first), [Dijkstra](dijkstra()) and [A*](astar())
//! with a pluggable [Heuristic]. [Grid::generate_maze] carves random
//! [perfect mazes](https://en.wikipedia.org/wiki/Maze_generation_algorithm)
//! over the same representation, and every grid pre-computes its
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so reachability can be answered without running a search.
//!
//! Movement is 4-directional with uniform step cost. Neighbours are
//! always enumerated up, right, down, left, and every tie in every
//! frontier breaks toward the earliest insertion, so identical inputs
//! produce identical expansion orders, routes and visit histories.

mod cell;
mod error;
mod grid;
mod heuristic;
mod maze;
mod queue;
pub mod search;

pub use cell::Cell;
pub use error::{PathError, Result};
pub use grid::{CellState, Grid, DEFAULT_GRID_SIZE};
pub use heuristic::{euclidean, manhattan, Heuristic};
pub use queue::{Cost, PriorityQueue};
pub use search::{astar, breadth_first, depth_first, dijkstra, Algorithm, SearchResult};
