use std::collections::VecDeque;

use fxhash::FxHashSet;

use super::{check_endpoints, FxIndexMap, SearchResult};
use crate::cell::Cell;
use crate::error::Result;
use crate::grid::Grid;

/// Breadth-first search: expands cells in ring order around `start`, so
/// the first route that reaches `goal` is among the shortest.
///
/// A cell is scheduled at most once; a neighbour already expanded or
/// already waiting in the frontier is never queued again.
pub fn breadth_first(grid: &Grid, start: Cell, goal: Cell) -> Result<SearchResult> {
    check_endpoints(grid, start, goal)?;
    let mut frontier = VecDeque::new();
    frontier.push_back(start);
    let mut discovered = FxHashSet::default();
    discovered.insert(start);
    let mut parents: FxIndexMap<Cell, Cell> = FxIndexMap::default();
    let mut visited: Vec<Cell> = Vec::new();
    let mut reached = false;
    while let Some(cell) = frontier.pop_front() {
        visited.push(cell);
        if cell == goal {
            reached = true;
            break;
        }
        for neighbor in grid.neighbors(cell) {
            if discovered.insert(neighbor) {
                parents.insert(neighbor, cell);
                frontier.push_back(neighbor);
            }
        }
    }
    Ok(SearchResult::from_search(
        grid, start, goal, visited, &parents, reached,
    ))
}
