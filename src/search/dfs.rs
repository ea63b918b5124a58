use std::collections::VecDeque;

use super::{check_endpoints, FxIndexMap, FxIndexSet, SearchResult};
use crate::cell::Cell;
use crate::error::Result;
use crate::grid::Grid;

/// Depth-first search: follows one corridor as deep as it goes before
/// backtracking, so the route it discovers is rarely the shortest one.
///
/// Only visited cells are kept out of the frontier; a cell waiting there
/// can be scheduled again, and each rediscovery overwrites its parent
/// link. Whichever copy pops first marks the cell visited, and the copies
/// popping later are skipped, so the visited order stays duplicate-free.
pub fn depth_first(grid: &Grid, start: Cell, goal: Cell) -> Result<SearchResult> {
    check_endpoints(grid, start, goal)?;
    let mut frontier = VecDeque::new();
    frontier.push_back(start);
    let mut visited: FxIndexSet<Cell> = FxIndexSet::default();
    let mut parents: FxIndexMap<Cell, Cell> = FxIndexMap::default();
    let mut reached = false;
    while let Some(cell) = frontier.pop_back() {
        if !visited.insert(cell) {
            continue;
        }
        if cell == goal {
            reached = true;
            break;
        }
        for neighbor in grid.neighbors(cell) {
            if !visited.contains(&neighbor) {
                parents.insert(neighbor, cell);
                frontier.push_back(neighbor);
            }
        }
    }
    let visited: Vec<Cell> = visited.into_iter().collect();
    Ok(SearchResult::from_search(
        grid, start, goal, visited, &parents, reached,
    ))
}
