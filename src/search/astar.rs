use fxhash::FxHashMap;
use num_traits::{One, Zero};
use ordered_float::OrderedFloat;

use super::{check_endpoints, FxIndexMap, SearchResult};
use crate::cell::Cell;
use crate::error::Result;
use crate::grid::Grid;
use crate::heuristic::Heuristic;
use crate::queue::{Cost, PriorityQueue};

/// A* search: orders the frontier by distance travelled plus the
/// heuristic estimate down to `goal`.
///
/// Relaxation works exactly as in [Dijkstra](super::dijkstra): a
/// neighbour is re-queued only when the new travelled distance is
/// strictly smaller than anything recorded for it, so an equally short
/// rediscovery changes neither parents nor the visited order. Both
/// bundled heuristics are admissible, which makes the first arrival at
/// the goal a shortest route.
pub fn astar(grid: &Grid, start: Cell, goal: Cell, heuristic: Heuristic) -> Result<SearchResult> {
    check_endpoints(grid, start, goal)?;
    let h = heuristic.as_fn();
    let mut queue = PriorityQueue::new();
    let mut g: FxHashMap<Cell, Cost> = FxHashMap::default();
    g.insert(start, Cost::zero());
    queue.push_or_update(start, OrderedFloat(h(start, goal)));
    let mut parents: FxIndexMap<Cell, Cell> = FxIndexMap::default();
    let mut visited: Vec<Cell> = Vec::new();
    let mut reached = false;
    while !queue.is_empty() {
        let cell = queue.pop_min()?;
        visited.push(cell);
        if cell == goal {
            reached = true;
            break;
        }
        let tentative = g[&cell] + Cost::one();
        for neighbor in grid.neighbors(cell) {
            if g.get(&neighbor).is_some_and(|&known| known <= tentative) {
                continue;
            }
            g.insert(neighbor, tentative);
            parents.insert(neighbor, cell);
            queue.push_or_update(neighbor, tentative + OrderedFloat(h(neighbor, goal)));
        }
    }
    Ok(SearchResult::from_search(
        grid, start, goal, visited, &parents, reached,
    ))
}
