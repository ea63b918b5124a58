use fxhash::FxHashMap;
use num_traits::{Float, One, Zero};

use super::{check_endpoints, FxIndexMap, SearchResult};
use crate::cell::Cell;
use crate::error::Result;
use crate::grid::Grid;
use crate::queue::{Cost, PriorityQueue};

/// Dijkstra's algorithm with uniform step cost.
///
/// Every cell is seeded into the queue at infinite distance in row-major
/// order and the start is then re-queued at zero, so together with the
/// queue's insertion-order tie-break the expansion order is fully
/// deterministic. A neighbour is relaxed only while it still sits in the
/// queue and only when the new distance is strictly smaller. Expansion
/// stops at the first cell whose distance is still infinite; every cell
/// beyond it is unreachable.
pub fn dijkstra(grid: &Grid, start: Cell, goal: Cell) -> Result<SearchResult> {
    check_endpoints(grid, start, goal)?;
    let mut queue = PriorityQueue::new();
    let mut dist: FxHashMap<Cell, Cost> = FxHashMap::default();
    for row in 0..grid.size() as i32 {
        for col in 0..grid.size() as i32 {
            let cell = Cell::new(row, col);
            dist.insert(cell, Cost::infinity());
            queue.push_or_update(cell, Cost::infinity());
        }
    }
    dist.insert(start, Cost::zero());
    queue.push_or_update(start, Cost::zero());
    let mut parents: FxIndexMap<Cell, Cell> = FxIndexMap::default();
    let mut visited: Vec<Cell> = Vec::new();
    let mut reached = false;
    while !queue.is_empty() {
        let cell = queue.pop_min()?;
        if dist[&cell] == Cost::infinity() {
            // Only cells the start cannot reach remain.
            break;
        }
        visited.push(cell);
        if cell == goal {
            reached = true;
            break;
        }
        let next = dist[&cell] + Cost::one();
        for neighbor in grid.neighbors(cell) {
            if queue.contains(&neighbor) && next < dist[&neighbor] {
                dist.insert(neighbor, next);
                parents.insert(neighbor, cell);
                queue.push_or_update(neighbor, next);
            }
        }
    }
    Ok(SearchResult::from_search(
        grid, start, goal, visited, &parents, reached,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathError;
    use crate::grid::CellState;

    fn grid_from(rows: &[&str]) -> Grid {
        let states: Vec<Vec<CellState>> = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|glyph| {
                        if glyph == '#' {
                            CellState::Wall
                        } else {
                            CellState::Open
                        }
                    })
                    .collect()
            })
            .collect();
        Grid::from_cells(&states).unwrap()
    }

    #[test]
    fn routes_around_walls() {
        let grid = grid_from(&[
            ".#.", //
            ".#.",
            "...",
        ]);
        let result = dijkstra(&grid, Cell::new(0, 0), Cell::new(0, 2)).unwrap();
        assert_eq!(
            result.path(),
            Some(
                &[
                    Cell::new(0, 0),
                    Cell::new(1, 0),
                    Cell::new(2, 0),
                    Cell::new(2, 1),
                    Cell::new(2, 2),
                    Cell::new(1, 2),
                    Cell::new(0, 2),
                ][..]
            )
        );
    }

    #[test]
    fn first_relaxation_wins_equal_cost_routes() {
        let grid = Grid::new(2, CellState::Open).unwrap();
        let result = dijkstra(&grid, Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        // The right neighbour relaxes (1, 1) first and an equally short
        // rediscovery through (1, 0) must not replace its parent.
        assert_eq!(
            result.path(),
            Some(&[Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)][..])
        );
    }

    #[test]
    fn expansion_order_matches_seeded_ring() {
        let grid = Grid::new(3, CellState::Open).unwrap();
        let result = dijkstra(&grid, Cell::new(1, 1), Cell::new(2, 2)).unwrap();
        assert_eq!(
            &result.visited()[..5],
            &[
                Cell::new(1, 1),
                Cell::new(0, 1),
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(1, 0),
            ]
        );
    }

    #[test]
    fn unreachable_goal_visits_the_whole_component() {
        let grid = grid_from(&[
            ".#.", //
            ".#.",
            ".#.",
        ]);
        let goal = Cell::new(0, 2);
        let result = dijkstra(&grid, Cell::new(0, 0), goal).unwrap();
        assert_eq!(
            result.visited(),
            &[Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]
        );
        assert_eq!(result.require_path(), Err(PathError::NoRouteFound { goal }));
    }

    #[test]
    fn start_equal_to_goal_is_trivial() {
        let grid = Grid::new(3, CellState::Open).unwrap();
        let start = Cell::new(0, 2);
        let result = dijkstra(&grid, start, start).unwrap();
        assert_eq!(result.path(), Some(&[start][..]));
        assert_eq!(result.visited(), &[start]);
    }

    #[test]
    fn rejects_endpoints_off_the_grid() {
        let grid = Grid::new(3, CellState::Open).unwrap();
        let outside = Cell::new(0, 5);
        assert_eq!(
            dijkstra(&grid, outside, Cell::new(0, 0)).unwrap_err(),
            PathError::OutOfBounds(outside)
        );
    }
}
