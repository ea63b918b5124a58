//! Randomized depth-first maze carving.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::cell::Cell;
use crate::grid::Grid;

/// Carves a perfect maze into the all-wall `grid`, starting at `start`.
///
/// An explicit stack of `(cell, parent)` links drives the depth-first
/// walk over the step-two lattice: popping a still-walled cell opens it,
/// then opens the corridor cell halfway back to the parent it was stacked
/// from, recording both in the grid's carve history in that order. A cell
/// stacked twice is skipped on its second pop, which keeps the carved
/// corridors cycle-free. The still-walled step-two neighbours are shuffled
/// before stacking, so `rng` alone decides the layout.
pub(crate) fn carve(grid: &mut Grid, start: Cell, rng: &mut StdRng) {
    let mut stack: Vec<(Cell, Option<Cell>)> = vec![(start, None)];
    while let Some((cell, parent)) = stack.pop() {
        if grid.is_open(cell) {
            continue;
        }
        grid.carve_open(cell);
        if let Some(parent) = parent {
            grid.carve_open(cell.midpoint(parent));
        }
        let mut candidates = grid.carve_candidates(cell);
        candidates.shuffle(rng);
        for next in candidates {
            stack.push((next, Some(cell)));
        }
    }
}
