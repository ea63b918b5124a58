//! Distance estimates used to steer A*.

use core::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::PathError;

/// The Manhattan distance `|Δrow| + |Δcol|`.
///
/// Exact for 4-directional movement with unit step cost, which makes it
/// the strongest admissible estimate on these grids.
pub fn manhattan(a: Cell, b: Cell) -> f64 {
    ((a.row - b.row).abs() + (a.col - b.col).abs()) as f64
}

/// The Euclidean distance `√(Δrow² + Δcol²)`.
///
/// Never exceeds the true walk length, so it is admissible too, just less
/// informed than [manhattan] when moves are restricted to the four
/// cardinal directions.
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dr = (a.row - b.row) as f64;
    let dc = (a.col - b.col) as f64;
    (dr * dr + dc * dc).sqrt()
}

/// Selects the distance estimate for [astar](crate::search::astar).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    /// The estimate as a plain function value.
    pub fn as_fn(self) -> fn(Cell, Cell) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan,
            Heuristic::Euclidean => euclidean,
        }
    }

    /// Evaluates the estimate between two cells.
    pub fn evaluate(self, a: Cell, b: Cell) -> f64 {
        (self.as_fn())(a, b)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::Euclidean => write!(f, "euclidean"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = PathError;

    /// Parses the lowercase names `manhattan` and `euclidean`. Anything
    /// else fails with [PathError::InvalidHeuristic]; unknown names never
    /// travel past this boundary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            other => Err(PathError::InvalidHeuristic(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_axis_deltas() {
        assert_eq!(manhattan(Cell::new(0, 0), Cell::new(4, 4)), 8.0);
        assert_eq!(manhattan(Cell::new(3, 1), Cell::new(1, 2)), 3.0);
        assert_eq!(manhattan(Cell::new(2, 2), Cell::new(2, 2)), 0.0);
    }

    #[test]
    fn euclidean_is_straight_line() {
        assert_eq!(euclidean(Cell::new(0, 0), Cell::new(3, 4)), 5.0);
        assert_eq!(euclidean(Cell::new(1, 1), Cell::new(1, 5)), 4.0);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        let a = Cell::new(0, 0);
        for row in -3..=3 {
            for col in -3..=3 {
                let b = Cell::new(row, col);
                assert!(euclidean(a, b) <= manhattan(a, b));
            }
        }
    }

    #[test]
    fn parses_known_names() {
        assert_eq!("manhattan".parse::<Heuristic>(), Ok(Heuristic::Manhattan));
        assert_eq!("euclidean".parse::<Heuristic>(), Ok(Heuristic::Euclidean));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "chebyshev".parse::<Heuristic>(),
            Err(PathError::InvalidHeuristic("chebyshev".to_string()))
        );
        // Names are exact; no case folding.
        assert!("Manhattan".parse::<Heuristic>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean] {
            assert_eq!(heuristic.to_string().parse::<Heuristic>(), Ok(heuristic));
        }
    }

    #[test]
    fn defaults_to_manhattan() {
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
    }
}
