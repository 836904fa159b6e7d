//! Solving strategies and the algorithm registry.
//!
//! Each strategy mutates the grid it is handed; the registry is a
//! static enum dispatch table, read-only after startup, so callers
//! never depend on concrete strategy code.

mod backtrack;
mod candidates;
mod propagate;
mod random;

pub use candidates::{candidates, is_allowed};
pub use random::DEFAULT_RANDOM_CAP;

use crate::{Error, Grid};
use log::debug;
use serde::{Deserialize, Serialize};

/// Terminal state of a solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Grid is full and row/column/box valid.
    Solved,
    /// No further progress was possible, or the iteration limit ran
    /// out; the grid is left partially filled.
    Stalled,
    /// Exhaustive search proved no completion exists.
    NoSolution,
    /// A randomized search exceeded its safety cap.
    NonConvergence,
}

impl SolveStatus {
    pub fn is_solved(self) -> bool {
        self == SolveStatus::Solved
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveStatus::Solved => write!(f, "solved"),
            SolveStatus::Stalled => write!(f, "stalled"),
            SolveStatus::NoSolution => write!(f, "no solution"),
            SolveStatus::NonConvergence => write!(f, "non-convergence"),
        }
    }
}

/// The solving algorithms; this enum is the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Explicit-stack depth-first search with undo. Deterministic and
    /// exhaustive: finds a valid completion iff one exists.
    Backtracking,
    /// Forced-single passes; incomplete by design, stalls on ties.
    ConstraintPropagation,
    /// Uniform random refills until valid; always capped.
    RandomGuess,
    /// Scan-for-next-empty exhaustive search. Same outcome as
    /// [`Algorithm::Backtracking`] and unified with it internally.
    ExhaustiveSearch,
}

impl Algorithm {
    /// Every registered algorithm.
    pub fn all() -> &'static [Algorithm] {
        &[
            Algorithm::Backtracking,
            Algorithm::ConstraintPropagation,
            Algorithm::RandomGuess,
            Algorithm::ExhaustiveSearch,
        ]
    }

    /// Stable name used on the CLI and in files.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Backtracking => "backtracking",
            Algorithm::ConstraintPropagation => "propagation",
            Algorithm::RandomGuess => "random",
            Algorithm::ExhaustiveSearch => "exhaustive",
        }
    }

    /// Look up an algorithm by name.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name {
            "backtracking" | "backtrack" => Ok(Algorithm::Backtracking),
            "propagation" | "constraint-propagation" => Ok(Algorithm::ConstraintPropagation),
            "random" | "random-guess" => Ok(Algorithm::RandomGuess),
            "exhaustive" | "exhaustive-search" => Ok(Algorithm::ExhaustiveSearch),
            _ => Err(Error::UnknownAlgorithm(name.to_string())),
        }
    }

    /// Solve `grid` in place with this algorithm.
    ///
    /// Every variant is destructive on its argument; callers that need
    /// the original afterwards must [`Grid::deep_clone`] first. `limit`
    /// is the variant's iteration cap — expansion steps for the
    /// exhaustive searches, passes for propagation, refills for random
    /// guessing. `None` means unbounded, except for
    /// [`Algorithm::RandomGuess`] which falls back to
    /// [`DEFAULT_RANDOM_CAP`].
    pub fn solve(self, grid: &mut Grid, limit: Option<usize>) -> SolveStatus {
        debug!(
            "solving {}×{} grid at {}% fill with {}",
            grid.size(),
            grid.size(),
            grid.fill_percentage(),
            self.name()
        );
        match self {
            Algorithm::Backtracking | Algorithm::ExhaustiveSearch => backtrack::solve(grid, limit),
            Algorithm::ConstraintPropagation => propagate::solve(grid, limit),
            Algorithm::RandomGuess => random::solve(grid, limit),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for &algo in Algorithm::all() {
            assert_eq!(Algorithm::from_name(algo.name()).unwrap(), algo);
        }
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = Algorithm::from_name("quantum").unwrap_err();
        assert!(matches!(err, Error::UnknownAlgorithm(name) if name == "quantum"));
    }

    #[test]
    fn test_exhaustive_matches_backtracking() {
        let cells: Vec<u8> = vec![
            1, 2, 0, 0, //
            3, 4, 0, 0, //
            0, 0, 3, 4, //
            0, 0, 1, 2,
        ];
        let mut a = Grid::from_cells(cells.clone()).unwrap();
        let mut b = Grid::from_cells(cells).unwrap();
        assert_eq!(
            Algorithm::Backtracking.solve(&mut a, None),
            SolveStatus::Solved
        );
        assert_eq!(
            Algorithm::ExhaustiveSearch.solve(&mut b, None),
            SolveStatus::Solved
        );
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn test_dispatch_reaches_every_variant() {
        for &algo in Algorithm::all() {
            let mut grid = Grid::from_cells(vec![
                0, 2, 3, 4, //
                3, 4, 1, 2, //
                2, 1, 4, 3, //
                4, 3, 2, 1,
            ])
            .unwrap();
            let status = algo.solve(&mut grid, None);
            assert!(status.is_solved(), "{algo} failed with {status}");
            assert!(grid.is_solved());
        }
    }
}
