//! Random guessing: refill every empty cell uniformly and test.
//!
//! Expected iteration count grows combinatorially with the number of
//! empty cells, so the loop always runs under a cap; there is no
//! guaranteed termination bound otherwise.

use super::SolveStatus;
use crate::{Grid, Position};
use log::debug;
use rand::Rng;

/// Cap applied when the caller passes no limit.
pub const DEFAULT_RANDOM_CAP: usize = 100_000;

/// Solve `grid` in place by uniform random refills.
///
/// Draws from a fresh thread-local source each invocation so
/// concurrent solves never share generator state.
pub(crate) fn solve(grid: &mut Grid, limit: Option<usize>) -> SolveStatus {
    let mut rng = rand::thread_rng();
    solve_with_rng(grid, limit, &mut rng)
}

pub(crate) fn solve_with_rng<R: Rng>(
    grid: &mut Grid,
    limit: Option<usize>,
    rng: &mut R,
) -> SolveStatus {
    let n = grid.size() as u8;
    let empties: Vec<Position> = grid.empty_positions();
    if empties.is_empty() {
        return if grid.is_solved() {
            SolveStatus::Solved
        } else {
            SolveStatus::NoSolution
        };
    }

    let cap = limit.unwrap_or(DEFAULT_RANDOM_CAP);
    for attempt in 0..cap {
        for &pos in &empties {
            grid.set(pos, rng.gen_range(1..=n));
        }
        if grid.is_solved() {
            debug!("random guess converged after {} refills", attempt + 1);
            return SolveStatus::Solved;
        }
    }

    // Hand the caller back their puzzle, not the last batch of noise.
    for &pos in &empties {
        grid.set(pos, 0);
    }
    SolveStatus::NonConvergence
}
