//! Constraint propagation by forced singles.
//!
//! Deliberately incomplete: it commits a cell only when exactly one
//! candidate remains, and stops without a full solution as soon as a
//! pass resolves nothing. Callers must not assume the returned grid is
//! solved.

use super::candidates::candidates;
use super::SolveStatus;
use crate::Grid;
use log::trace;

/// Run full row-major passes over `grid`, committing each forced single
/// immediately so later cells in the same pass see it.
///
/// Terminates when the grid is full (`Solved`), a pass commits nothing
/// (`Stalled`), or the pass cap `limit` is hit (`Stalled`).
pub(crate) fn solve(grid: &mut Grid, limit: Option<usize>) -> SolveStatus {
    let mut passes = 0usize;
    while !grid.is_filled() {
        if let Some(cap) = limit {
            if passes >= cap {
                return SolveStatus::Stalled;
            }
        }

        let mut committed = 0usize;
        for pos in grid.positions() {
            if grid.get(pos) != 0 {
                continue;
            }
            if let [only] = candidates(grid, pos).as_slice() {
                grid.set(pos, *only);
                committed += 1;
            }
        }
        passes += 1;
        trace!("propagation pass {passes}: {committed} forced singles");

        if committed == 0 {
            return SolveStatus::Stalled;
        }
    }
    SolveStatus::Solved
}
