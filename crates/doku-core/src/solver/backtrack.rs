//! Depth-first search with undo, driven by an explicit frame stack.
//!
//! The stack holds one frame per empty cell in row-major order; native
//! recursion would bound the search depth by the call stack on large
//! grids, so frames live in a `Vec` instead.

use super::candidates::is_allowed;
use super::SolveStatus;
use crate::Grid;
use crate::Position;
use log::trace;

/// One search frame: an empty cell and the next value to try there.
struct Frame {
    pos: Position,
    next: u8,
}

/// Solve `grid` in place by exhaustive search.
///
/// Candidate values are tried ascending; failed branches are undone
/// (the cell written back to `0`) before the next value is tried, so a
/// `NoSolution` result leaves the grid exactly as given. `limit` caps
/// the number of expansion steps (`None` = unbounded); when it runs out
/// the partial assignment is left in place and `Stalled` is returned.
pub(crate) fn solve(grid: &mut Grid, limit: Option<usize>) -> SolveStatus {
    let n = grid.size() as u8;
    let mut frames: Vec<Frame> = grid
        .empty_positions()
        .into_iter()
        .map(|pos| Frame { pos, next: 1 })
        .collect();

    if frames.is_empty() {
        return if grid.is_solved() {
            SolveStatus::Solved
        } else {
            SolveStatus::NoSolution
        };
    }

    let mut depth = 0usize;
    let mut steps = 0usize;
    while depth < frames.len() {
        if let Some(cap) = limit {
            if steps >= cap {
                trace!("backtracking stalled after {steps} steps");
                return SolveStatus::Stalled;
            }
        }
        steps += 1;

        let pos = frames[depth].pos;
        let mut placed = false;
        let mut value = frames[depth].next;
        while value <= n {
            if is_allowed(grid, pos, value) {
                grid.set(pos, value);
                frames[depth].next = value + 1;
                placed = true;
                break;
            }
            value += 1;
        }

        if placed {
            depth += 1;
        } else {
            frames[depth].next = 1;
            if depth == 0 {
                // Every branch exhausted; all mutations already undone.
                return SolveStatus::NoSolution;
            }
            depth -= 1;
            grid.set(frames[depth].pos, 0);
        }
    }

    // A conflict between clues never blocks the empty cells, so the
    // search can fill everything around it; verify before reporting.
    if grid.is_solved() {
        trace!("backtracking solved in {steps} steps");
        SolveStatus::Solved
    } else {
        for frame in &frames {
            grid.set(frame.pos, 0);
        }
        SolveStatus::NoSolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXED_4X4: [u8; 16] = [
        1, 2, 0, 0, //
        3, 4, 0, 0, //
        0, 0, 3, 4, //
        0, 0, 1, 2,
    ];

    #[test]
    fn test_solves_fixed_4x4_scenario() {
        let given = Grid::from_cells(FIXED_4X4.to_vec()).unwrap();
        let mut grid = given.deep_clone();
        assert_eq!(solve(&mut grid, None), SolveStatus::Solved);
        assert!(grid.is_solved());

        // Clues survive untouched.
        for pos in given.positions() {
            if given.get(pos) != 0 {
                assert_eq!(grid.get(pos), given.get(pos));
            }
        }
    }

    #[test]
    fn test_solves_9x9_puzzle() {
        let puzzle: Vec<u8> =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
                .bytes()
                .map(|b| b - b'0')
                .collect();
        let mut grid = Grid::from_cells(puzzle).unwrap();
        assert_eq!(solve(&mut grid, None), SolveStatus::Solved);
        assert!(grid.is_solved());
    }

    #[test]
    fn test_no_solution_restores_grid() {
        // (0, 3) must take 4 for its row, but its column already has one.
        let cells = vec![
            1, 2, 3, 0, //
            0, 0, 0, 4, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ];
        let mut grid = Grid::from_cells(cells.clone()).unwrap();
        assert_eq!(solve(&mut grid, None), SolveStatus::NoSolution);
        assert_eq!(grid.cells(), cells.as_slice());
    }

    #[test]
    fn test_already_solved_grid() {
        let mut grid = Grid::from_cells(vec![
            1, 2, 3, 4, //
            3, 4, 1, 2, //
            2, 1, 4, 3, //
            4, 3, 2, 1,
        ])
        .unwrap();
        assert_eq!(solve(&mut grid, None), SolveStatus::Solved);
    }

    #[test]
    fn test_full_but_invalid_grid() {
        let mut grid = Grid::from_cells(vec![1; 16]).unwrap();
        assert_eq!(solve(&mut grid, None), SolveStatus::NoSolution);
    }

    #[test]
    fn test_conflicting_clues_detected() {
        // Duplicate 1s in row 0 block no empty cell, but no completion
        // can ever be valid.
        let cells = vec![
            1, 0, 1, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            0, 0, 0, 0,
        ];
        let mut grid = Grid::from_cells(cells.clone()).unwrap();
        assert_eq!(solve(&mut grid, None), SolveStatus::NoSolution);
        assert_eq!(grid.cells(), cells.as_slice());
    }

    #[test]
    fn test_limit_exhaustion_stalls() {
        let mut grid = Grid::empty(3);
        assert_eq!(solve(&mut grid, Some(1)), SolveStatus::Stalled);
    }

    #[test]
    fn test_empty_grid_solvable_at_any_size() {
        for box_size in [2, 3] {
            let mut grid = Grid::empty(box_size);
            assert_eq!(solve(&mut grid, None), SolveStatus::Solved);
            assert!(grid.is_solved(), "box size {box_size} not solved");
        }
    }
}
