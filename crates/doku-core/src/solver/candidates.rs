//! Candidate computation.
//!
//! Purely functional over the grid snapshot passed in: scratch space is
//! local to each call, so nested or concurrent solves cannot corrupt
//! one another. Candidates are never cached; any cell write invalidates
//! them, so callers recompute after every mutation.

use crate::{Grid, Position};

/// Values 1..=N not already present in `pos`'s row, column, or k×k box.
///
/// On a fully empty grid this is all of 1..=N for every position. For a
/// filled cell the result is empty in a valid grid, since the cell's
/// own value excludes itself via its row.
pub fn candidates(grid: &Grid, pos: Position) -> Vec<u8> {
    let n = grid.size();
    let mut excluded = vec![false; n + 1];

    for i in 0..n {
        excluded[grid.get(Position::new(pos.row, i)) as usize] = true;
        excluded[grid.get(Position::new(i, pos.col)) as usize] = true;
    }

    let k = grid.box_size();
    let box_row = pos.row - pos.row % k;
    let box_col = pos.col - pos.col % k;
    for row in box_row..box_row + k {
        for col in box_col..box_col + k {
            excluded[grid.get(Position::new(row, col)) as usize] = true;
        }
    }

    (1..=n as u8).filter(|&v| !excluded[v as usize]).collect()
}

/// Whether `value` can be placed at `pos` without clashing with its
/// row, column, or box. Early-exit form of [`candidates`] for the
/// backtracking hot path.
pub fn is_allowed(grid: &Grid, pos: Position, value: u8) -> bool {
    let n = grid.size();
    for i in 0..n {
        if grid.get(Position::new(pos.row, i)) == value {
            return false;
        }
        if grid.get(Position::new(i, pos.col)) == value {
            return false;
        }
    }

    let k = grid.box_size();
    let box_row = pos.row - pos.row % k;
    let box_col = pos.col - pos.col % k;
    for row in box_row..box_row + k {
        for col in box_col..box_col + k {
            if grid.get(Position::new(row, col)) == value {
                return false;
            }
        }
    }
    true
}
