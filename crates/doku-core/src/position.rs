use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on an N×N board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Row-major traversal over an N×N board.
///
/// A cursor is bound to a board size, never to its contents: it tracks
/// traversal progress only. Iterating yields every position from the
/// current one to the last cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    size: usize,
    index: usize,
}

impl Cursor {
    /// Cursor at the origin of an N×N board.
    pub fn new(size: usize) -> Self {
        Self { size, index: 0 }
    }

    /// The board size this cursor is bound to.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current position, or `None` once the cursor has passed the last cell.
    pub fn position(&self) -> Option<Position> {
        if self.index < self.size * self.size {
            Some(Position::new(self.index / self.size, self.index % self.size))
        } else {
            None
        }
    }

    /// Jump to a position on the board.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the bound board size.
    pub fn set_position(&mut self, pos: Position) {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "cursor position ({}, {}) out of bounds for size {}",
            pos.row,
            pos.col,
            self.size
        );
        self.index = pos.row * self.size + pos.col;
    }

    /// Return to the origin.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl Iterator for Cursor {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        // `self` is `&mut Cursor`, which is itself an iterator, so a bare
        // `self.position()` would resolve to `Iterator::position`.
        let pos = Cursor::position(self)?;
        self.index += 1;
        Some(pos)
    }
}
