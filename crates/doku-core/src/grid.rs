use crate::{Cursor, Error, Position};

/// Mutable N×N board of values in `[0, N]`, where `0` marks an empty
/// cell and N = k² for the box size k.
///
/// The grid owns a [`Cursor`] bound to its size; copies start with a
/// fresh cursor at the origin. All accessors take [`Position`]s and
/// treat out-of-bounds access as a contract violation (panic), not a
/// recoverable error.
#[derive(Debug)]
pub struct Grid {
    size: usize,
    box_size: usize,
    cells: Vec<u8>,
    cursor: Cursor,
}

impl Grid {
    /// Empty grid for box size `k`, so N = k².
    ///
    /// # Panics
    ///
    /// Panics if `box_size` is zero or the resulting N exceeds `u8::MAX`.
    pub fn empty(box_size: usize) -> Self {
        let size = box_size * box_size;
        assert!(
            box_size >= 1 && size <= u8::MAX as usize,
            "unsupported box size {}",
            box_size
        );
        Self {
            size,
            box_size,
            cells: vec![0; size * size],
            cursor: Cursor::new(size),
        }
    }

    /// Build a grid from flat row-major cells.
    ///
    /// The length must be N² where N is itself a perfect square, and
    /// every value must lie in `[0, N]`; anything else is
    /// [`Error::MalformedInput`].
    pub fn from_cells(cells: Vec<u8>) -> Result<Self, Error> {
        if cells.is_empty() {
            return Err(Error::MalformedInput("empty cell sequence".to_string()));
        }
        let size = integer_sqrt(cells.len()).ok_or_else(|| {
            Error::MalformedInput(format!("cell count {} is not a perfect square", cells.len()))
        })?;
        let box_size = integer_sqrt(size).ok_or_else(|| {
            Error::MalformedInput(format!("grid size {size} is not a perfect square"))
        })?;
        if size > u8::MAX as usize {
            return Err(Error::MalformedInput(format!("grid size {size} too large")));
        }
        if let Some(&bad) = cells.iter().find(|&&v| v as usize > size) {
            return Err(Error::MalformedInput(format!(
                "cell value {bad} exceeds grid size {size}"
            )));
        }
        Ok(Self {
            size,
            box_size,
            cells,
            cursor: Cursor::new(size),
        })
    }

    /// Deep copy with a fresh cursor at the origin.
    pub fn deep_clone(&self) -> Self {
        Self {
            size: self.size,
            box_size: self.box_size,
            cells: self.cells.clone(),
            cursor: Cursor::new(self.size),
        }
    }

    /// Board size N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Box size k (N = k²).
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// Flat row-major view of the cells.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// The grid's bound cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Mutable access to the bound cursor.
    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// A transient cursor over every position, row-major.
    pub fn positions(&self) -> Cursor {
        Cursor::new(self.size)
    }

    /// Value at `pos` (`0` = empty).
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[self.index_of(pos)]
    }

    /// Write `value` at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid or `value` exceeds N.
    pub fn set(&mut self, pos: Position, value: u8) {
        assert!(
            value as usize <= self.size,
            "value {} exceeds grid size {}",
            value,
            self.size
        );
        let idx = self.index_of(pos);
        self.cells[idx] = value;
    }

    /// Whether every cell is non-zero.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Whether the grid is filled and every row, column, and box
    /// contains each of 1..=N exactly once.
    pub fn is_solved(&self) -> bool {
        let n = self.size;
        let k = self.box_size;

        let unit_ok = |cells: &mut dyn Iterator<Item = u8>| {
            let mut seen = vec![false; n + 1];
            for v in cells {
                if v == 0 || seen[v as usize] {
                    return false;
                }
                seen[v as usize] = true;
            }
            true
        };

        for i in 0..n {
            if !unit_ok(&mut (0..n).map(|j| self.get(Position::new(i, j)))) {
                return false;
            }
            if !unit_ok(&mut (0..n).map(|j| self.get(Position::new(j, i)))) {
                return false;
            }
        }
        for box_row in 0..k {
            for box_col in 0..k {
                let mut cells = (0..n).map(|i| {
                    self.get(Position::new(
                        box_row * k + i / k,
                        box_col * k + i % k,
                    ))
                });
                if !unit_ok(&mut cells) {
                    return false;
                }
            }
        }
        true
    }

    /// All currently empty positions, row-major.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions().filter(|&p| self.get(p) == 0).collect()
    }

    /// Proportion of non-zero cells, as an integer percent (floored).
    pub fn fill_percentage(&self) -> usize {
        let filled = self.cells.iter().filter(|&&v| v != 0).count();
        filled * 100 / self.cells.len()
    }

    fn index_of(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "position ({}, {}) out of bounds for size {}",
            pos.row,
            pos.col,
            self.size
        );
        pos.row * self.size + pos.col
    }
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        self.deep_clone()
    }
}

fn integer_sqrt(value: usize) -> Option<usize> {
    let root = (value as f64).sqrt().round() as usize;
    (root * root == value).then_some(root)
}
