//! Core engine for N×N Sudoku-style constraint grids.
//!
//! N = k² for a box size k; cell values run 1..=N with `0` marking an
//! empty cell. The crate provides the grid model with its traversal
//! cursor, pure candidate computation, four solving strategies behind
//! an enum registry, a puzzle generator that carves clues out of
//! solved grids, and a flat-integer codec with a serde surface.
//!
//! ```
//! use doku_core::{Algorithm, Generator};
//!
//! let mut generator = Generator::with_seed(42);
//! let puzzle = generator.puzzle(3)?;
//!
//! let mut working = puzzle.deep_clone();
//! let status = Algorithm::Backtracking.solve(&mut working, None);
//! assert!(status.is_solved());
//! # Ok::<(), doku_core::Error>(())
//! ```

mod codec;
mod error;
mod generator;
mod grid;
mod position;
mod solver;

pub use codec::{from_text, to_text};
pub use error::Error;
pub use generator::{Generator, GeneratorConfig};
pub use grid::Grid;
pub use position::{Cursor, Position};
pub use solver::{candidates, is_allowed, Algorithm, SolveStatus, DEFAULT_RANDOM_CAP};
