use crate::solver::candidates;
use crate::{Algorithm, Error, Grid, Position};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Retry bounds for grid generation.
///
/// The underlying loops have no inherent termination guarantee, so
/// both the solved-grid seeding and the carve loop run under caps and
/// surface [`Error::GenerationRetryExhausted`] past them.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Max reseed attempts when completing a solved grid.
    pub max_seed_attempts: usize,
    /// Max carve restarts before giving up on a puzzle.
    pub max_carve_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_seed_attempts: 100,
            max_carve_attempts: 10,
        }
    }
}

/// Puzzle generator: builds solved grids, then carves clues out of them.
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Generator with an entropy-seeded source and default retry caps.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Generator with custom retry caps.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded generator for reproducible output within a run.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the retry caps.
    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    /// Build a fully solved N×N grid for box size `k`.
    ///
    /// Seeds each of the k diagonal boxes with an independently
    /// shuffled permutation of 1..=N — diagonal boxes share no row or
    /// column, so the seeds cannot conflict — and completes the rest
    /// with backtracking. A failed completion reseeds and retries.
    pub fn solved_grid(&mut self, box_size: usize) -> Result<Grid, Error> {
        for attempt in 0..self.config.max_seed_attempts {
            let mut grid = Grid::empty(box_size);
            self.seed_diagonal_boxes(&mut grid);
            if Algorithm::Backtracking.solve(&mut grid, None).is_solved() {
                debug!(
                    "built solved {}×{} grid on attempt {}",
                    grid.size(),
                    grid.size(),
                    attempt + 1
                );
                return Ok(grid);
            }
            trace!("seed attempt {} failed, reseeding", attempt + 1);
        }
        Err(Error::GenerationRetryExhausted {
            attempts: self.config.max_seed_attempts,
        })
    }

    /// Carve a puzzle for box size `k`.
    ///
    /// Removes random filled cells while the deletion-validity
    /// heuristic holds, undoes the removal that broke it, and discards
    /// any carve that uncapped propagation solves outright (too easy),
    /// restarting from a newly built solved grid; if every attempt is
    /// rejected the last carve is returned anyway.
    ///
    /// In practice the fallback is the normal exit: a carve that
    /// survives the heuristic leaves every hole with exactly one
    /// candidate, which propagation always fills, so the gate rejects
    /// each attempt and the last carve is what callers get. The
    /// heuristic checks candidate counts only — it is not a uniqueness
    /// proof, so carved puzzles may admit more than one completion.
    pub fn puzzle(&mut self, box_size: usize) -> Result<Grid, Error> {
        let mut last_carve = None;
        for attempt in 0..self.config.max_carve_attempts {
            let solved = self.solved_grid(box_size)?;
            let carved = self.carve(&solved);

            let mut probe = carved.deep_clone();
            Algorithm::ConstraintPropagation.solve(&mut probe, None);
            if !probe.is_solved() {
                debug!(
                    "carved puzzle at {}% fill on attempt {}",
                    carved.fill_percentage(),
                    attempt + 1
                );
                return Ok(carved);
            }
            trace!("carve attempt {} propagation-trivial", attempt + 1);
            last_carve = Some(carved);
        }

        // The deletion-validity heuristic steers every hole toward a
        // single remaining candidate, so the propagation gate can
        // reject each attempt; hand back the last carve rather than
        // stranding the caller.
        last_carve.ok_or(Error::GenerationRetryExhausted {
            attempts: self.config.max_carve_attempts,
        })
    }

    fn seed_diagonal_boxes(&mut self, grid: &mut Grid) {
        let k = grid.box_size();
        let mut values: Vec<u8> = (1..=grid.size() as u8).collect();
        for b in 0..k {
            values.shuffle(&mut self.rng);
            let origin = b * k;
            for (i, &value) in values.iter().enumerate() {
                grid.set(Position::new(origin + i / k, origin + i % k), value);
            }
        }
    }

    fn carve(&mut self, solved: &Grid) -> Grid {
        let mut grid = solved.deep_clone();
        let mut removed: Vec<(Position, u8)> = Vec::new();

        // The heuristic needs at least one removed cell to look at, so
        // the first removal is unconditional.
        let first = self.random_position(grid.size());
        removed.push((first, grid.get(first)));
        grid.set(first, 0);

        while Self::deletion_valid(&grid, &removed) {
            let pos = self.random_position(grid.size());
            if grid.get(pos) == 0 {
                continue;
            }
            removed.push((pos, grid.get(pos)));
            grid.set(pos, 0);
        }

        // Undo only the removal that broke the heuristic.
        if let Some((pos, value)) = removed.pop() {
            grid.set(pos, value);
        }
        grid
    }

    /// At least one removed cell must be down to a single remaining
    /// candidate, and none may have widened to two or more.
    fn deletion_valid(grid: &Grid, removed: &[(Position, u8)]) -> bool {
        let mut single_seen = false;
        for &(pos, _) in removed {
            match candidates(grid, pos).len() {
                1 => single_seen = true,
                c if c >= 2 => return false,
                _ => {}
            }
        }
        single_seen
    }

    fn random_position(&mut self, size: usize) -> Position {
        Position::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SolveStatus;

    #[test]
    fn test_solved_grid_4x4() {
        let mut generator = Generator::with_seed(42);
        let grid = generator.solved_grid(2).unwrap();
        assert_eq!(grid.size(), 4);
        assert!(grid.is_solved());
    }

    #[test]
    fn test_solved_grid_9x9() {
        let mut generator = Generator::with_seed(42);
        let grid = generator.solved_grid(3).unwrap();
        assert_eq!(grid.size(), 9);
        assert!(grid.is_solved());
    }

    #[test]
    fn test_diagonal_seeds_are_permutations() {
        let mut generator = Generator::with_seed(7);
        let mut grid = Grid::empty(3);
        generator.seed_diagonal_boxes(&mut grid);

        for b in 0..3 {
            let mut seen = [false; 10];
            for i in 0..9 {
                let v = grid.get(Position::new(b * 3 + i / 3, b * 3 + i % 3));
                assert!(v >= 1 && v <= 9 && !seen[v as usize]);
                seen[v as usize] = true;
            }
        }
        // Off-diagonal boxes stay empty.
        assert_eq!(grid.get(Position::new(0, 5)), 0);
        assert_eq!(grid.get(Position::new(7, 1)), 0);
    }

    #[test]
    fn test_puzzle_has_holes_and_is_solvable() {
        let mut generator = Generator::with_seed(42);
        let puzzle = generator.puzzle(3).unwrap();
        assert!(!puzzle.is_filled(), "puzzle should have empty cells");

        let mut working = puzzle.deep_clone();
        assert_eq!(
            Algorithm::Backtracking.solve(&mut working, None),
            SolveStatus::Solved
        );
        assert!(working.is_solved());

        // Clue cells survive into the solution.
        for pos in puzzle.positions() {
            if puzzle.get(pos) != 0 {
                assert_eq!(working.get(pos), puzzle.get(pos));
            }
        }
    }

    #[test]
    fn test_puzzle_4x4() {
        let mut generator = Generator::with_seed(7);
        let puzzle = generator.puzzle(2).unwrap();
        assert_eq!(puzzle.size(), 4);
        assert!(!puzzle.is_filled());

        let mut working = puzzle.deep_clone();
        assert!(Algorithm::Backtracking.solve(&mut working, None).is_solved());
    }

    #[test]
    fn test_single_carve_attempt_yields_puzzle() {
        // Carves that survive the deletion heuristic leave only
        // single-candidate holes, so propagation solves every probe and
        // the last-carve fallback is the path callers actually take.
        // One attempt must therefore be enough to get a puzzle back.
        let mut generator = Generator::with_seed(42);
        generator.set_config(GeneratorConfig {
            max_seed_attempts: 100,
            max_carve_attempts: 1,
        });
        let puzzle = generator.puzzle(2).unwrap();
        assert!(!puzzle.is_filled());

        let mut probe = puzzle.deep_clone();
        Algorithm::ConstraintPropagation.solve(&mut probe, None);
        assert!(probe.is_solved(), "accepted carves are propagation-solvable");
    }

    #[test]
    fn test_retry_cap_surfaces_error() {
        let mut generator = Generator::with_config(GeneratorConfig {
            max_seed_attempts: 100,
            max_carve_attempts: 0,
        });
        let err = generator.puzzle(2).unwrap_err();
        assert!(matches!(err, Error::GenerationRetryExhausted { attempts: 0 }));
    }
}
