use thiserror::Error as ThisError;

/// Recoverable error kinds surfaced by the engine.
///
/// Out-of-bounds position access is a programming error, not a
/// recoverable condition; grid and cursor accessors panic on it rather
/// than returning a variant here. Solver-level outcomes such as a
/// stalled propagation pass travel in
/// [`SolveStatus`](crate::SolveStatus), not as errors.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Input could not be parsed into a grid.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The registry has no algorithm with this name.
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),

    /// Exhaustive search proved the grid has no completion.
    #[error("no solution found")]
    NoSolutionFound,

    /// A randomized algorithm hit its safety cap without converging.
    #[error("randomized search exceeded its iteration cap without converging")]
    NonConvergence,

    /// Generation retried past its bound without producing a grid.
    #[error("generation retries exhausted after {attempts} attempts")]
    GenerationRetryExhausted { attempts: usize },
}
