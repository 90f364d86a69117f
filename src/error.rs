//! Error type shared by every module of the crate.

use thiserror::Error;

/// Errors reported by the multi-objective framework.
#[derive(Debug, Error)]
pub enum MoeaError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A pairwise operator was asked to work on fewer than two solutions.
    #[error("population of {size} solution(s) is too small for a binary tournament")]
    PopulationTooSmall {
        /// Number of solutions that were available.
        size: usize,
    },

    /// `evaluate` wrote a different number of objectives than declared.
    #[error("expected {expected} objective values, evaluation produced {actual}")]
    ObjectiveCountMismatch {
        /// Objective count declared by the problem.
        expected: usize,
        /// Objective count actually produced.
        actual: usize,
    },

    /// A solution does not carry the variable count declared by the problem.
    #[error("expected {expected} variables, solution has {actual}")]
    VariableCountMismatch {
        /// Variable count declared by the problem.
        expected: usize,
        /// Variable count found on the solution.
        actual: usize,
    },

    /// A line of a front file could not be parsed.
    #[error("front file line {line}: {message}")]
    FrontFormat {
        /// 1-based line number.
        line: usize,
        /// What went wrong on that line.
        message: String,
    },

    /// `step` was called before `initialize`.
    #[error("algorithm has not been initialized")]
    NotInitialized,

    /// Underlying I/O failure while reading or writing front files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, MoeaError>;
