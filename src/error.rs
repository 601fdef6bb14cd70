//! Error types for jacobi-solver

use thiserror::Error;

/// Result type alias using jacobi-solver's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating, solving or reporting a system
#[derive(Error, Debug)]
pub enum Error {
    /// System dimension is smaller than one
    #[error("Invalid dimension {n}: the system must have at least one row")]
    InvalidDimension {
        /// The rejected dimension
        n: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// The worker pool could not be built
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Iteration cap reached before the tolerance was met
    ///
    /// Only produced when a caller opts into strict convergence; the solver
    /// itself reports cap exhaustion through its status.
    #[error("Did not converge after {iterations} iterations (residual {residual:e})")]
    NotConverged {
        /// Number of sweeps executed
        iterations: usize,
        /// Final relative residual
        residual: f64,
    },

    /// I/O failure in the metrics sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A metrics record could not be parsed
    #[error("Malformed metrics line {line}: {reason}")]
    MalformedMetrics {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Speedup requested without a single-thread measurement
    #[error("No single-thread run recorded; cannot compute speedup")]
    MissingBaseline,
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a length mismatch error for a vector argument
    pub fn length_mismatch(arg: &'static str, expected: usize, got: usize) -> Self {
        Self::InvalidArgument {
            arg,
            reason: format!("expected length {expected}, got {got}"),
        }
    }

    /// Create a malformed metrics error
    pub fn malformed_metrics(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedMetrics {
            line,
            reason: reason.into(),
        }
    }
}
