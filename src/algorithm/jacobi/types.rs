//! Jacobi solver options, results and run configuration

use crate::error::{Error, Result};
use std::time::Duration;

// ============================================================================
// Options
// ============================================================================

/// Configuration options for Jacobi iteration
///
/// Iterates x_{k+1}[i] = (b[i] - Σ_{j≠i} A[i][j] x_k[j]) / A[i][i] until the
/// relative residual ||A x - b|| / ||b|| drops below `tol` or `max_iter`
/// sweeps have run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobiOptions {
    /// Maximum number of sweeps (default: 5000)
    pub max_iter: usize,

    /// Relative residual tolerance (default: 1e-8)
    ///
    /// Convergence when ||A x - b|| / ||b|| < tol
    pub tol: f64,

    /// Record the residual after every sweep (default: false)
    pub track_history: bool,
}

impl Default for JacobiOptions {
    fn default() -> Self {
        Self {
            max_iter: 5000,
            tol: 1e-8,
            track_history: false,
        }
    }
}

impl JacobiOptions {
    /// Reject a zero iteration cap and non-positive or non-finite tolerances
    pub fn validate(&self) -> Result<()> {
        if self.max_iter == 0 {
            return Err(Error::invalid_argument(
                "max_iter",
                "at least one sweep is required",
            ));
        }
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(Error::invalid_argument(
                "tol",
                format!("must be a positive finite number, got {}", self.tol),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Status and result
// ============================================================================

/// How a Jacobi run terminated
///
/// Both outcomes are successful returns. `ExhaustedIterations` means the cap
/// was hit first; the residual tells how close the iterate got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceStatus {
    /// Residual dropped below the tolerance
    Converged,

    /// `max_iter` sweeps ran without meeting the tolerance
    ///
    /// **Hint**: Increase `max_iter` or loosen `tol`
    ExhaustedIterations,
}

impl ConvergenceStatus {
    /// Returns true if the tolerance was met
    #[inline]
    pub fn is_converged(&self) -> bool {
        matches!(self, ConvergenceStatus::Converged)
    }
}

impl std::fmt::Display for ConvergenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvergenceStatus::Converged => write!(f, "converged"),
            ConvergenceStatus::ExhaustedIterations => write!(f, "exhausted"),
        }
    }
}

/// Result of Jacobi iteration
#[derive(Debug, Clone)]
pub struct JacobiResult {
    /// Final iterate x such that Ax ≈ b
    pub solution: Vec<f64>,

    /// Number of sweeps executed (1-based)
    pub iterations: usize,

    /// Final relative residual ||A x - b|| / ||b||
    pub residual: f64,

    /// Whether the tolerance or the cap ended the run
    pub status: ConvergenceStatus,

    /// Residual after each sweep (empty unless `track_history` was set)
    pub residual_history: Vec<f64>,
}

impl JacobiResult {
    /// Turn cap exhaustion into [`Error::NotConverged`]
    pub fn into_strict(self) -> Result<Self> {
        match self.status {
            ConvergenceStatus::Converged => Ok(self),
            ConvergenceStatus::ExhaustedIterations => Err(Error::NotConverged {
                iterations: self.iterations,
                residual: self.residual,
            }),
        }
    }
}

// ============================================================================
// Random-system runs
// ============================================================================

/// Parameters of a solve over a generated system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// System dimension (default: 2000)
    pub n: usize,

    /// Generator seed (default: 12345)
    pub seed: u64,

    /// Iteration options (defaults: 5000 sweeps, tol 1e-8)
    pub options: JacobiOptions,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            n: 2000,
            seed: 12345,
            options: JacobiOptions::default(),
        }
    }
}

impl SolverConfig {
    /// Config with the given dimension, cap, tolerance and seed
    pub fn new(n: usize, max_iter: usize, tol: f64, seed: u64) -> Self {
        Self {
            n,
            seed,
            options: JacobiOptions {
                max_iter,
                tol,
                ..JacobiOptions::default()
            },
        }
    }

    /// Check every parameter before anything is allocated
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(Error::InvalidDimension { n: self.n });
        }
        self.options.validate()
    }
}

/// The observable outcome of one run
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    /// System dimension
    pub n: usize,
    /// Worker count used
    pub threads: usize,
    /// Sweeps executed (1-based)
    pub iterations: usize,
    /// Final relative residual
    pub residual: f64,
    /// Wall time of the iterate-and-residual phase, generation excluded
    pub elapsed: Duration,
    /// How the run ended
    pub status: ConvergenceStatus,
}

impl SolveReport {
    /// Elapsed time in seconds
    #[inline]
    pub fn time_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.n, 2000);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.options.max_iter, 5000);
        assert_eq!(config.options.tol, 1e-8);
        assert!(!config.options.track_history);
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(matches!(
            SolverConfig::new(0, 10, 1e-6, 1).validate(),
            Err(Error::InvalidDimension { n: 0 })
        ));
        assert!(matches!(
            SolverConfig::new(4, 0, 1e-6, 1).validate(),
            Err(Error::InvalidArgument { arg: "max_iter", .. })
        ));
        for tol in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SolverConfig::new(4, 10, tol, 1).validate(),
                Err(Error::InvalidArgument { arg: "tol", .. })
            ));
        }
        assert!(SolverConfig::new(1, 1, 1e-14, 0).validate().is_ok());
    }

    #[test]
    fn test_into_strict() {
        let result = JacobiResult {
            solution: vec![0.0],
            iterations: 15,
            residual: 0.5,
            status: ConvergenceStatus::ExhaustedIterations,
            residual_history: Vec::new(),
        };
        assert!(matches!(
            result.clone().into_strict(),
            Err(Error::NotConverged { iterations: 15, .. })
        ));

        let converged = JacobiResult {
            status: ConvergenceStatus::Converged,
            ..result
        };
        assert!(converged.into_strict().is_ok());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ConvergenceStatus::Converged.to_string(), "converged");
        assert_eq!(ConvergenceStatus::ExhaustedIterations.to_string(), "exhausted");
        assert!(!ConvergenceStatus::ExhaustedIterations.is_converged());
    }
}
