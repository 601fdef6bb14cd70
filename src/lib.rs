//! # jacobi-solver
//!
//! **Row-parallel Jacobi iteration for dense, diagonally dominant linear systems.**
//!
//! jacobi-solver generates a random diagonally dominant system `A x = b` and
//! solves it with the Jacobi fixed-point method, splitting rows across a
//! fixed-size rayon worker team.
//!
//! ## Features
//!
//! - **Reproducible generation**: every row draws from its own PCG stream keyed
//!   by `(seed, row)`, so A and b do not depend on the worker count
//! - **True Jacobi sweeps**: double-buffered iterates, no in-place updates
//! - **Block reductions**: residual partial sums combined in a fixed order
//! - **Explicit termination status**: converged vs. iteration cap exhausted
//! - **Metrics**: `threads,time` CSV records and speedup tables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jacobi_solver::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let client = CpuClient::new()?;
//! let report = solve_random_system(&client, &SolverConfig::new(500, 5000, 1e-8, 12345))?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod error;
pub mod matrix;
pub mod report;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::jacobi::{
        ConvergenceStatus, JacobiOptions, JacobiResult, JacobiSolver, SolveReport, SolverConfig,
        SolverState, generate_system, jacobi_solve, solve_random_system,
    };
    pub use crate::error::{Error, Result};
    pub use crate::matrix::DenseMatrix;
    pub use crate::report::MetricsSink;
    pub use crate::runtime::{CpuClient, ParallelismConfig};
}
