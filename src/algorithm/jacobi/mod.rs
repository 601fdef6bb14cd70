//! Jacobi iteration for dense, diagonally dominant systems
//!
//! # Components
//!
//! - **generate** - random diagonally dominant A and b, one PCG stream per row
//! - **sweep** - one Jacobi update x → xnew over all rows
//! - **residual** - relative residual ||A x - b|| / ||b|| by block reduction
//! - **solve** - the convergence loop and its state machine
//!
//! # Architecture
//!
//! Every phase is a parallel region on the [`CpuClient`](crate::runtime::CpuClient)
//! pool, with rows split into the same contiguous blocks. A region returns
//! only after all its blocks finish, which is the barrier between writing
//! `xnew` and reading it as the next `x`.
//!
//! # Termination
//!
//! A run ends either [`Converged`](ConvergenceStatus::Converged) or
//! [`ExhaustedIterations`](ConvergenceStatus::ExhaustedIterations). Both are
//! `Ok`; use [`JacobiResult::into_strict`] to treat the cap as an error.

mod generate;
mod residual;
mod solve;
mod sweep;
mod types;

pub use generate::generate_system;
pub use residual::{relative_residual, rhs_norm};
pub use solve::{JacobiSolver, SolverState, jacobi_solve, solve_random_system};
pub use sweep::jacobi_sweep;
pub use types::{ConvergenceStatus, JacobiOptions, JacobiResult, SolveReport, SolverConfig};
