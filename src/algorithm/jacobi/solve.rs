//! Convergence loop
//!
//! ```text
//! normb = ||b|| (1 if zero)
//! x = 0, sweeps = 0
//! loop:
//!     xnew = sweep(x); swap(x, xnew); sweeps += 1
//!     r = ||A x - b|| / normb
//!     if r < tol:             Converged
//!     elif sweeps == max_iter: ExhaustedIterations
//! ```

use super::generate::generate_system;
use super::residual::{relative_residual, rhs_norm};
use super::sweep::{jacobi_sweep, validate_vector};
use super::types::{ConvergenceStatus, JacobiOptions, JacobiResult, SolveReport, SolverConfig};
use crate::error::Result;
use crate::matrix::DenseMatrix;
use crate::runtime::cpu::CpuClient;
use std::time::Instant;
use tracing::{debug, info, trace};

/// State of a [`JacobiSolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// More sweeps may run
    Iterating,
    /// Residual dropped below the tolerance
    Converged,
    /// The sweep cap was reached first
    ExhaustedIterations,
}

impl SolverState {
    /// Whether the solver has stopped
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SolverState::Iterating)
    }
}

/// Step-by-step Jacobi driver over a borrowed system
///
/// Owns the double buffer `x`/`xnew`; `x` starts at zero.
#[derive(Debug)]
pub struct JacobiSolver<'a> {
    client: &'a CpuClient,
    a: &'a DenseMatrix,
    b: &'a [f64],
    options: JacobiOptions,
    normb: f64,
    x: Vec<f64>,
    xnew: Vec<f64>,
    sweeps: usize,
    residual: f64,
    state: SolverState,
    history: Vec<f64>,
}

impl<'a> JacobiSolver<'a> {
    /// Prepare a solve of `a x = b`
    pub fn new(
        client: &'a CpuClient,
        a: &'a DenseMatrix,
        b: &'a [f64],
        options: JacobiOptions,
    ) -> Result<Self> {
        options.validate()?;
        let n = a.n();
        validate_vector("b", b.len(), n)?;

        Ok(Self {
            client,
            a,
            b,
            options,
            normb: rhs_norm(b),
            x: vec![0.0; n],
            xnew: vec![0.0; n],
            sweeps: 0,
            residual: f64::INFINITY,
            state: SolverState::Iterating,
            history: Vec::new(),
        })
    }

    /// Current state
    #[inline]
    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Current iterate
    #[inline]
    pub fn iterate(&self) -> &[f64] {
        &self.x
    }

    /// Sweeps executed so far
    #[inline]
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// Residual after the last sweep (infinite before the first)
    #[inline]
    pub fn residual(&self) -> f64 {
        self.residual
    }

    /// Run one sweep and residual evaluation
    ///
    /// A no-op once the solver is in a terminal state.
    pub fn step(&mut self) -> Result<SolverState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        jacobi_sweep(self.client, self.a, self.b, &self.x, &mut self.xnew)?;
        std::mem::swap(&mut self.x, &mut self.xnew);
        self.sweeps += 1;

        let residual = relative_residual(self.client, self.a, self.b, &self.x, self.normb)?;
        self.residual = residual;
        if self.options.track_history {
            self.history.push(residual);
        }
        trace!(sweep = self.sweeps, residual, "jacobi sweep");

        // NaN never passes the tolerance test
        if residual < self.options.tol {
            self.state = SolverState::Converged;
        } else if self.sweeps == self.options.max_iter {
            self.state = SolverState::ExhaustedIterations;
        }
        Ok(self.state)
    }

    /// Step until a terminal state and return the result
    pub fn run(mut self) -> Result<JacobiResult> {
        while !self.step()?.is_terminal() {}

        let status = match self.state {
            SolverState::Converged => ConvergenceStatus::Converged,
            _ => ConvergenceStatus::ExhaustedIterations,
        };
        debug!(
            iterations = self.sweeps,
            residual = self.residual,
            %status,
            "jacobi finished"
        );
        Ok(JacobiResult {
            solution: self.x,
            iterations: self.sweeps,
            residual: self.residual,
            status,
            residual_history: self.history,
        })
    }
}

/// Solve `a x = b` by Jacobi iteration from a zero initial guess
pub fn jacobi_solve(
    client: &CpuClient,
    a: &DenseMatrix,
    b: &[f64],
    options: JacobiOptions,
) -> Result<JacobiResult> {
    JacobiSolver::new(client, a, b, options)?.run()
}

/// Generate a system from `config` and solve it, timing only the solve
///
/// The timer covers ||b|| and the sweep/residual loop, not generation.
pub fn solve_random_system(client: &CpuClient, config: &SolverConfig) -> Result<SolveReport> {
    config.validate()?;
    let (a, b) = generate_system(client, config.n, config.seed)?;

    let start = Instant::now();
    let result = jacobi_solve(client, &a, &b, config.options)?;
    let elapsed = start.elapsed();

    let report = SolveReport {
        n: config.n,
        threads: client.num_threads(),
        iterations: result.iterations,
        residual: result.residual,
        elapsed,
        status: result.status,
    };
    info!(
        n = report.n,
        threads = report.threads,
        iterations = report.iterations,
        residual = report.residual,
        elapsed_secs = report.time_secs(),
        status = %report.status,
        "solve complete"
    );
    Ok(report)
}
