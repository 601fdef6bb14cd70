//! Solve a Random Diagonally Dominant System
//!
//! This example generates a system, solves it step by step with a residual
//! history, then repeats the full solve at several worker counts and prints
//! the speedup over a single worker.
//!
//! Run with:
//! ```sh
//! cargo run --release --example solve_random_system
//! ```

use jacobi_solver::prelude::*;
use jacobi_solver::runtime::cpu::max_threads;

fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Generate a system and watch the residual fall
    // -----------------------------------------------------------------------
    let client = CpuClient::new()?;
    let (a, b) = generate_system(&client, 300, 12345)?;
    println!(
        "generated {}x{} system, diagonally dominant: {}",
        a.n(),
        a.n(),
        a.is_diagonally_dominant()
    );

    let options = JacobiOptions {
        track_history: true,
        ..JacobiOptions::default()
    };
    let mut solver = JacobiSolver::new(&client, &a, &b, options)?;
    while !solver.step()?.is_terminal() {
        if solver.sweeps() % 5 == 0 {
            println!("  sweep {:>3}: residual {:.3e}", solver.sweeps(), solver.residual());
        }
    }
    let result = solver.run()?;
    println!(
        "{} after {} sweeps, residual {:.3e}",
        result.status, result.iterations, result.residual
    );

    // -----------------------------------------------------------------------
    // 2. Thread scaling on a larger system
    // -----------------------------------------------------------------------
    let config = SolverConfig::new(1500, 5000, 1e-8, 12345);
    let mut baseline = None;
    let mut threads = 1;
    while threads <= max_threads() {
        let client = CpuClient::with_config(ParallelismConfig::new(Some(threads), None))?;
        let report = solve_random_system(&client, &config)?;
        let base = *baseline.get_or_insert(report.time_secs());
        println!("{report}  speedup={:.2}", base / report.time_secs());
        threads *= 2;
    }

    Ok(())
}
