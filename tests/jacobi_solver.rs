//! Integration tests for the generate-and-solve pipeline

mod common;

use common::{create_cpu_client, create_cpu_client_with_threads, run_jacobi};
use jacobi_solver::prelude::*;
use jacobi_solver::runtime::cpu::max_threads;

// ============================================================================
// Reported values
// ============================================================================

#[test]
fn test_n_argument_is_respected() {
    let client = create_cpu_client();
    let report = run_jacobi(&client, 20, 5000, 1e-8, 12345);
    assert_eq!(report.n, 20);
    assert_eq!(report.status, ConvergenceStatus::Converged);
}

#[test]
fn test_threads_match_platform_workers() {
    let client = create_cpu_client();
    let report = run_jacobi(&client, 10, 100, 1e-6, 123);
    assert_eq!(report.threads, max_threads());
}

#[test]
fn test_requested_threads_are_clamped() {
    let client = CpuClient::with_config(ParallelismConfig::new(Some(0), None)).unwrap();
    assert_eq!(run_jacobi(&client, 10, 100, 1e-6, 1).threads, 1);

    let client = CpuClient::with_config(ParallelismConfig::new(Some(100_000), None)).unwrap();
    assert_eq!(run_jacobi(&client, 10, 100, 1e-6, 1).threads, max_threads());
}

#[test]
fn test_iter_not_greater_than_max_iter() {
    let client = create_cpu_client();
    for seed in [1, 2, 3, 99] {
        let report = run_jacobi(&client, 10, 15, 1e-6, seed);
        assert!(report.iterations >= 1);
        assert!(report.iterations <= 15);
    }
}

#[test]
fn test_residual_is_non_negative() {
    let client = create_cpu_client();
    let report = run_jacobi(&client, 10, 100, 1e-6, 42);
    assert!(report.residual >= 0.0);
}

#[test]
fn test_single_unknown_is_solved_in_one_sweep() {
    let client = create_cpu_client();
    let report = run_jacobi(&client, 1, 15, 1e-14, 123);
    assert!(report.iterations <= 15);
    assert!(report.residual < 1e-10, "residual {}", report.residual);
    assert_eq!(report.status, ConvergenceStatus::Converged);
}

// ============================================================================
// Convergence behaviour
// ============================================================================

#[test]
fn test_iterations_depend_on_tolerance() {
    let client = create_cpu_client();
    let loose = run_jacobi(&client, 20, 500, 1e-1, 777);
    let strict = run_jacobi(&client, 20, 500, 1e-10, 777);
    assert_eq!(strict.status, ConvergenceStatus::Converged);
    assert!(loose.iterations <= strict.iterations);
}

#[test]
fn test_cap_is_reported_as_exhausted() {
    let client = create_cpu_client();
    let report = run_jacobi(&client, 50, 2, 1e-300, 5);
    assert_eq!(report.iterations, 2);
    assert_eq!(report.status, ConvergenceStatus::ExhaustedIterations);
}

#[test]
fn test_strict_mode_rejects_exhausted_runs() {
    let client = create_cpu_client();
    let (a, b) = generate_system(&client, 40, 8).unwrap();
    let options = JacobiOptions {
        max_iter: 1,
        tol: 1e-12,
        ..JacobiOptions::default()
    };
    let result = jacobi_solve(&client, &a, &b, options).unwrap();
    assert!(matches!(
        result.into_strict(),
        Err(Error::NotConverged { iterations: 1, .. })
    ));
}

#[test]
fn test_solution_satisfies_system() {
    let client = create_cpu_client_with_threads(3);
    let (a, b) = generate_system(&client, 64, 2024).unwrap();
    let result = jacobi_solve(&client, &a, &b, JacobiOptions::default()).unwrap();
    assert!(result.status.is_converged());

    let normb = b.iter().map(|v| v * v).sum::<f64>().sqrt();
    let rnorm = (0..a.n())
        .map(|i| {
            let s: f64 = a.row(i).iter().zip(&result.solution).map(|(x, y)| x * y).sum();
            (s - b[i]).powi(2)
        })
        .sum::<f64>()
        .sqrt();
    assert!(rnorm / normb < 1e-8);
}

// ============================================================================
// Rejected input
// ============================================================================

#[test]
fn test_invalid_configuration_is_rejected() {
    let client = create_cpu_client();
    assert!(matches!(
        solve_random_system(&client, &SolverConfig::new(0, 10, 1e-6, 1)),
        Err(Error::InvalidDimension { n: 0 })
    ));
    assert!(matches!(
        solve_random_system(&client, &SolverConfig::new(10, 0, 1e-6, 1)),
        Err(Error::InvalidArgument { arg: "max_iter", .. })
    ));
    assert!(matches!(
        solve_random_system(&client, &SolverConfig::new(10, 10, 0.0, 1)),
        Err(Error::InvalidArgument { arg: "tol", .. })
    ));
}
