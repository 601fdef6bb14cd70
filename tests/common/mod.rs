//! Common test utilities
#![allow(dead_code)]

use jacobi_solver::prelude::*;

/// Create a client using every available worker
pub fn create_cpu_client() -> CpuClient {
    CpuClient::new().expect("default client")
}

/// Create a client with an explicit worker count
pub fn create_cpu_client_with_threads(threads: usize) -> CpuClient {
    CpuClient::with_config(ParallelismConfig::new(Some(threads), None)).expect("client")
}

/// Run the full generate-and-solve pipeline on `client`
pub fn run_jacobi(
    client: &CpuClient,
    n: usize,
    max_iter: usize,
    tol: f64,
    seed: u64,
) -> SolveReport {
    solve_random_system(client, &SolverConfig::new(n, max_iter, tol, seed)).expect("solve")
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Sequential reference sweep
pub fn reference_sweep(a: &DenseMatrix, b: &[f64], x: &[f64]) -> Vec<f64> {
    let n = a.n();
    (0..n)
        .map(|i| {
            let mut s = 0.0;
            for j in 0..n {
                if j != i {
                    s += a.get(i, j) * x[j];
                }
            }
            (b[i] - s) / a.get(i, i)
        })
        .collect()
}
