//! Row kernels
//!
//! Sequential reductions over a single matrix row. Accumulation always runs in
//! increasing column order so a row's result does not depend on which worker
//! computes it.

/// Dot product of `row` with `x`: Σ_j row[j] * x[j]
#[inline]
pub fn row_dot(row: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(row.len(), x.len());
    row.iter().zip(x).fold(0.0, |acc, (a, v)| acc + a * v)
}

/// Dot product of `row` with `x` skipping column `diag`: Σ_{j≠diag} row[j] * x[j]
#[inline]
pub fn off_diagonal_dot(row: &[f64], x: &[f64], diag: usize) -> f64 {
    debug_assert_eq!(row.len(), x.len());
    let (row_lo, row_hi) = (&row[..diag], &row[diag + 1..]);
    let (x_lo, x_hi) = (&x[..diag], &x[diag + 1..]);
    let lower = row_lo.iter().zip(x_lo).fold(0.0, |acc, (a, v)| acc + a * v);
    row_hi.iter().zip(x_hi).fold(lower, |acc, (a, v)| acc + a * v)
}

/// Sum of absolute values of `row` skipping column `diag`
#[inline]
pub fn off_diagonal_abs_sum(row: &[f64], diag: usize) -> f64 {
    row.iter()
        .enumerate()
        .filter(|&(j, _)| j != diag)
        .fold(0.0, |acc, (_, a)| acc + a.abs())
}
