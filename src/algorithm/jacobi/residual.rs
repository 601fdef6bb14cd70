//! Relative residual ||A x - b|| / ||b||
//!
//! Each block sums its rows' squared residuals sequentially, and the block
//! partials are then added in block order. The value is therefore reproducible
//! for a fixed block layout, but different thread counts may change the last
//! bits. Compare residuals across thread counts with a tolerance.

use super::sweep::validate_vector;
use crate::error::Result;
use crate::matrix::DenseMatrix;
use crate::runtime::cpu::CpuClient;
use crate::runtime::cpu::kernels::row_dot;
use rayon::prelude::*;

/// ||b||₂, with a zero norm replaced by 1
pub fn rhs_norm(b: &[f64]) -> f64 {
    let norm = b.iter().fold(0.0, |acc, v| acc + v * v).sqrt();
    if norm == 0.0 { 1.0 } else { norm }
}

/// ||A x - b||₂ / `normb`
pub fn relative_residual(
    client: &CpuClient,
    a: &DenseMatrix,
    b: &[f64],
    x: &[f64],
    normb: f64,
) -> Result<f64> {
    let n = a.n();
    validate_vector("b", b.len(), n)?;
    validate_vector("x", x.len(), n)?;

    let block = client.block_rows(n).min(n);
    let partials: Vec<f64> = client.install_parallelism(|| {
        (0..n.div_ceil(block))
            .into_par_iter()
            .map(|blk| {
                let rows = blk * block..((blk + 1) * block).min(n);
                rows.fold(0.0, |acc, i| {
                    let ri = row_dot(a.row(i), x) - b[i];
                    acc + ri * ri
                })
            })
            .collect()
    });

    let rnorm2 = partials.iter().fold(0.0, |acc, p| acc + p);
    Ok(rnorm2.sqrt() / normb)
}
