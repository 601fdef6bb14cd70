//! Random diagonally dominant system generation
//!
//! Row i draws, in order, from `RowStream::new(seed, i)`:
//!
//! ```text
//! A[i][0..n]  ~ U(-1, 1)                    n draws
//! A[i][i]     = Σ_{j≠i} |A[i][j]| + 1 + |e|  e ~ U(-1, 1)
//! b[i]        ~ U(-1, 1)
//! ```
//!
//! The diagonal overwrites its own first draw, so every row is strictly
//! dominant by at least 1. Because each row owns its stream, A and b are
//! bit-identical for any worker count or block order.

use crate::error::{Error, Result};
use crate::matrix::DenseMatrix;
use crate::runtime::cpu::CpuClient;
use crate::runtime::cpu::kernels::{RowStream, off_diagonal_abs_sum};
use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

/// Generate a diagonally dominant n×n matrix A and right-hand side b
pub fn generate_system(client: &CpuClient, n: usize, seed: u64) -> Result<(DenseMatrix, Vec<f64>)> {
    if n == 0 {
        return Err(Error::InvalidDimension { n });
    }

    let mut a = DenseMatrix::zeros(n)?;
    let mut b = vec![0.0; n];
    let block = client.block_rows(n).min(n);

    let a_data = a.as_mut_slice();
    let b_data = b.as_mut_slice();
    client.install_parallelism(|| {
        a_data
            .par_chunks_mut(block * n)
            .zip(b_data.par_chunks_mut(block))
            .enumerate()
            .for_each(|(blk, (a_rows, b_rows))| {
                let first_row = blk * block;
                for (k, (row, b_i)) in a_rows.chunks_mut(n).zip(b_rows.iter_mut()).enumerate() {
                    fill_row(seed, first_row + k, row, b_i);
                }
            });
    });

    debug!(n, seed, block, "generated system");
    Ok((a, b))
}

fn fill_row(seed: u64, i: usize, row: &mut [f64], b_i: &mut f64) {
    let mut rng = RowStream::new(seed, i as u64);
    for value in row.iter_mut() {
        *value = rng.random_range(-1.0..1.0);
    }
    let offsum = off_diagonal_abs_sum(row, i);
    let extra: f64 = rng.random_range(-1.0..1.0);
    row[i] = offsum + 1.0 + extra.abs();
    *b_i = rng.random_range(-1.0..1.0);
}
