//! One Jacobi sweep
//!
//! ```text
//! for every row i (in parallel, by contiguous block):
//!     s       = Σ_{j≠i} A[i][j] * x[j]
//!     xnew[i] = (b[i] - s) / A[i][i]
//! ```
//!
//! `x` is borrowed immutably for the whole sweep and `xnew` is split into
//! disjoint row blocks, so no row can observe another row's update. The
//! sweep returns only after every block is written.
//!
//! A zero or tiny diagonal is not checked for; it produces inf/NaN entries.
//! Matrices from [`generate_system`](super::generate_system) never have one.

use crate::error::{Error, Result};
use crate::matrix::DenseMatrix;
use crate::runtime::cpu::CpuClient;
use crate::runtime::cpu::kernels::off_diagonal_dot;
use rayon::prelude::*;

/// Compute the next iterate `xnew` from `x`
pub fn jacobi_sweep(
    client: &CpuClient,
    a: &DenseMatrix,
    b: &[f64],
    x: &[f64],
    xnew: &mut [f64],
) -> Result<()> {
    let n = a.n();
    validate_vector("b", b.len(), n)?;
    validate_vector("x", x.len(), n)?;
    validate_vector("xnew", xnew.len(), n)?;

    let block = client.block_rows(n);
    client.install_parallelism(|| {
        xnew.par_chunks_mut(block)
            .enumerate()
            .for_each(|(blk, out)| {
                let first_row = blk * block;
                for (k, xi) in out.iter_mut().enumerate() {
                    let i = first_row + k;
                    let s = off_diagonal_dot(a.row(i), x, i);
                    *xi = (b[i] - s) / a.diag(i);
                }
            });
    });
    Ok(())
}

pub(crate) fn validate_vector(arg: &'static str, len: usize, n: usize) -> Result<()> {
    if len != n {
        return Err(Error::length_mismatch(arg, n, len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::ParallelismConfig;

    #[test]
    fn test_sweep_small_system() {
        // [4 1; 2 5] x = [1; 2], x0 = [1; 1]
        let a = DenseMatrix::from_vec(2, vec![4.0, 1.0, 2.0, 5.0]).unwrap();
        let client = CpuClient::with_config(ParallelismConfig::new(Some(2), None)).unwrap();
        let mut xnew = vec![0.0; 2];
        jacobi_sweep(&client, &a, &[1.0, 2.0], &[1.0, 1.0], &mut xnew).unwrap();
        assert_eq!(xnew, vec![0.0, 0.0]);

        jacobi_sweep(&client, &a, &[1.0, 2.0], &[0.0, 0.0], &mut xnew).unwrap();
        assert_eq!(xnew, vec![0.25, 0.4]);
    }

    #[test]
    fn test_sweep_reads_only_previous_iterate() {
        // Gauss-Seidel would use the fresh xnew[0] for row 1 and give 0.3
        let a = DenseMatrix::from_vec(2, vec![2.0, 1.0, 1.0, 2.0]).unwrap();
        let client = CpuClient::with_config(ParallelismConfig::new(Some(1), Some(1))).unwrap();
        let mut xnew = vec![0.0; 2];
        jacobi_sweep(&client, &a, &[1.0, 1.0], &[0.0, 0.0], &mut xnew).unwrap();
        assert_eq!(xnew, vec![0.5, 0.5]);
    }

    #[test]
    fn test_length_mismatch() {
        let a = DenseMatrix::from_vec(2, vec![4.0, 1.0, 2.0, 5.0]).unwrap();
        let client = CpuClient::with_config(ParallelismConfig::new(Some(1), None)).unwrap();
        let mut xnew = vec![0.0; 3];
        assert!(matches!(
            jacobi_sweep(&client, &a, &[1.0, 2.0], &[0.0, 0.0], &mut xnew),
            Err(Error::InvalidArgument { arg: "xnew", .. })
        ));
    }
}
