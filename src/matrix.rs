//! Dense row-major square matrix

use crate::error::{Error, Result};
use crate::runtime::cpu::kernels::off_diagonal_abs_sum;

/// Dense n×n matrix stored row-major in one contiguous buffer
///
/// Element `(i, j)` lives at `i * n + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Create an n×n matrix of zeros
    pub fn zeros(n: usize) -> Result<Self> {
        let len = element_count(n)?;
        Ok(Self {
            n,
            data: vec![0.0; len],
        })
    }

    /// Wrap a row-major buffer of length `n * n`
    ///
    /// No structural property is checked beyond the shape. Matrices built here
    /// may violate diagonal dominance, in which case Jacobi iteration may
    /// diverge or divide by a zero diagonal.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        let len = element_count(n)?;
        if data.len() != len {
            return Err(Error::length_mismatch("data", len, data.len()));
        }
        Ok(Self { n, data })
    }

    /// Number of rows (and columns)
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Element at row `i`, column `j`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Diagonal element of row `i`
    #[inline]
    pub fn diag(&self, i: usize) -> f64 {
        self.get(i, i)
    }

    /// The row-major buffer
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Whether |a_ii| > Σ_{j≠i} |a_ij| holds for every row
    pub fn is_diagonally_dominant(&self) -> bool {
        (0..self.n).all(|i| self.diag(i).abs() > off_diagonal_abs_sum(self.row(i), i))
    }
}

/// Buffer length of an n×n matrix; rejects n = 0 and sizes that overflow `usize`
fn element_count(n: usize) -> Result<usize> {
    match n.checked_mul(n) {
        Some(len) if n > 0 => Ok(len),
        _ => Err(Error::InvalidDimension { n }),
    }
}
