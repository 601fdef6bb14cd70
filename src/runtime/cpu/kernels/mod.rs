//! CPU kernel implementations
//!
//! Low-level building blocks shared by the parallel regions: per-row random
//! streams and per-row reductions.

pub mod random;
pub mod row;

pub use random::RowStream;
pub use row::{off_diagonal_abs_sum, off_diagonal_dot, row_dot};
