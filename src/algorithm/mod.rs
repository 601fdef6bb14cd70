//! Solver algorithms
//!
//! # Available Algorithms
//!
//! - [`jacobi`] - Jacobi fixed-point iteration for dense diagonally dominant
//!   systems, row-parallel on the CPU runtime

pub mod jacobi;
