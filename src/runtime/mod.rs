//! Runtime backends for the solver
//!
//! The CPU backend owns the worker team (a rayon thread pool) and the
//! row-level kernels that every parallel region is built from.
//!
//! # Architecture
//!
//! ```text
//! CpuClient (worker team, block partitioning)
//! ├── ParallelismConfig (thread count, block size)
//! └── kernels
//!     ├── random (per-row PCG streams)
//!     └── row (dot products over one matrix row)
//! ```

pub mod cpu;

pub use cpu::{CpuClient, ParallelismConfig};
