//! CPU runtime implementation
//!
//! Every parallel region runs on the client's fixed-size thread pool. Rows are
//! statically split into contiguous blocks; each block is one task and the end
//! of the region is the barrier before the next phase may read its output.

mod client;
pub mod kernels;
mod parallelism;

pub use client::CpuClient;
pub use parallelism::{ParallelismConfig, max_threads};
