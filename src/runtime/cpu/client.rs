//! CPU client: the worker team for one or more solver runs

use super::parallelism::ParallelismConfig;
use crate::error::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;
use tracing::debug;

/// CPU client for parallel region dispatch
///
/// Owns a fixed-size rayon pool sized once from a [`ParallelismConfig`].
/// Cloning shares the pool.
#[derive(Clone, Debug)]
pub struct CpuClient {
    pool: Arc<ThreadPool>,
    parallelism: ParallelismConfig,
    num_threads: usize,
}

impl CpuClient {
    /// Create a client using every available worker
    pub fn new() -> Result<Self> {
        Self::with_config(ParallelismConfig::default())
    }

    /// Create a client with an explicit parallelism configuration
    pub fn with_config(parallelism: ParallelismConfig) -> Result<Self> {
        let num_threads = parallelism.resolve_threads();
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("jacobi-worker-{i}"))
            .build()?;
        debug!(num_threads, chunk_size = ?parallelism.chunk_size, "worker pool ready");
        Ok(Self {
            pool: Arc::new(pool),
            parallelism,
            num_threads,
        })
    }

    /// Derive a client with different parallelism settings
    ///
    /// The pool is shared with `self` when the resolved worker count is
    /// unchanged; only the block size differs then.
    pub fn with_parallelism(&self, parallelism: ParallelismConfig) -> Result<Self> {
        if parallelism.resolve_threads() == self.num_threads {
            return Ok(Self {
                pool: Arc::clone(&self.pool),
                parallelism,
                num_threads: self.num_threads,
            });
        }
        Self::with_config(parallelism)
    }

    /// Number of workers in the team
    #[inline]
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// The configuration this client was built from
    #[inline]
    pub fn parallelism(&self) -> ParallelismConfig {
        self.parallelism
    }

    /// Rows per contiguous block for an `n`-row system
    #[inline]
    pub fn block_rows(&self, n: usize) -> usize {
        self.parallelism.block_rows(n, self.num_threads)
    }

    /// Run a parallel region on this client's pool
    ///
    /// Returns only after every task spawned inside `op` has finished.
    pub fn install_parallelism<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}
