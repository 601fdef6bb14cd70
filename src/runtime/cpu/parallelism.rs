//! Worker-team sizing and row partitioning

use tracing::warn;

/// Parallelism settings for a [`CpuClient`](super::CpuClient)
///
/// - `num_threads`: requested worker count. `None` uses the platform maximum;
///   any value is clamped to `[1, max_threads()]`.
/// - `chunk_size`: rows per parallel block. `None` splits the rows into one
///   contiguous block per worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParallelismConfig {
    /// Requested worker count
    pub num_threads: Option<usize>,
    /// Rows per block
    pub chunk_size: Option<usize>,
}

impl ParallelismConfig {
    /// Create a new parallelism configuration
    pub fn new(num_threads: Option<usize>, chunk_size: Option<usize>) -> Self {
        Self {
            num_threads,
            chunk_size,
        }
    }

    /// Worker count actually used, after clamping to the platform limits
    pub fn resolve_threads(&self) -> usize {
        let max = max_threads();
        match self.num_threads {
            None => max,
            Some(requested) => {
                let clamped = requested.clamp(1, max);
                if clamped != requested {
                    warn!(requested, clamped, max, "thread count clamped");
                }
                clamped
            }
        }
    }

    /// Rows per block for an `n`-row system split across `threads` workers
    pub fn block_rows(&self, n: usize, threads: usize) -> usize {
        match self.chunk_size {
            Some(chunk) => chunk.max(1),
            None => n.div_ceil(threads.max(1)).max(1),
        }
    }
}

/// Platform maximum worker count
///
/// Mirrors the global rayon pool, so `RAYON_NUM_THREADS` lowers it. Must be
/// called outside of any client pool to see the platform value.
pub fn max_threads() -> usize {
    rayon::current_num_threads().max(1)
}
