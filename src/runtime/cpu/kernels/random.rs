//! Per-row PCG64 random streams
//!
//! Permuted congruential generator from O'Neill "PCG: A Family of Simple Fast
//! Space-Efficient Statistically Good Algorithms for Random Number Generation" (2014),
//! XSL-RR 128/64 variant. The state is seeded from the run seed via SplitMix64
//! and the row index selects the stream (the LCG increment), so the sequence a
//! row consumes depends only on `(seed, row)`.

use rand::RngCore;
use rand::rand_core::impls;

const PCG64_MULTIPLIER: u128 = 0x2360ed051fc65da44385df649fccf645u128;

/// SplitMix64 step, used to spread a 64-bit seed over the 128-bit state
#[inline(always)]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Random stream reserved for one matrix row
#[derive(Debug, Clone)]
pub struct RowStream {
    state: u128,
    increment: u128,
}

impl RowStream {
    /// Create the stream for `row` under run seed `seed`
    pub fn new(seed: u64, row: u64) -> Self {
        let mut sm_state = seed;
        let hi = splitmix64(&mut sm_state) as u128;
        let lo = splitmix64(&mut sm_state) as u128;

        let mut stream = Self {
            state: 0,
            increment: ((row as u128) << 1) | 1,
        };
        stream.step();
        stream.state = stream.state.wrapping_add((hi << 64) | lo);
        stream.step();
        stream
    }

    /// PCG64 state advance with XSL-RR output function
    #[inline(always)]
    fn step(&mut self) -> u64 {
        let old_state = self.state;
        self.state = old_state
            .wrapping_mul(PCG64_MULTIPLIER)
            .wrapping_add(self.increment);

        let xorshifted = ((old_state >> 64) ^ old_state) as u64;
        let rot = (old_state >> 122) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngCore for RowStream {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}
