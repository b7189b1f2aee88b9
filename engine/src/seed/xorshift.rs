//! xorshift64* generator
//!
//! A tiny PRNG with 64 bits of state. It is used to derive ISAAC keys from a
//! single scalar, and as the baseline in the throughput benchmark.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of words.

use super::EntropySource;
use serde::{Deserialize, Serialize};

/// Deterministic xorshift64* generator
///
/// # Example
/// ```
/// use isaac_engine_core_rs::seed::Xorshift64Star;
/// use isaac_engine_core_rs::Isaac64;
///
/// let mut source = Xorshift64Star::new(12345);
/// let rng = Isaac64::<8>::from_entropy(&mut source);
/// assert_eq!(rng.cursor(), 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64Star {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl Xorshift64Star {
    /// Create a new generator with given seed
    ///
    /// A zero seed is replaced by 1: xorshift state must be non-zero.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next u64 value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate next u32 value (high half of the 64-bit output)
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Current internal state (for checkpointing/replay)
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

impl EntropySource<u64> for Xorshift64Star {
    fn next_word(&mut self) -> u64 {
        self.next_u64()
    }
}

impl EntropySource<u32> for Xorshift64Star {
    fn next_word(&mut self) -> u32 {
        self.next_u32()
    }
}
