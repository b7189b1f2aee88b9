//! Variant facades
//!
//! [`Isaac32`] is Bob Jenkins' ISAAC over 32-bit words, [`Isaac64`] is
//! ISAAC-64. Both default to alpha 8 (a 256-word state); alpha 4 gives a
//! 16-word state for non-cryptographic use.

use crate::isaac::Isaac;

/// ISAAC: 32-bit words, `2^ALPHA` words of state
pub type Isaac32<const ALPHA: usize = 8> = Isaac<u32, ALPHA>;

/// ISAAC-64: 64-bit words, `2^ALPHA` words of state
pub type Isaac64<const ALPHA: usize = 8> = Isaac<u64, ALPHA>;
