//! `rand_core` integration
//!
//! Lets the engines drive anything written against [`RngCore`], and be built
//! through [`SeedableRng`]. A 32-byte seed is read little-endian into words
//! and range-seeded, so it cycles across the whole key.

use crate::isaac::Isaac;
use rand_core::{impls, le, Error, RngCore, SeedableRng};

impl<const ALPHA: usize> RngCore for Isaac<u32, ALPHA> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<const ALPHA: usize> RngCore for Isaac<u64, ALPHA> {
    /// Low half of the next 64-bit word
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<const ALPHA: usize> SeedableRng for Isaac<u32, ALPHA> {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u32; 8];
        le::read_u32_into(&seed, &mut words);
        Self::from_key(&words)
    }
}

impl<const ALPHA: usize> SeedableRng for Isaac<u64, ALPHA> {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u64; 4];
        le::read_u64_into(&seed, &mut words);
        Self::from_key(&words)
    }
}
