//! Seed material for the engines
//!
//! The engines only need "give me N words" ([`SeedSequence`]) or "give me
//! one word" ([`EntropySource`]). Where those words come from is up to the
//! caller:
//!
//! - [`SeedSeq`]: spreads a short list of 32-bit entropy words over any
//!   number of output words
//! - [`Xorshift64Star`]: small deterministic generator, also the benchmark
//!   baseline
//! - any ISAAC engine, which lets an engine seed its successor

mod seed_seq;
mod xorshift;

pub use seed_seq::SeedSeq;
pub use xorshift::Xorshift64Star;

/// Fills a buffer of words deterministically
pub trait SeedSequence<W> {
    /// Overwrite every element of `dest`
    fn generate(&mut self, dest: &mut [W]);
}

/// Produces one word on demand
pub trait EntropySource<W> {
    fn next_word(&mut self) -> W;
}

impl<W, E: EntropySource<W> + ?Sized> EntropySource<W> for &mut E {
    fn next_word(&mut self) -> W {
        (**self).next_word()
    }
}

/// Adapts an [`EntropySource`] into a [`SeedSequence`], one draw per slot
///
/// # Example
/// ```
/// use isaac_engine_core_rs::seed::{EntropySequence, SeedSequence, Xorshift64Star};
///
/// let mut seq = EntropySequence(Xorshift64Star::new(7));
/// let mut key = [0u64; 4];
/// seq.generate(&mut key[..]);
/// assert!(key.iter().all(|&w| w != 0));
/// ```
#[derive(Debug, Clone)]
pub struct EntropySequence<E>(pub E);

impl<W, E: EntropySource<W>> SeedSequence<W> for EntropySequence<E> {
    fn generate(&mut self, dest: &mut [W]) {
        for slot in dest.iter_mut() {
            *slot = self.0.next_word();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);

    impl EntropySource<u32> for Counter {
        fn next_word(&mut self) -> u32 {
            self.0 += 1;
            self.0
        }
    }

    #[test]
    fn test_entropy_sequence_draws_in_order() {
        let mut seq = EntropySequence(Counter(0));
        let mut dest = [0u32; 5];
        seq.generate(&mut dest[..]);
        assert_eq!(dest, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut counter = Counter(10);
        {
            let mut seq = EntropySequence(&mut counter);
            let mut dest = [0u32; 2];
            seq.generate(&mut dest[..]);
            assert_eq!(dest, [11, 12]);
        }
        assert_eq!(counter.next_word(), 13);
    }
}
