//! Seed sequence that stretches a short entropy list over a full key
//!
//! This is the mixing procedure of the standard `seed_seq`: every output
//! word depends on every input word, and an empty input still yields a
//! well-mixed (fixed) key.

use super::SeedSequence;

const INIT_FILL: u32 = 0x8b8b_8b8b;
const MULT_FIRST: u32 = 1_664_525;
const MULT_SECOND: u32 = 1_566_083_941;

/// Deterministic seed sequence over a list of 32-bit entropy words
///
/// # Example
/// ```
/// use isaac_engine_core_rs::seed::SeedSeq;
/// use isaac_engine_core_rs::Isaac32;
///
/// let mut seq = SeedSeq::new([1, 2, 3, 4, 5]);
/// let a = Isaac32::<8>::from_seed_sequence(&mut seq);
/// let b = Isaac32::<8>::from_seed_sequence(&mut seq);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSeq {
    entropy: Vec<u32>,
}

impl SeedSeq {
    pub fn new<I: IntoIterator<Item = u32>>(entropy: I) -> Self {
        Self {
            entropy: entropy.into_iter().collect(),
        }
    }

    /// Number of stored entropy words
    pub fn size(&self) -> usize {
        self.entropy.len()
    }

    /// Stored entropy words
    pub fn param(&self) -> &[u32] {
        &self.entropy
    }

    /// Fill `dest` with mixed 32-bit words
    pub fn generate_u32(&self, dest: &mut [u32]) {
        let n = dest.len();
        if n == 0 {
            return;
        }
        dest.fill(INIT_FILL);

        let s = self.entropy.len();
        let t = if n >= 623 {
            11
        } else if n >= 68 {
            7
        } else if n >= 39 {
            5
        } else if n >= 7 {
            3
        } else {
            (n - 1) / 2
        };
        let p = (n - t) / 2;
        let q = p + t;
        let m = (s + 1).max(n);

        for k in 0..m {
            let r1 = MULT_FIRST
                .wrapping_mul(tempered(dest[k % n] ^ dest[(k + p) % n] ^ dest[(k + n - 1) % n]));
            let r2 = if k == 0 {
                r1.wrapping_add(s as u32)
            } else if k <= s {
                r1.wrapping_add((k % n) as u32).wrapping_add(self.entropy[k - 1])
            } else {
                r1.wrapping_add((k % n) as u32)
            };
            dest[(k + p) % n] = dest[(k + p) % n].wrapping_add(r1);
            dest[(k + q) % n] = dest[(k + q) % n].wrapping_add(r2);
            dest[k % n] = r2;
        }

        for k in m..m + n {
            let r3 = MULT_SECOND.wrapping_mul(tempered(
                dest[k % n]
                    .wrapping_add(dest[(k + p) % n])
                    .wrapping_add(dest[(k + n - 1) % n]),
            ));
            let r4 = r3.wrapping_sub((k % n) as u32);
            dest[(k + p) % n] ^= r3;
            dest[(k + q) % n] ^= r4;
            dest[k % n] = r4;
        }
    }
}

#[inline]
fn tempered(x: u32) -> u32 {
    x ^ (x >> 27)
}

impl<W: From<u32>> SeedSequence<W> for SeedSeq {
    fn generate(&mut self, dest: &mut [W]) {
        let mut words = vec![0u32; dest.len()];
        self.generate_u32(&mut words);
        for (slot, word) in dest.iter_mut().zip(words) {
            *slot = W::from(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let seq = SeedSeq::new([1, 2, 3, 4, 5]);
        let mut first = [0u32; 16];
        let mut second = [0u32; 16];
        seq.generate_u32(&mut first);
        seq.generate_u32(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_input_word_matters() {
        let mut base = [0u32; 32];
        SeedSeq::new([1, 2, 3, 4, 5]).generate_u32(&mut base);

        let mut changed = [0u32; 32];
        SeedSeq::new([1, 2, 3, 4, 6]).generate_u32(&mut changed);

        let differing = base.iter().zip(changed.iter()).filter(|(a, b)| a != b).count();
        assert!(differing > 24, "only {} of 32 words changed", differing);
    }

    #[test]
    fn test_empty_destination_is_noop() {
        let mut dest: [u32; 0] = [];
        SeedSeq::new([9]).generate_u32(&mut dest);
    }

    #[test]
    fn test_empty_entropy_still_mixes() {
        let mut dest = [0u32; 8];
        SeedSeq::default().generate_u32(&mut dest);
        assert!(dest.iter().all(|&w| w != INIT_FILL));
    }

    #[test]
    fn test_wide_words_receive_32_bit_values() {
        let mut seq = SeedSeq::new([42]);
        let mut wide = [0u64; 10];
        SeedSequence::<u64>::generate(&mut seq, &mut wide[..]);

        let mut narrow = [0u32; 10];
        seq.generate_u32(&mut narrow);

        for (w, n) in wide.iter().zip(narrow.iter()) {
            assert_eq!(*w, *n as u64);
        }
    }

    #[test]
    fn test_tiny_outputs() {
        for n in 1..8 {
            let mut dest = vec![0u32; n];
            SeedSeq::new([7, 8]).generate_u32(&mut dest);
        }
    }
}
