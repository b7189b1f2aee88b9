//! Word strategies for ISAAC (32-bit) and ISAAC-64 (64-bit)
//!
//! The engine core is generic over [`IsaacWord`]. Everything that differs
//! between the two published variants lives here and is resolved at compile
//! time:
//!
//! - the golden-ratio bootstrap constant
//! - the 8-word mix network used by seeding
//! - the four accumulator transforms applied during a refill
//! - the byte width used by the pool lookup
//!
//! # Indexing
//!
//! Jenkins' C code fetches pool words through a byte offset
//! `x & ((state_size - 1) << log2(word_bytes))`. That is the same slot as the
//! element index `(x >> IND_SHIFT) & (state_size - 1)`, which is what
//! [`IsaacWord::to_index`] computes.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unsigned word type an ISAAC engine operates on
pub trait IsaacWord:
    Copy
    + Eq
    + Default
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseIntError>
    + From<u32>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Variant name used in snapshots ("isaac32" / "isaac64")
    const NAME: &'static str;

    /// Fractional part of the golden ratio at this width
    const GOLDEN: Self;

    const ZERO: Self;
    const MIN: Self;
    const MAX: Self;

    /// log2 of the word width in bytes
    const IND_SHIFT: u32;

    fn wrapping_add(self, rhs: Self) -> Self;

    /// `(self >> shift) & mask` as a pool index
    fn to_index(self, shift: u32, mask: usize) -> usize;

    /// The initializer's 8-word scrambling permutation.
    fn mix(s: &mut [Self; 8]);

    /// Accumulator transform for micro-step `STEP` (0..4) of a refill.
    ///
    /// The returned value is what the paired pool word is added to when
    /// forming the new `a`.
    fn scramble<const STEP: usize>(a: Self) -> Self;
}

macro_rules! word_basics {
    ($t:ty, $name:expr, $golden:expr, $ind_shift:expr) => {
        const NAME: &'static str = $name;
        const GOLDEN: Self = $golden;
        const ZERO: Self = 0;
        const MIN: Self = <$t>::MIN;
        const MAX: Self = <$t>::MAX;
        const IND_SHIFT: u32 = $ind_shift;

        #[inline(always)]
        fn wrapping_add(self, rhs: Self) -> Self {
            <$t>::wrapping_add(self, rhs)
        }

        #[inline(always)]
        fn to_index(self, shift: u32, mask: usize) -> usize {
            (self >> shift) as usize & mask
        }
    };
}

impl IsaacWord for u32 {
    word_basics!(u32, "isaac32", 0x9e37_79b9, 2);

    #[inline]
    #[rustfmt::skip]
    fn mix(s: &mut [u32; 8]) {
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *s;

        a ^= b << 11; d = d.wrapping_add(a); b = b.wrapping_add(c);
        b ^= c >> 2;  e = e.wrapping_add(b); c = c.wrapping_add(d);
        c ^= d << 8;  f = f.wrapping_add(c); d = d.wrapping_add(e);
        d ^= e >> 16; g = g.wrapping_add(d); e = e.wrapping_add(f);
        e ^= f << 10; h = h.wrapping_add(e); f = f.wrapping_add(g);
        f ^= g >> 4;  a = a.wrapping_add(f); g = g.wrapping_add(h);
        g ^= h << 8;  b = b.wrapping_add(g); h = h.wrapping_add(a);
        h ^= a >> 9;  c = c.wrapping_add(h); a = a.wrapping_add(b);

        *s = [a, b, c, d, e, f, g, h];
    }

    #[inline(always)]
    fn scramble<const STEP: usize>(a: u32) -> u32 {
        match STEP {
            0 => a ^ (a << 13),
            1 => a ^ (a >> 6),
            2 => a ^ (a << 2),
            _ => a ^ (a >> 16),
        }
    }
}

impl IsaacWord for u64 {
    word_basics!(u64, "isaac64", 0x9e37_79b9_7f4a_7c13, 3);

    #[inline]
    #[rustfmt::skip]
    fn mix(s: &mut [u64; 8]) {
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *s;

        a = a.wrapping_sub(e); f ^= h >> 9;  h = h.wrapping_add(a);
        b = b.wrapping_sub(f); g ^= a << 9;  a = a.wrapping_add(b);
        c = c.wrapping_sub(g); h ^= b >> 23; b = b.wrapping_add(c);
        d = d.wrapping_sub(h); a ^= c << 15; c = c.wrapping_add(d);
        e = e.wrapping_sub(a); b ^= d >> 14; d = d.wrapping_add(e);
        f = f.wrapping_sub(b); c ^= e << 20; e = e.wrapping_add(f);
        g = g.wrapping_sub(c); d ^= f >> 17; f = f.wrapping_add(g);
        h = h.wrapping_sub(d); e ^= g << 14; g = g.wrapping_add(h);

        *s = [a, b, c, d, e, f, g, h];
    }

    #[inline(always)]
    fn scramble<const STEP: usize>(a: u64) -> u64 {
        match STEP {
            0 => !(a ^ (a << 21)),
            1 => a ^ (a >> 5),
            2 => a ^ (a << 12),
            _ => a ^ (a >> 33),
        }
    }
}
