//! Generic ISAAC engine
//!
//! One engine type serves both word widths. [`Isaac<u32, A>`] is ISAAC,
//! [`Isaac<u64, A>`] is ISAAC-64; `A` (alpha) fixes the state size at
//! `2^A` words.
//!
//! # State
//!
//! - `pool`: the generator's memory, rewritten by every refill
//! - `result`: the current batch of output words, consumed back to front
//! - `a`, `b`, `c`: refill accumulators (`c` counts refills)
//! - `cursor`: number of buffered words not yet returned
//!
//! # Determinism
//!
//! Same variant + alpha + seed → same output sequence. Cloning an engine
//! yields an independent engine with an identical future.

mod text;

use crate::error::IsaacError;
use crate::seed::{EntropySequence, EntropySource, SeedSequence};
use crate::word::IsaacWord;
use std::fmt;

/// Default alpha: 256-word state, the published parameter
pub const DEFAULT_ALPHA: usize = 8;

/// ISAAC engine over word type `W` with a state of `2^ALPHA` words
///
/// # Example
/// ```
/// use isaac_engine_core_rs::Isaac64;
///
/// let mut rng = Isaac64::<8>::new(0);
/// let first = rng.next_word();
///
/// let mut again = Isaac64::<8>::new(0);
/// assert_eq!(again.next_word(), first);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Isaac<W: IsaacWord, const ALPHA: usize = 8> {
    result: Box<[W]>,
    pool: Box<[W]>,
    a: W,
    b: W,
    c: W,
    cursor: usize,
}

impl<W: IsaacWord, const ALPHA: usize> Isaac<W, ALPHA> {
    /// Number of words in `pool` and in `result`
    pub const STATE_SIZE: usize = 1 << ALPHA;

    /// Seed used by [`Default`] and [`Isaac::seed_default`]
    pub const DEFAULT_SEED: u32 = 0;

    const MASK: usize = Self::STATE_SIZE - 1;

    // Seeding walks the pool 8 words at a time and the second lookup shifts
    // a word right by ALPHA + IND_SHIFT, so both bounds are hard limits.
    const VALID_ALPHA: () = assert!(
        ALPHA >= 3 && ALPHA <= 16,
        "ISAAC alpha must be in 3..=16 (state of 8 to 65536 words)"
    );

    /// Allocate zeroed buffers. Callers must seed before handing it out.
    fn blank() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_ALPHA;

        Self {
            result: vec![W::ZERO; Self::STATE_SIZE].into_boxed_slice(),
            pool: vec![W::ZERO; Self::STATE_SIZE].into_boxed_slice(),
            a: W::ZERO,
            b: W::ZERO,
            c: W::ZERO,
            cursor: 0,
        }
    }

    /// Create an engine by broadcasting `seed` into every seed slot
    pub fn new(seed: W) -> Self {
        let mut engine = Self::blank();
        engine.seed(seed);
        engine
    }

    /// Create an engine from a seed sequence filling `STATE_SIZE` words
    pub fn from_seed_sequence<S: SeedSequence<W> + ?Sized>(seq: &mut S) -> Self {
        let mut engine = Self::blank();
        engine.seed_from_sequence(seq);
        engine
    }

    /// Create an engine from seed words, cycling them if there are fewer
    /// than `STATE_SIZE`
    ///
    /// Words must convert losslessly into `W` (`u8`/`u16`/`u32` keys work
    /// for both variants). A `u64` key for a 32-bit engine is rejected at
    /// compile time; narrow it explicitly with `as u32` first.
    ///
    /// ```compile_fail
    /// use isaac_engine_core_rs::Isaac32;
    ///
    /// let _ = Isaac32::<4>::from_words([1u64, 2, 3]);
    /// ```
    ///
    /// # Errors
    /// [`IsaacError::EmptySeedRange`] if `words` yields nothing.
    ///
    /// # Example
    /// ```
    /// use isaac_engine_core_rs::{Isaac32, IsaacError};
    ///
    /// let rng = Isaac32::<4>::from_words([1u32, 2, 3]).unwrap();
    /// assert_eq!(rng.cursor(), 16);
    ///
    /// let empty: [u32; 0] = [];
    /// assert_eq!(Isaac32::<4>::from_words(empty).unwrap_err(), IsaacError::EmptySeedRange);
    /// ```
    pub fn from_words<I>(words: I) -> Result<Self, IsaacError>
    where
        I: IntoIterator,
        I::IntoIter: Clone,
        I::Item: Into<W>,
    {
        let mut engine = Self::blank();
        engine.seed_from_words(words)?;
        Ok(engine)
    }

    /// Create an engine keyed with `STATE_SIZE` words drawn from `source`
    pub fn from_entropy<E: EntropySource<W> + ?Sized>(source: &mut E) -> Self {
        let mut engine = Self::blank();
        engine.seed_from_entropy(source);
        engine
    }

    /// Smallest value [`Isaac::next_word`] can return
    pub fn min() -> W {
        W::MIN
    }

    /// Largest value [`Isaac::next_word`] can return
    pub fn max() -> W {
        W::MAX
    }

    pub fn state_size(&self) -> usize {
        Self::STATE_SIZE
    }

    /// Re-seed in place with a scalar broadcast into every seed slot
    pub fn seed(&mut self, seed: W) {
        log::debug!("{} seeding from scalar {}", W::NAME, seed);
        self.result.fill(seed);
        self.init();
    }

    /// Re-seed in place with [`Isaac::DEFAULT_SEED`]
    pub fn seed_default(&mut self) {
        self.seed(W::from(Self::DEFAULT_SEED));
    }

    /// Re-seed in place from a seed sequence
    pub fn seed_from_sequence<S: SeedSequence<W> + ?Sized>(&mut self, seq: &mut S) {
        log::debug!("{} seeding from sequence ({} words)", W::NAME, Self::STATE_SIZE);
        let mut key = vec![W::ZERO; Self::STATE_SIZE];
        seq.generate(&mut key);
        self.result.copy_from_slice(&key);
        self.init();
    }

    /// Re-seed in place from seed words, cycling them if short
    ///
    /// On error the engine is left exactly as it was.
    pub fn seed_from_words<I>(&mut self, words: I) -> Result<(), IsaacError>
    where
        I: IntoIterator,
        I::IntoIter: Clone,
        I::Item: Into<W>,
    {
        let words = words.into_iter();
        if words.clone().next().is_none() {
            log::warn!("{} range seed rejected: no seed words", W::NAME);
            return Err(IsaacError::EmptySeedRange);
        }

        log::debug!("{} seeding from word range", W::NAME);
        self.load_key(words.map(Into::<W>::into));
        Ok(())
    }

    /// Range seed from an in-memory key the caller knows is non-empty
    pub(crate) fn from_key(key: &[W]) -> Self {
        let mut engine = Self::blank();
        engine.load_key(key.iter().copied());
        engine
    }

    /// Cycle `words` across the seed slots and initialize. `words` must
    /// yield at least one item.
    fn load_key<It: Iterator<Item = W> + Clone>(&mut self, words: It) {
        for (slot, word) in self.result.iter_mut().zip(words.cycle()) {
            *slot = word;
        }
        self.init();
    }

    /// Re-seed in place with `STATE_SIZE` words drawn from `source`
    pub fn seed_from_entropy<E: EntropySource<W> + ?Sized>(&mut self, source: &mut E) {
        self.seed_from_sequence(&mut EntropySequence(source));
    }

    /// Return the next output word
    ///
    /// Buffered words are handed out from the top of the result buffer
    /// down; when none remain the pool is refilled first.
    #[inline]
    pub fn next_word(&mut self) -> W {
        if self.cursor == 0 {
            self.refill();
            self.cursor = Self::STATE_SIZE;
        }
        self.cursor -= 1;
        self.result[self.cursor]
    }

    /// Endless iterator over the output stream
    ///
    /// ```
    /// use isaac_engine_core_rs::Isaac32;
    ///
    /// let mut rng = Isaac32::<8>::new(1);
    /// let batch: Vec<u32> = rng.words().take(4).collect();
    /// assert_eq!(batch.len(), 4);
    /// ```
    pub fn words(&mut self) -> Words<'_, W, ALPHA> {
        Words { engine: self }
    }

    /// Advance by `count` words, discarding them
    pub fn discard(&mut self, count: u64) {
        for _ in 0..count {
            self.next_word();
        }
    }

    /// Buffered words not yet returned (`0..=STATE_SIZE`)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Refill counter `c`
    pub fn counter(&self) -> W {
        self.c
    }

    /// Refill feedback accumulators `(a, b)`
    pub fn accumulators(&self) -> (W, W) {
        (self.a, self.b)
    }

    /// Current batch of output words (index `cursor - 1` is returned next)
    pub fn results(&self) -> &[W] {
        &self.result
    }

    pub fn pool(&self) -> &[W] {
        &self.pool
    }

    /// Turn the key in `result` into a pool and produce the first batch.
    fn init(&mut self) {
        self.a = W::ZERO;
        self.b = W::ZERO;
        self.c = W::ZERO;

        let mut acc = [W::GOLDEN; 8];
        for _ in 0..4 {
            W::mix(&mut acc);
        }

        // First pass absorbs the key, second spreads every key word over
        // the whole pool.
        for i in (0..Self::STATE_SIZE).step_by(8) {
            absorb(&mut acc, &self.result[i..i + 8]);
            W::mix(&mut acc);
            self.pool[i..i + 8].copy_from_slice(&acc);
        }
        for i in (0..Self::STATE_SIZE).step_by(8) {
            absorb(&mut acc, &self.pool[i..i + 8]);
            W::mix(&mut acc);
            self.pool[i..i + 8].copy_from_slice(&acc);
        }

        self.refill();
        self.cursor = Self::STATE_SIZE;
    }

    /// Rewrite `pool` and `result` from the previous state.
    ///
    /// Each of the two passes walks half the pool while reading its partner
    /// word from the other half, four micro-steps per iteration.
    fn refill(&mut self) {
        self.c = self.c.wrapping_add(W::from(1u32));
        let mut a = self.a;
        let mut b = self.b.wrapping_add(self.c);

        let half = Self::STATE_SIZE / 2;
        for (base, partner) in [(0, half), (half, 0)] {
            for i in (0..half).step_by(4) {
                self.step::<0>(&mut a, &mut b, base + i, partner + i);
                self.step::<1>(&mut a, &mut b, base + i + 1, partner + i + 1);
                self.step::<2>(&mut a, &mut b, base + i + 2, partner + i + 2);
                self.step::<3>(&mut a, &mut b, base + i + 3, partner + i + 3);
            }
        }

        self.a = a;
        self.b = b;
        log::trace!("{} refill #{}", W::NAME, self.c);
    }

    #[inline(always)]
    fn step<const STEP: usize>(&mut self, a: &mut W, b: &mut W, m: usize, m2: usize) {
        let x = self.pool[m];
        *a = W::scramble::<STEP>(*a).wrapping_add(self.pool[m2]);
        let y = self.pool[x.to_index(W::IND_SHIFT, Self::MASK)]
            .wrapping_add(*a)
            .wrapping_add(*b);
        self.pool[m] = y;
        *b = self.pool[y.to_index(ALPHA as u32 + W::IND_SHIFT, Self::MASK)].wrapping_add(x);
        self.result[m] = *b;
    }
}

#[inline(always)]
fn absorb<W: IsaacWord>(acc: &mut [W; 8], chunk: &[W]) {
    for (slot, word) in acc.iter_mut().zip(chunk) {
        *slot = slot.wrapping_add(*word);
    }
}

/// Iterator returned by [`Isaac::words`]; never yields `None`
pub struct Words<'a, W: IsaacWord, const ALPHA: usize> {
    engine: &'a mut Isaac<W, ALPHA>,
}

impl<W: IsaacWord, const ALPHA: usize> Iterator for Words<'_, W, ALPHA> {
    type Item = W;

    #[inline]
    fn next(&mut self) -> Option<W> {
        Some(self.engine.next_word())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<W: IsaacWord, const ALPHA: usize> Default for Isaac<W, ALPHA> {
    fn default() -> Self {
        Self::new(W::from(Self::DEFAULT_SEED))
    }
}

impl<W: IsaacWord, const ALPHA: usize> EntropySource<W> for Isaac<W, ALPHA> {
    fn next_word(&mut self) -> W {
        Isaac::next_word(self)
    }
}

// Full state is available through Display; keep Debug short.
impl<W: IsaacWord, const ALPHA: usize> fmt::Debug for Isaac<W, ALPHA> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Isaac")
            .field("variant", &W::NAME)
            .field("alpha", &ALPHA)
            .field("cursor", &self.cursor)
            .field("counter", &self.c)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Small32 = Isaac<u32, 4>;
    type Small64 = Isaac<u64, 4>;

    #[test]
    fn test_fresh_engine_has_full_buffer() {
        let rng = Small32::new(7);
        assert_eq!(rng.cursor(), 16);
        assert_eq!(rng.counter(), 1, "init performs exactly one refill");
        assert_eq!(rng.results().len(), 16);
        assert_eq!(rng.pool().len(), 16);
    }

    #[test]
    fn test_words_consumed_back_to_front() {
        let mut rng = Small64::new(99);
        let batch = rng.results().to_vec();

        for expected in batch.iter().rev() {
            assert_eq!(rng.next_word(), *expected);
        }
        assert_eq!(rng.cursor(), 0);
    }

    #[test]
    fn test_reseed_discards_prior_state() {
        let mut rng = Small32::new(1);
        rng.discard(37);
        rng.seed(1);
        assert_eq!(rng, Small32::new(1));
    }

    #[test]
    fn test_default_uses_zero_seed() {
        assert_eq!(Small64::default(), Small64::new(0));

        let mut rng = Small64::new(5);
        rng.seed_default();
        assert_eq!(rng, Small64::new(0));
    }

    #[test]
    fn test_failed_range_seed_leaves_state() {
        let mut rng = Small32::new(3);
        rng.discard(5);
        let before = rng.clone();

        let empty: Vec<u32> = Vec::new();
        assert_eq!(rng.seed_from_words(empty), Err(IsaacError::EmptySeedRange));
        assert_eq!(rng, before);
    }

    #[test]
    fn test_smallest_alpha_works() {
        let mut rng = Isaac::<u32, 3>::new(0);
        rng.discard(24);
        assert_eq!(rng.cursor(), 0);
        assert_eq!(rng.counter(), 3);
    }

    #[test]
    fn test_bounds_cover_word_range() {
        assert_eq!(Small32::min(), 0);
        assert_eq!(Small32::max(), u32::MAX);
        assert_eq!(Small64::min(), 0);
        assert_eq!(Small64::max(), u64::MAX);
    }

    #[test]
    fn test_words_iterator_follows_next_word() {
        let mut a = Small32::new(8);
        let mut b = a.clone();

        let taken: Vec<u32> = a.words().take(20).collect();
        let direct: Vec<u32> = (0..20).map(|_| b.next_word()).collect();
        assert_eq!(taken, direct);
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_key_matches_from_words() {
        let key = [4u64, 5, 6];
        assert_eq!(Small64::from_key(&key), Small64::from_words(key).unwrap());
    }

    #[test]
    fn test_debug_is_compact() {
        let rng = Small64::new(0);
        let dbg = format!("{:?}", rng);
        assert!(dbg.contains("isaac64"));
        assert!(dbg.contains("cursor: 16"));
        assert!(dbg.len() < 200);
    }
}
