//! Bulk generation timing: an ISAAC engine against the xorshift64* baseline

use crate::error::CliError;
use isaac_engine_core_rs::{Isaac, IsaacWord, Xorshift64Star};
use std::fmt;
use std::hint::black_box;
use std::mem;
use std::time::{Duration, Instant};

/// Word widths the benchmark can drive
pub trait BenchWord: IsaacWord {
    /// Seed word from the 64-bit command-line seed (truncating)
    fn from_seed(seed: u64) -> Self;

    fn widen(self) -> u64;
}

impl BenchWord for u32 {
    fn from_seed(seed: u64) -> Self {
        seed as u32
    }

    fn widen(self) -> u64 {
        self as u64
    }
}

impl BenchWord for u64 {
    fn from_seed(seed: u64) -> Self {
        seed
    }

    fn widen(self) -> u64 {
        self
    }
}

/// One generator's run
#[derive(Debug, Clone)]
pub struct Timing {
    pub name: &'static str,
    pub words: u64,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct BenchReport {
    pub bytes: u64,
    pub isaac: Timing,
    pub baseline: Timing,

    /// Wrapping sum of every generated word, keeps the loops observable
    pub checksum: u64,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generating {} bytes, {} = {} ms, {} = {} ms",
            self.bytes,
            self.isaac.name,
            self.isaac.elapsed.as_millis(),
            self.baseline.name,
            self.baseline.elapsed.as_millis()
        )
    }
}

/// Seed from a scalar, then re-seed with a full block of the engine's own
/// output
pub fn self_seeded<W: BenchWord, const ALPHA: usize>(
    seed: u64,
) -> Result<Isaac<W, ALPHA>, CliError> {
    let mut engine = Isaac::<W, ALPHA>::new(W::from_seed(seed));
    let block: Vec<W> = engine.words().take(Isaac::<W, ALPHA>::STATE_SIZE).collect();
    engine.seed_from_words(block)?;
    Ok(engine)
}

/// Call `next` `count` times, folding outputs into `sink`
pub fn time_words<F: FnMut() -> u64>(mut next: F, count: u64, sink: &mut u64) -> Duration {
    let start = Instant::now();
    for _ in 0..count {
        *sink = sink.wrapping_add(next());
    }
    let elapsed = start.elapsed();
    black_box(*sink);
    elapsed
}

pub fn run<W: BenchWord, const ALPHA: usize>(
    bytes: u64,
    seed: u64,
) -> Result<BenchReport, CliError> {
    let mut engine = self_seeded::<W, ALPHA>(seed)?;
    let mut baseline = Xorshift64Star::new(seed);
    log::info!("{} (alpha {}) self-seeded from {}", W::NAME, ALPHA, seed);

    let mut checksum = 0u64;

    let isaac_words = bytes / mem::size_of::<W>() as u64;
    let isaac_elapsed = time_words(|| engine.next_word().widen(), isaac_words, &mut checksum);
    log::debug!("{}: {} words in {:?}", W::NAME, isaac_words, isaac_elapsed);

    let baseline_words = bytes / mem::size_of::<u64>() as u64;
    let baseline_elapsed = time_words(|| baseline.next_u64(), baseline_words, &mut checksum);
    log::debug!("xorshift64*: {} words in {:?}", baseline_words, baseline_elapsed);

    Ok(BenchReport {
        bytes,
        isaac: Timing {
            name: W::NAME,
            words: isaac_words,
            elapsed: isaac_elapsed,
        },
        baseline: Timing {
            name: "xorshift64*",
            words: baseline_words,
            elapsed: baseline_elapsed,
        },
        checksum,
    })
}
