//! ISAAC Engine Core - Rust Engine
//!
//! Seedable, deterministic ISAAC and ISAAC-64 random engines.
//!
//! # Architecture
//!
//! - **word**: Word strategies (golden constant, mix network, refill transforms)
//! - **isaac**: Generic engine core (seeding, refill, generation, text format)
//! - **variants**: `Isaac32` / `Isaac64` facades
//! - **seed**: Seed sequences and entropy sources
//! - **checkpoint**: JSON snapshots with integrity hashing
//! - **rand_compat**: `rand_core` trait implementations
//!
//! # Critical Invariants
//!
//! 1. `pool` and `result` always hold exactly `2^ALPHA` words
//! 2. `cursor` stays within `0..=2^ALPHA`
//! 3. All arithmetic wraps; no operation on a live engine can fail
//! 4. Failed restores and failed range seeds leave the engine untouched

// Module declarations
pub mod checkpoint;
pub mod error;
pub mod isaac;
pub mod rand_compat;
pub mod seed;
pub mod variants;
pub mod word;

// Re-exports for convenience
pub use checkpoint::{compute_state_hash, EngineSnapshot};
pub use error::IsaacError;
pub use isaac::{Isaac, Words, DEFAULT_ALPHA};
pub use seed::{EntropySequence, EntropySource, SeedSeq, SeedSequence, Xorshift64Star};
pub use variants::{Isaac32, Isaac64};
pub use word::IsaacWord;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn isaac_engine_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::engine::PyIsaac32>()?;
    m.add_class::<ffi::engine::PyIsaac64>()?;
    Ok(())
}
