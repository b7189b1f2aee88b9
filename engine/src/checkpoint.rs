//! Checkpoint - Structured engine snapshots
//!
//! Complements the textual state format with a self-describing snapshot that
//! can be stored as JSON and validated before it is loaded.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored engine produces the same future output
//! - **Shape Matching**: a snapshot only loads into the same variant + alpha
//! - **Integrity**: `state_hash` must match the restored state

use crate::error::IsaacError;
use crate::isaac::Isaac;
use crate::word::IsaacWord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete engine state snapshot
///
/// Field order mirrors the textual format; `state_hash` is the SHA-256 of
/// that text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "W: IsaacWord")]
pub struct EngineSnapshot<W> {
    /// "isaac32" or "isaac64"
    pub variant: String,

    /// State size exponent
    pub alpha: usize,

    /// Buffered words not yet returned
    pub cursor: usize,

    pub result: Vec<W>,
    pub pool: Vec<W>,
    pub a: W,
    pub b: W,
    pub c: W,

    /// SHA256 hash of the textual state (for validation)
    pub state_hash: String,
}

// ============================================================================
// State Hashing
// ============================================================================

/// Compute the SHA256 hash (hex) of an engine's textual state
///
/// Two engines hash equal exactly when they compare equal.
pub fn compute_state_hash<W: IsaacWord, const ALPHA: usize>(engine: &Isaac<W, ALPHA>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(engine.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}

impl<W: IsaacWord, const ALPHA: usize> Isaac<W, ALPHA> {
    /// Capture the full state
    pub fn snapshot(&self) -> EngineSnapshot<W> {
        let (a, b) = self.accumulators();
        EngineSnapshot {
            variant: W::NAME.to_string(),
            alpha: ALPHA,
            cursor: self.cursor(),
            result: self.results().to_vec(),
            pool: self.pool().to_vec(),
            a,
            b,
            c: self.counter(),
            state_hash: compute_state_hash(self),
        }
    }

    /// Rebuild an engine from a snapshot after validating it
    pub fn from_snapshot(snapshot: &EngineSnapshot<W>) -> Result<Self, IsaacError> {
        validate_snapshot::<W>(snapshot, ALPHA)?;

        // Route through the textual reader so there is one commit path.
        let text = snapshot_text(snapshot);
        let engine: Self = text.parse()?;

        let actual = compute_state_hash(&engine);
        if actual != snapshot.state_hash {
            return Err(IsaacError::SnapshotMismatch(format!(
                "State hash mismatch: expected {}, got {}",
                snapshot.state_hash, actual
            )));
        }
        log::debug!("{} restored from snapshot {}", W::NAME, &actual[..12]);
        Ok(engine)
    }

    /// Replace this engine's state with a snapshot; unchanged on error
    pub fn restore_snapshot(&mut self, snapshot: &EngineSnapshot<W>) -> Result<(), IsaacError> {
        *self = Self::from_snapshot(snapshot)?;
        Ok(())
    }

    /// Snapshot as a JSON document
    pub fn to_json(&self) -> Result<String, IsaacError> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Rebuild from a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self, IsaacError> {
        let snapshot: EngineSnapshot<W> = serde_json::from_str(json)?;
        Self::from_snapshot(&snapshot)
    }
}

fn snapshot_text<W: IsaacWord>(snapshot: &EngineSnapshot<W>) -> String {
    let mut text = snapshot.cursor.to_string();
    for word in snapshot.result.iter().chain(snapshot.pool.iter()) {
        text.push(' ');
        text.push_str(&word.to_string());
    }
    for word in [snapshot.a, snapshot.b, snapshot.c] {
        text.push(' ');
        text.push_str(&word.to_string());
    }
    text
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validate that a snapshot describes an engine of variant `W` at `alpha`
///
/// Checks:
/// - Variant name
/// - Alpha
/// - Buffer lengths
/// - Cursor range
pub fn validate_snapshot<W: IsaacWord>(
    snapshot: &EngineSnapshot<W>,
    alpha: usize,
) -> Result<(), IsaacError> {
    if snapshot.variant != W::NAME {
        return Err(IsaacError::SnapshotMismatch(format!(
            "Variant mismatch: expected {}, got {}",
            W::NAME,
            snapshot.variant
        )));
    }

    if snapshot.alpha != alpha {
        return Err(IsaacError::SnapshotMismatch(format!(
            "Alpha mismatch: expected {}, got {}",
            alpha, snapshot.alpha
        )));
    }

    let state_size = 1usize << alpha;
    for (name, len) in [("result", snapshot.result.len()), ("pool", snapshot.pool.len())] {
        if len != state_size {
            return Err(IsaacError::SnapshotMismatch(format!(
                "{} holds {} words, expected {}",
                name, len, state_size
            )));
        }
    }

    if snapshot.cursor > state_size {
        return Err(IsaacError::SnapshotMismatch(format!(
            "Cursor {} exceeds state size {}",
            snapshot.cursor, state_size
        )));
    }

    Ok(())
}

// ============================================================================
// serde
// ============================================================================

impl<W: IsaacWord, const ALPHA: usize> Serialize for Isaac<W, ALPHA> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}

impl<'de, W: IsaacWord, const ALPHA: usize> Deserialize<'de> for Isaac<W, ALPHA> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = EngineSnapshot::<W>::deserialize(deserializer)?;
        Self::from_snapshot(&snapshot).map_err(serde::de::Error::custom)
    }
}
