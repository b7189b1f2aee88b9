//! Engine error types
//!
//! Seeding, generation and equality are infallible once an engine exists.
//! The only failures are an empty seed range and state restoration from
//! malformed input.

use thiserror::Error;

/// Errors produced by the ISAAC engines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsaacError {
    /// Range seeding was given no words to cycle over
    #[error("Seed range is empty: at least one seed word is required")]
    EmptySeedRange,

    /// Textual state could not be parsed; the engine was left untouched
    #[error("Malformed serialized state at {field}: {reason}")]
    MalformedSerializedState { field: String, reason: String },

    /// Structured snapshot does not describe an engine of this type
    #[error("Snapshot mismatch: {0}")]
    SnapshotMismatch(String),

    /// serde / JSON failure
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Underlying reader or writer failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl IsaacError {
    pub(crate) fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        IsaacError::MalformedSerializedState {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for IsaacError {
    fn from(err: std::io::Error) -> Self {
        IsaacError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for IsaacError {
    fn from(err: serde_json::Error) -> Self {
        IsaacError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_field() {
        let err = IsaacError::malformed("pool[3]", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "Malformed serialized state at pool[3]: invalid digit found in string"
        );
    }
}
