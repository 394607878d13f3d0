//! Error types for dictwrap

use crate::kind::ValueKind;
use thiserror::Error;

/// dictwrap error types
#[derive(Debug, Error)]
pub enum DictWrapError {
    /// Read or plain write addressed a key absent from the mapping.
    #[error("'MappingProxy' object has no field '{0}'")]
    NoSuchField(String),
    /// Write, append or removal attempted through a read-only proxy.
    #[error("can't {0}: proxy is immutable")]
    Immutable(&'static str),
    /// Strict write whose new value kind differs from the stored one.
    #[error("Value for {field} must be {expected}, not {found}")]
    TypeMismatch {
        /// Resolved key that was being written
        field: String,
        /// Kind of the value currently stored
        expected: ValueKind,
        /// Kind of the rejected value
        found: ValueKind,
    },
    /// Sequence index outside the current bounds.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Sequence length at the time of the access
        len: usize,
    },
    /// Removal target is not present in the sequence.
    #[error("{0} not found in sequence")]
    ValueNotFound(String),
    /// Float with no JSON representation (NaN or infinite).
    #[error("{0} cannot be stored as a JSON number")]
    NonFiniteNumber(f64),
    /// Operation applied to the wrong kind of data.
    #[error("Unsupported type: expected {expected}, found {found}")]
    UnsupportedType {
        /// What the operation accepts
        expected: &'static str,
        /// What it was given
        found: &'static str,
    },
    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Internal invariant was violated.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DictWrapError>;
