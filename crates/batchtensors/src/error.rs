//! Error types for batchtensors.

use thiserror::Error;

/// Errors that can occur in batch operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// Operand shapes disagree on dimension or block size.
    #[error("shape mismatch: expected shape {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Data length does not match the requested shape.
    #[error("length mismatch: shape requires {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
