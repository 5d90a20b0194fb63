// ============================================================================
// Numeric Errors
// Error types for BigDouble parsing and tag-dispatched arithmetic
// ============================================================================

use crate::domain::NumericTag;
use std::fmt;

/// Errors that can occur during numeric parsing, conversion and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Value does not fit the target representation
    Overflow,
    /// Integer division by zero
    DivisionByZero,
    /// Input string could not be parsed
    InvalidInput,
    /// Plain decimal text evaluated to NaN without the literal `NaN` token
    UnexpectedNaN,
    /// Tag discriminant is absent or not a supported encoding
    UnsupportedKind(u8),
    /// Operand encoding differs from the target encoding
    TagMismatch {
        expected: NumericTag,
        actual: NumericTag,
    },
    /// Byte storage is shorter than the tag's width
    BufferTooSmall { needed: usize, actual: usize },
    /// Record has no field at this index
    MissingField(usize),
    /// Configuration failed validation
    InvalidConfig,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "overflow: value does not fit the target representation")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::UnexpectedNaN => write!(f, "value is NaN"),
            NumericError::UnsupportedKind(raw) => {
                write!(f, "unsupported numeric kind: discriminant {}", raw)
            },
            NumericError::TagMismatch { expected, actual } => {
                write!(f, "tag mismatch: expected {}, got {}", expected, actual)
            },
            NumericError::BufferTooSmall { needed, actual } => write!(
                f,
                "buffer too small: need {} bytes, got {}",
                needed, actual
            ),
            NumericError::MissingField(index) => write!(f, "missing field at index {}", index),
            NumericError::InvalidConfig => write!(f, "invalid configuration"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
