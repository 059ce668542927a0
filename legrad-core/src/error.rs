use thiserror::Error;

/// Custom error type for legrad.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum LegradError {
    /// An operand that is neither a variable nor a plain number.
    #[error("Can't apply {operation} to an operand of type {type_name}")]
    UnsupportedOperand {
        operation: String,
        type_name: &'static str,
    },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Dimension mismatch: expected at least {expected} dimension(s), got {actual} during operation {operation}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Array creation error: data length {data_len} does not match shape {shape:?}")]
    ArrayCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Backward error: {0}")]
    BackwardError(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LegradError>;
