//! Error types returned by the Spatial Pooler.
//!
//! Configuration problems are reported once, when the pooler is built. Runtime
//! errors are limited to buffers handed in by the caller that do not fit the
//! configured topology. Numeric edge cases (clipping, empty pools, zero floors)
//! are handled by clamping and never surface here.

use thiserror::Error;

/// Main error type for Spatial Pooler operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpatialPoolerError {
    /// Invalid input or column dimensions.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid configuration value.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Name of the invalid parameter.
        name: &'static str,
        /// Description of the error.
        message: String,
    },

    /// The input vector holds more bits than the pooler has inputs.
    #[error("Input vector too long: expected at most {expected} bits, got {actual}")]
    InputTooLong {
        /// Number of configured inputs.
        expected: usize,
        /// Length of the vector that was passed in.
        actual: usize,
    },

    /// The output buffer does not have one slot per column.
    #[error("Output buffer size mismatch: expected {expected} columns, got {actual}")]
    OutputSizeMismatch {
        /// Number of configured columns.
        expected: usize,
        /// Length of the buffer that was passed in.
        actual: usize,
    },

    /// A per-pool array does not match the column's potential pool size.
    #[error("Column {column}: expected {expected} permanences, got {actual}")]
    PoolSizeMismatch {
        /// The column whose pool was addressed.
        column: usize,
        /// Size of the potential pool.
        expected: usize,
        /// Length of the array that was passed in.
        actual: usize,
    },

    /// A per-column array does not have one value per column.
    #[error("'{name}' needs {expected} values, got {actual}")]
    ColumnArrayMismatch {
        /// Name of the per-column array.
        name: &'static str,
        /// Number of configured columns.
        expected: usize,
        /// Length of the array that was passed in.
        actual: usize,
    },

    /// A column index outside `0..num_columns`.
    #[error("Column {column} out of bounds (columns: {num_columns})")]
    ColumnOutOfBounds {
        /// The invalid column index.
        column: usize,
        /// Number of configured columns.
        num_columns: usize,
    },
}

/// Result type alias using `SpatialPoolerError`.
pub type Result<T> = std::result::Result<T, SpatialPoolerError>;
