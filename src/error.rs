//! Error types for matrix construction.
//!
//! The search itself is infallible. Errors only arise at the boundary, when
//! raw rows or buffers are turned into a [`DistanceMatrix`](crate::distance::DistanceMatrix).

use thiserror::Error;

/// Malformed distance matrix input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// A row length does not match the number of rows.
    #[error("matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of rows (the required row length).
        expected: usize,
        /// Actual length of the row.
        found: usize,
    },

    /// An entry is not a number.
    #[error("matrix entry ({row}, {col}) is NaN")]
    InvalidEntry {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },

    /// A flat buffer does not hold `size * size` values.
    #[error("matrix data has {found} values, expected {expected}")]
    DataLength {
        /// Required length (`size * size`).
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },
}

/// Result alias for matrix construction.
pub type Result<T> = std::result::Result<T, MatrixError>;
