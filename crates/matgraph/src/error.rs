//! Error types for matgraph matrix loading.
//!
//! Graph construction, traversal and analysis have no failure modes once a
//! [`SquareMatrix`](crate::matrix::SquareMatrix) exists. Everything that can go
//! wrong happens before that point: reading the file, parsing integers, or
//! checking the shape.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for reading and validating adjacency matrices.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The matrix file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A cell in the matrix text was not an integer.
    #[error("invalid value '{token}' at line {line}, column {column}")]
    InvalidValue {
        /// The 1-based line number in the source text.
        line: usize,
        /// The 1-based position of the value within its row.
        column: usize,
        /// The offending token.
        token: String,
    },

    /// The matrix has no rows.
    #[error("matrix is empty")]
    Empty,

    /// A row's length does not match the number of rows.
    #[error("matrix is not square: row {row} has {found} values, expected {expected}")]
    NotSquare {
        /// The 0-based index of the first offending row.
        row: usize,
        /// The expected row length (the number of rows).
        expected: usize,
        /// The actual row length.
        found: usize,
    },
}

impl MatrixError {
    /// Returns `true` for failures in the matrix shape or content, as opposed
    /// to failures reading it from disk.
    #[must_use]
    pub fn is_invalid_matrix(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// A specialized Result type for matgraph matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
