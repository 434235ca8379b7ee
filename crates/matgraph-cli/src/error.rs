//! Error types for matgraph CLI operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for matgraph CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The matrix file could not be read or is not a usable matrix.
    #[error(transparent)]
    Matrix(#[from] matgraph::MatrixError),

    /// IO error occurred while talking to the terminal or the filesystem.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The datasets directory holds no matrix files.
    #[error("no dataset files found in {}", .0.display())]
    NoDatasets(PathBuf),

    /// A traversal was requested from a vertex the graph does not have.
    #[error("invalid start vertex {start}: must be between 0 and {}", vertex_count.saturating_sub(1))]
    InvalidStart {
        /// The requested start vertex.
        start: usize,
        /// Number of vertices in the loaded graph.
        vertex_count: usize,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for matgraph CLI operations.
pub type Result<T> = std::result::Result<T, Error>;
