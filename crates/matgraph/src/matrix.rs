//! Adjacency matrix reading and validation.
//!
//! The text format is one row per line, values separated by whitespace (commas
//! are accepted too). Blank lines and lines starting with `#` are skipped:
//!
//! ```text
//! # path 0-1-2
//! 0 1 0
//! 1 0 1
//! 0 1 0
//! ```
//!
//! Parsing produces a raw grid; [`SquareMatrix::try_from`] is the only way to
//! obtain a [`SquareMatrix`], so a graph can never be built from a ragged or
//! empty grid.

use crate::error::{MatrixError, Result};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// A non-empty square grid of integers.
///
/// A zero cell means "no edge"; any other value means an edge is present.
/// Values are kept as written so the source matrix can be printed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SquareMatrix {
    rows: Vec<Vec<i64>>,
}

impl SquareMatrix {
    /// Number of rows (and columns).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// The rows of the matrix.
    #[must_use]
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Whether `m[i][j] == m[j][i]` for every cell.
    ///
    /// Raw values are compared, so `[[0, 2], [1, 0]]` is not symmetric even
    /// though both directions carry an edge.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let n = self.dimension();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }
}

impl TryFrom<Vec<Vec<i64>>> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        validate(&rows)?;
        Ok(Self { rows })
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .flatten()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(1);

        for row in &self.rows {
            let line = row
                .iter()
                .map(|value| format!("{value:>width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Check that a raw grid is usable as an adjacency matrix.
///
/// # Errors
///
/// - [`MatrixError::Empty`] when there are no rows
/// - [`MatrixError::NotSquare`] for the first row whose length differs from
///   the row count
pub fn validate(rows: &[Vec<i64>]) -> Result<()> {
    if rows.is_empty() {
        return Err(MatrixError::Empty);
    }

    let expected = rows.len();
    if let Some((row, values)) = rows
        .iter()
        .enumerate()
        .find(|(_, values)| values.len() != expected)
    {
        return Err(MatrixError::NotSquare {
            row,
            expected,
            found: values.len(),
        });
    }

    Ok(())
}

/// Parse matrix text into a raw grid without checking its shape.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidValue`] for the first token that is not an
/// integer.
pub fn parse_matrix(text: &str) -> Result<Vec<Vec<i64>>> {
    let mut rows = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let row = trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(column, token)| {
                token
                    .parse::<i64>()
                    .map_err(|_| MatrixError::InvalidValue {
                        line: index + 1,
                        column: column + 1,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        rows.push(row);
    }

    tracing::trace!(rows = rows.len(), "Parsed matrix text");
    Ok(rows)
}

/// Read, parse and validate a matrix file.
///
/// # Errors
///
/// Returns [`MatrixError::Io`] if the file cannot be read, otherwise any error
/// from [`parse_matrix`] or [`validate`].
pub fn load_matrix(path: &Path) -> Result<SquareMatrix> {
    let text = fs::read_to_string(path).map_err(|source| MatrixError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let matrix = SquareMatrix::try_from(parse_matrix(&text)?)?;
    tracing::debug!(
        path = %path.display(),
        dimension = matrix.dimension(),
        "Loaded adjacency matrix"
    );
    Ok(matrix)
}
