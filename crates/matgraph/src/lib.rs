//! Matgraph - structural analysis of graphs given as adjacency matrices.
//!
//! A [`Graph`] is built once from a validated [`SquareMatrix`]. Whether it is
//! directed is decided by the matrix itself: symmetric means undirected.
//! Traversals and analyses borrow the graph and return plain values.
//!
//! # Example
//!
//! ```
//! use matgraph::{Graph, SquareMatrix, analysis};
//!
//! let matrix = SquareMatrix::try_from(vec![
//!     vec![0, 1, 0],
//!     vec![1, 0, 1],
//!     vec![0, 1, 0],
//! ])?;
//! let graph = Graph::from_matrix(matrix);
//!
//! assert!(!graph.is_directed());
//!
//! let bfs = graph.bfs(0);
//! assert_eq!(bfs.order, vec![0, 1, 2]);
//! assert_eq!(bfs.distances, vec![Some(0), Some(1), Some(2)]);
//!
//! assert!(!analysis::has_cycle(&graph));
//! assert_eq!(analysis::count_components(&graph), 1);
//! # Ok::<(), matgraph::MatrixError>(())
//! ```

#![forbid(unsafe_code)]

pub mod analysis;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod traversal;

pub use analysis::AnalysisReport;
pub use error::{MatrixError, Result};
pub use graph::Graph;
pub use matrix::{SquareMatrix, load_matrix, parse_matrix};
pub use traversal::Traversal;
