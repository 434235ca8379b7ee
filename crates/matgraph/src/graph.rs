//! Adjacency-list graph built from a square matrix.
//!
//! # Directedness
//!
//! A graph is directed if and only if its source matrix is not symmetric. The
//! flag is computed once in [`Graph::from_matrix`] and never changes.
//!
//! # Edge Insertion Order
//!
//! Cells are scanned row-major. A non-zero cell `(i, j)` adds:
//!
//! - **Directed**: `i -> j`, always
//! - **Undirected**: `i -> j` and `j -> i`, only when `j >= i` (the upper
//!   triangle), so each undirected edge enters the lists once per endpoint
//!
//! Neighbor lists keep insertion order and are not deduplicated. An undirected
//! self-loop `(i, i)` is appended to `adjacency[i]` twice, once for each
//! endpoint of the edge.

use crate::matrix::SquareMatrix;
use std::fmt;

/// An unweighted graph stored as adjacency lists.
///
/// The graph is immutable once built. Traversals and analyses borrow it and
/// return their results as fresh values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    directed: bool,
    adjacency: Vec<Vec<usize>>,
    matrix: SquareMatrix,
}

impl Graph {
    /// Build a graph from a validated square matrix.
    #[must_use]
    pub fn from_matrix(matrix: SquareMatrix) -> Self {
        let vertex_count = matrix.dimension();
        let directed = !matrix.is_symmetric();

        let mut graph = Self {
            vertex_count,
            directed,
            adjacency: vec![Vec::new(); vertex_count],
            matrix,
        };

        for i in 0..vertex_count {
            for j in 0..vertex_count {
                if graph.matrix.rows()[i][j] != 0 && (directed || j >= i) {
                    graph.add_edge(i, j);
                }
            }
        }

        tracing::debug!(
            vertices = vertex_count,
            directed,
            edges = graph.edge_count(),
            "Built graph from adjacency matrix"
        );

        graph
    }

    /// Append `to` to the neighbors of `from` (and the reverse if undirected).
    ///
    /// Out-of-range endpoints are ignored.
    pub(crate) fn add_edge(&mut self, from: usize, to: usize) {
        if from >= self.vertex_count || to >= self.vertex_count {
            return;
        }
        self.adjacency[from].push(to);
        if !self.directed {
            self.adjacency[to].push(from);
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Whether the source matrix was asymmetric.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether `vertex` is a valid index into this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    /// Neighbors of `vertex` in insertion order, or an empty slice when the
    /// vertex does not exist.
    #[must_use]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All neighbor lists, indexed by vertex.
    #[must_use]
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// The matrix this graph was built from.
    #[must_use]
    pub fn matrix(&self) -> &SquareMatrix {
        &self.matrix
    }

    /// Number of edges.
    ///
    /// Every undirected edge, self-loops included, occupies exactly two
    /// adjacency entries, so the entry total is halved.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(Vec::len).sum();
        if self.directed { entries } else { entries / 2 }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed { "Directed" } else { "Undirected" };
        writeln!(f, "Graph ({kind}) with {} vertices:", self.vertex_count)?;
        for (vertex, neighbors) in self.adjacency.iter().enumerate() {
            write!(f, "{vertex}: ")?;
            for neighbor in neighbors {
                write!(f, "{neighbor}->")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(rows: Vec<Vec<i64>>) -> Graph {
        Graph::from_matrix(SquareMatrix::try_from(rows).expect("valid matrix"))
    }

    #[test]
    fn symmetric_matrix_builds_undirected_graph() {
        let g = graph(vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);

        assert!(!g.is_directed());
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.adjacency(), &[vec![1], vec![0, 2], vec![1]]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn asymmetric_matrix_builds_directed_graph() {
        let g = graph(vec![vec![0, 1], vec![0, 0]]);

        assert!(g.is_directed());
        assert_eq!(g.neighbors(0), &[1]);
        assert!(g.neighbors(1).is_empty());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn unequal_weights_make_graph_directed() {
        let g = graph(vec![vec![0, 2], vec![1, 0]]);

        assert!(g.is_directed());
        assert_eq!(g.adjacency(), &[vec![1], vec![0]]);
    }

    #[test]
    fn directed_neighbors_follow_row_major_order() {
        let g = graph(vec![vec![0, 1, 1], vec![0, 0, 0], vec![1, 1, 0]]);

        assert_eq!(g.neighbors(0), &[1, 2]);
        assert_eq!(g.neighbors(2), &[0, 1]);
    }

    #[test]
    fn undirected_self_loop_is_listed_twice() {
        let g = graph(vec![vec![1, 1], vec![1, 0]]);

        assert!(!g.is_directed());
        assert_eq!(g.neighbors(0), &[0, 0, 1]);
        assert_eq!(g.neighbors(1), &[0]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn directed_self_loop_is_listed_once() {
        let g = graph(vec![vec![1, 1], vec![0, 0]]);

        assert!(g.is_directed());
        assert_eq!(g.neighbors(0), &[0, 1]);
    }

    #[test]
    fn undirected_adjacency_is_symmetric() {
        let g = graph(vec![
            vec![0, 1, 1, 0],
            vec![1, 0, 0, 1],
            vec![1, 0, 0, 1],
            vec![0, 1, 1, 0],
        ]);

        for (u, neighbors) in g.adjacency().iter().enumerate() {
            for &v in neighbors {
                assert!(g.neighbors(v).contains(&u), "missing reverse of {u}->{v}");
            }
        }
    }

    #[test]
    fn add_edge_ignores_out_of_range_endpoints() {
        let mut g = graph(vec![vec![0, 0], vec![0, 0]]);
        g.add_edge(0, 2);
        g.add_edge(5, 1);

        assert!(g.adjacency().iter().all(Vec::is_empty));
    }

    #[test]
    fn neighbors_of_missing_vertex_is_empty() {
        let g = graph(vec![vec![0]]);
        assert!(g.neighbors(3).is_empty());
        assert!(!g.contains_vertex(1));
        assert!(g.contains_vertex(0));
    }

    #[test]
    fn display_lists_adjacency() {
        let g = graph(vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        assert_eq!(
            g.to_string(),
            "Graph (Undirected) with 3 vertices:\n0: 1->\n1: 0->2->\n2: 1->\n"
        );
    }

    #[test]
    fn retains_source_matrix() {
        let rows = vec![vec![0, 3], vec![3, 0]];
        let g = graph(rows.clone());
        assert_eq!(g.matrix().rows(), rows.as_slice());
    }
}
