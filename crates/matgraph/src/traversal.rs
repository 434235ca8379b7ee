//! Breadth-first and depth-first traversal.
//!
//! Both traversals cover the whole graph. After exhausting everything
//! reachable from the start vertex, they scan vertices in ascending order and
//! start a new sub-traversal from each vertex that is still unvisited. Every
//! vertex therefore appears exactly once in [`Traversal::order`].
//!
//! Distances are relative to the root of the sub-traversal that reached the
//! vertex, not to the original start vertex. Each root has distance 0 and no
//! parent.
//!
//! Depth-first search uses an explicit stack of [`Frame`]s instead of
//! recursion, so long chains cannot overflow the call stack. The visiting
//! order is identical to the recursive preorder.

use crate::graph::Graph;
use serde::Serialize;
use std::collections::VecDeque;

/// The outcome of a single BFS or DFS run.
///
/// For BFS, `distances` holds hop counts from the sub-traversal root. For DFS
/// it holds the recursion depth at which each vertex was first visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal {
    /// The requested start vertex.
    pub start: usize,
    /// Vertices in visiting order.
    pub order: Vec<usize>,
    /// Distance (or depth) per vertex; `None` if the vertex was not reached.
    pub distances: Vec<Option<usize>>,
    /// Parent per vertex; `None` for roots and unreached vertices.
    pub parents: Vec<Option<usize>>,
}

impl Traversal {
    fn unvisited(start: usize, vertex_count: usize) -> Self {
        Self {
            start,
            order: Vec::with_capacity(vertex_count),
            distances: vec![None; vertex_count],
            parents: vec![None; vertex_count],
        }
    }

    /// Whether nothing was visited, which only happens for an invalid start.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Distance (or depth) recorded for `vertex`.
    #[must_use]
    pub fn distance(&self, vertex: usize) -> Option<usize> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Parent recorded for `vertex`.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Roots of each sub-traversal, in the order they were started.
    #[must_use]
    pub fn roots(&self) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|&v| self.parent(v).is_none())
            .collect()
    }

    /// The visiting order split into one group per sub-traversal.
    #[must_use]
    pub fn trees(&self) -> Vec<Vec<usize>> {
        let mut trees: Vec<Vec<usize>> = Vec::new();
        for &vertex in &self.order {
            if self.parent(vertex).is_none() {
                trees.push(Vec::new());
            }
            if let Some(tree) = trees.last_mut() {
                tree.push(vertex);
            }
        }
        trees
    }

    /// The tree path from the root of `vertex`'s sub-traversal to `vertex`.
    ///
    /// For BFS this is a shortest path. Returns `None` if `vertex` was not
    /// visited.
    #[must_use]
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        self.distance(vertex)?;

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// One level of an explicit-stack depth-first search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) vertex: usize,
    cursor: usize,
}

impl Frame {
    pub(crate) fn new(vertex: usize) -> Self {
        Self { vertex, cursor: 0 }
    }

    /// The next neighbor to examine, advancing the cursor past it.
    pub(crate) fn next_neighbor(&mut self, graph: &Graph) -> Option<usize> {
        let neighbor = graph.neighbors(self.vertex).get(self.cursor).copied()?;
        self.cursor += 1;
        Some(neighbor)
    }
}

impl Graph {
    /// Breadth-first traversal covering every vertex.
    ///
    /// Returns an empty order (with all distances and parents unset) if
    /// `start` is not a vertex of this graph.
    #[must_use]
    pub fn bfs(&self, start: usize) -> Traversal {
        self.traverse(start, Self::bfs_from)
    }

    /// Depth-first (preorder) traversal covering every vertex.
    ///
    /// Returns an empty order (with all depths and parents unset) if `start`
    /// is not a vertex of this graph.
    #[must_use]
    pub fn dfs(&self, start: usize) -> Traversal {
        self.traverse(start, Self::dfs_from)
    }

    fn traverse(
        &self,
        start: usize,
        visit: fn(&Self, usize, &mut [bool], &mut Traversal),
    ) -> Traversal {
        let vertex_count = self.vertex_count();
        let mut traversal = Traversal::unvisited(start, vertex_count);

        if !self.contains_vertex(start) {
            tracing::debug!(start, vertex_count, "Start vertex out of range");
            return traversal;
        }

        let mut visited = vec![false; vertex_count];
        visit(self, start, &mut visited, &mut traversal);

        for root in 0..vertex_count {
            if !visited[root] {
                visit(self, root, &mut visited, &mut traversal);
            }
        }

        tracing::trace!(
            start,
            subtraversals = traversal.roots().len(),
            "Traversal complete"
        );
        traversal
    }

    /// Level-order sub-traversal from `root`, sharing `visited` and the result
    /// arrays with earlier sub-traversals.
    fn bfs_from(&self, root: usize, visited: &mut [bool], traversal: &mut Traversal) {
        visited[root] = true;
        traversal.distances[root] = Some(0);

        let mut queue: VecDeque<(usize, usize)> = VecDeque::from([(root, 0)]);
        while let Some((current, distance)) = queue.pop_front() {
            traversal.order.push(current);

            for &next in self.neighbors(current) {
                if !visited[next] {
                    visited[next] = true;
                    traversal.distances[next] = Some(distance + 1);
                    traversal.parents[next] = Some(current);
                    queue.push_back((next, distance + 1));
                }
            }
        }
    }

    /// Preorder sub-traversal from `root`. The stack height at the moment a
    /// vertex is pushed is its depth.
    fn dfs_from(&self, root: usize, visited: &mut [bool], traversal: &mut Traversal) {
        visited[root] = true;
        traversal.distances[root] = Some(0);
        traversal.order.push(root);

        let mut stack = vec![Frame::new(root)];
        while let Some(frame) = stack.last_mut() {
            let current = frame.vertex;
            let Some(next) = frame.next_neighbor(self) else {
                stack.pop();
                continue;
            };

            if !visited[next] {
                visited[next] = true;
                traversal.distances[next] = Some(stack.len());
                traversal.parents[next] = Some(current);
                traversal.order.push(next);
                stack.push(Frame::new(next));
            }
        }
    }
}
