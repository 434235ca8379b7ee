//! Structural analysis: cycle detection and component counting.
//!
//! Both analyses scan vertices in ascending order and start a new search from
//! each vertex not yet visited, so every component is examined.
//!
//! ## Cycle Detection
//!
//! - **Directed**: a depth-first search marks the vertices on the current
//!   path. An edge back to a vertex on the path closes a cycle.
//! - **Undirected**: every edge is stored in both directions, so the edge back
//!   to a vertex's own parent is ignored. Any other edge to a visited vertex
//!   closes a cycle.
//!
//! A self-loop is a cycle in both modes. The searches use explicit stacks and
//! stop at the first cycle found.

use crate::graph::Graph;
use crate::traversal::Frame;
use serde::Serialize;

/// Summary of every analysis for one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Whether the graph is directed.
    pub directed: bool,
    /// Whether at least one cycle exists.
    pub has_cycle: bool,
    /// The vertices of the first cycle found, if any.
    pub cycle: Option<Vec<usize>>,
    /// Connected component count. Only computed for undirected graphs.
    pub components: Option<usize>,
}

/// Run cycle detection and, for undirected graphs, component counting.
#[must_use]
pub fn analyze(graph: &Graph) -> AnalysisReport {
    let cycle = find_cycle(graph);
    let components = (!graph.is_directed()).then(|| count_components(graph));

    tracing::debug!(
        has_cycle = cycle.is_some(),
        components = ?components,
        "Analyzed graph"
    );

    AnalysisReport {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        directed: graph.is_directed(),
        has_cycle: cycle.is_some(),
        cycle,
        components,
    }
}

/// Whether the graph contains at least one cycle in any component.
#[must_use]
pub fn has_cycle(graph: &Graph) -> bool {
    find_cycle(graph).is_some()
}

/// The first cycle found, as the vertices along it in traversal order.
///
/// The closing vertex is not repeated: `[0, 1, 2]` means `0 -> 1 -> 2 -> 0`.
/// A self-loop on `v` is reported as `[v]`.
#[must_use]
pub fn find_cycle(graph: &Graph) -> Option<Vec<usize>> {
    if graph.is_directed() {
        find_directed_cycle(graph)
    } else {
        find_undirected_cycle(graph)
    }
}

fn find_directed_cycle(graph: &Graph) -> Option<Vec<usize>> {
    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut on_path = vec![false; vertex_count];

    for root in 0..vertex_count {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        on_path[root] = true;

        let mut stack = vec![Frame::new(root)];
        while let Some(frame) = stack.last_mut() {
            let Some(next) = frame.next_neighbor(graph) else {
                on_path[frame.vertex] = false;
                stack.pop();
                continue;
            };

            if !visited[next] {
                visited[next] = true;
                on_path[next] = true;
                stack.push(Frame::new(next));
            } else if on_path[next] {
                return Some(cycle_on_stack(&stack, next));
            }
        }
    }

    None
}

fn find_undirected_cycle(graph: &Graph) -> Option<Vec<usize>> {
    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut parents: Vec<Option<usize>> = vec![None; vertex_count];

    for root in 0..vertex_count {
        if visited[root] {
            continue;
        }
        visited[root] = true;

        let mut stack = vec![Frame::new(root)];
        while let Some(frame) = stack.last_mut() {
            let current = frame.vertex;
            let Some(next) = frame.next_neighbor(graph) else {
                stack.pop();
                continue;
            };

            if !visited[next] {
                visited[next] = true;
                parents[next] = Some(current);
                stack.push(Frame::new(next));
            } else if parents[current] != Some(next) {
                return Some(cycle_on_stack(&stack, next));
            }
        }
    }

    None
}

/// The stacked vertices from `closing` to the top of the stack.
fn cycle_on_stack(stack: &[Frame], closing: usize) -> Vec<usize> {
    let cycle: Vec<usize> = stack
        .iter()
        .map(|frame| frame.vertex)
        .skip_while(|&vertex| vertex != closing)
        .collect();
    tracing::trace!(?cycle, "Found cycle");
    cycle
}

/// Number of components.
///
/// For undirected graphs this is the number of connected components. For
/// directed graphs it counts groups of DFS reachability from successive
/// unvisited roots, which is neither the strongly nor the weakly connected
/// component count: `0 -> 1` gives 1, `1 -> 0` gives 2.
#[must_use]
pub fn count_components(graph: &Graph) -> usize {
    components(graph).len()
}

/// The components, each listed in traversal order.
///
/// Roots are taken in ascending vertex order; each root's reachable, still
/// unvisited set forms one group. Undirected graphs are explored breadth
/// first, directed graphs depth first. See [`count_components`] for what this
/// means on directed input.
#[must_use]
pub fn components(graph: &Graph) -> Vec<Vec<usize>> {
    let traversal = if graph.is_directed() {
        graph.dfs(0)
    } else {
        graph.bfs(0)
    };
    traversal.trees()
}
