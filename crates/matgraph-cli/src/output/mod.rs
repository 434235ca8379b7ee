//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers
//! - `table`: Boxed tables for distance and parent listings

pub mod color;
mod table;

use crate::error::Result;
use matgraph::{AnalysisReport, Graph, SquareMatrix, Traversal};
use serde::Serialize;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub use color::{error, info, success, warning};

use color::{accent, bold, dimmed};

// ============================================================================
// Output Configuration
// ============================================================================

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use ASCII-only table borders instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(use_ascii: bool, use_colors: bool) -> Self {
        Self {
            use_ascii,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `MATGRAPH_ASCII`: Set to "1" or "true" for ASCII-only borders (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `MATGRAPH_COLOR`: Set to "0" or "false" to disable colors (default: true)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create an `OutputConfig` from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let use_ascii = match lookup("MATGRAPH_ASCII") {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Some(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Some(v) => {
                tracing::warn!(
                    env_var = "MATGRAPH_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            None => false,
        };

        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = lookup("NO_COLOR").is_none()
            && lookup("MATGRAPH_COLOR")
                .is_none_or(|v| v != "0" && !v.eq_ignore_ascii_case("false"));

        Self {
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_ascii: false,
            use_colors: true,
        }
    }
}

// ============================================================================
// Traversal Kinds
// ============================================================================

/// Which traversal produced a [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
}

impl TraversalKind {
    /// Run this traversal on `graph`.
    #[must_use]
    pub fn run(self, graph: &Graph, start: usize) -> Traversal {
        match self {
            Self::Bfs => graph.bfs(start),
            Self::Dfs => graph.dfs(start),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    fn value_header(self) -> &'static str {
        match self {
            Self::Bfs => "Distance",
            Self::Dfs => "Depth",
        }
    }
}

// ============================================================================
// JSON Shapes
// ============================================================================

#[derive(Serialize)]
struct TraversalJson<'a> {
    algorithm: TraversalKind,
    #[serde(flatten)]
    traversal: &'a Traversal,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<usize>>,
}

#[derive(Serialize)]
struct GraphSummary<'a> {
    vertex_count: usize,
    edge_count: usize,
    directed: bool,
    adjacency: &'a [Vec<usize>],
    matrix: &'a SquareMatrix,
}

#[derive(Serialize)]
struct DatasetsJson<'a> {
    dir: &'a Path,
    datasets: &'a [PathBuf],
}

/// Write any serializable value as pretty JSON.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if `value` fails to serialize
/// and [`Error::Io`](crate::Error::Io) if writing fails.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(w, "{json}")?;
    Ok(())
}

// ============================================================================
// Text Formatting
// ============================================================================

fn format_order(order: &[usize]) -> String {
    let items: Vec<String> = order.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn mode_label(graph: &Graph) -> &'static str {
    if graph.is_directed() {
        "Directed"
    } else {
        "Undirected"
    }
}

/// Write the one-line summary shown after a graph is loaded.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn write_loaded<W: Write>(
    w: &mut W,
    name: &str,
    graph: &Graph,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{}", success(&format!("Loaded {name}"), config))?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Vertices:", config),
        info(&graph.vertex_count().to_string(), config)
    )?;
    writeln!(w, "  {} {}", dimmed("Edges:", config), graph.edge_count())?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Mode:", config),
        info(mode_label(graph), config)
    )
}

/// Write the adjacency list and the source matrix.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn write_graph<W: Write>(w: &mut W, graph: &Graph, config: &OutputConfig) -> io::Result<()> {
    write!(w, "{graph}")?;
    writeln!(w)?;
    writeln!(w, "{}", bold("Adjacency matrix:", config))?;
    write!(w, "{}", graph.matrix())
}

/// Write a graph in the requested mode.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing to `w` fails.
pub fn print_graph<W: Write>(
    w: &mut W,
    graph: &Graph,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    match mode {
        OutputMode::Text => write_graph(w, graph, config)?,
        OutputMode::Json => write_json(
            w,
            &GraphSummary {
                vertex_count: graph.vertex_count(),
                edge_count: graph.edge_count(),
                directed: graph.is_directed(),
                adjacency: graph.adjacency(),
                matrix: graph.matrix(),
            },
        )?,
    }
    Ok(())
}

/// Write the visiting order of a traversal.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn write_order<W: Write>(
    w: &mut W,
    kind: TraversalKind,
    traversal: &Traversal,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{} {}",
        bold(&format!("{} order:", kind.label()), config),
        success(&format_order(&traversal.order), config)
    )?;

    let roots = traversal.roots();
    if roots.len() > 1 {
        let restarts = format_order(&roots[1..]);
        writeln!(
            w,
            "{}",
            dimmed(&format!("  (restarted from unvisited vertices {restarts})"), config)
        )?;
    }
    Ok(())
}

/// Write the per-vertex distance (or depth) and parent table.
///
/// Unreached vertices show `INF`; roots show `-` as their parent.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn write_traversal_table<W: Write>(
    w: &mut W,
    kind: TraversalKind,
    traversal: &Traversal,
    config: &OutputConfig,
) -> io::Result<()> {
    let rows: Vec<Vec<String>> = (0..traversal.distances.len())
        .map(|vertex| {
            vec![
                vertex.to_string(),
                traversal
                    .distance(vertex)
                    .map_or_else(|| "INF".to_string(), |d| d.to_string()),
                traversal
                    .parent(vertex)
                    .map_or_else(|| "-".to_string(), |p| p.to_string()),
            ]
        })
        .collect();

    let table = table::render(
        &["Vertex", kind.value_header(), "Parent"],
        &rows,
        config.use_ascii,
    );
    write!(w, "{table}")
}

/// Write a full traversal result in the requested mode.
///
/// With `target`, the tree path from its sub-traversal root is included.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing to `w` fails.
pub fn print_traversal<W: Write>(
    w: &mut W,
    kind: TraversalKind,
    traversal: &Traversal,
    target: Option<usize>,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let path = target.and_then(|t| traversal.path_to(t));

    match mode {
        OutputMode::Json => write_json(
            w,
            &TraversalJson {
                algorithm: kind,
                traversal,
                path,
            },
        ),
        OutputMode::Text => {
            write_order(w, kind, traversal, config)?;
            write_traversal_table(w, kind, traversal, config)?;
            if let Some(target) = target {
                match path {
                    Some(path) => writeln!(
                        w,
                        "{} {}",
                        bold(&format!("Path to {target}:"), config),
                        info(&format_path(&path), config)
                    )?,
                    None => writeln!(
                        w,
                        "{}",
                        warning(&format!("Vertex {target} was not reached"), config)
                    )?,
                }
            }
            Ok(())
        }
    }
}

/// Write the cycle and component analysis.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn write_analysis<W: Write>(
    w: &mut W,
    report: &AnalysisReport,
    config: &OutputConfig,
) -> io::Result<()> {
    write!(w, "{} ", bold("1. Cycle detection:", config))?;
    match &report.cycle {
        Some(cycle) => {
            writeln!(w, "{}", accent("cycle found", config))?;
            let mut closed = cycle.clone();
            if let Some(&first) = cycle.first() {
                closed.push(first);
            }
            writeln!(w, "   {}", dimmed(&format_path(&closed), config))?;
        }
        None => {
            writeln!(w, "{}", success("no cycles", config))?;
            writeln!(w, "   {}", dimmed("(the graph is acyclic)", config))?;
        }
    }

    write!(w, "{} ", bold("2. Connectivity:", config))?;
    match report.components {
        Some(1) => {
            writeln!(w, "1 connected component")?;
            writeln!(w, "   {}", success("(every vertex is reachable)", config))?;
        }
        Some(count) => {
            writeln!(w, "{count} connected components")?;
            writeln!(
                w,
                "   {}",
                warning("(the graph is split into isolated groups)", config)
            )?;
        }
        None => writeln!(
            w,
            "{}",
            dimmed("skipped (the graph is directed)", config)
        )?,
    }
    Ok(())
}

/// Write an analysis report in the requested mode.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing to `w` fails.
pub fn print_analysis<W: Write>(
    w: &mut W,
    report: &AnalysisReport,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    match mode {
        OutputMode::Text => write_analysis(w, report, config)?,
        OutputMode::Json => write_json(w, report)?,
    }
    Ok(())
}

/// Write a numbered dataset listing.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing to `w` fails.
pub fn print_datasets<W: Write>(
    w: &mut W,
    dir: &Path,
    datasets: &[PathBuf],
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    match mode {
        OutputMode::Json => write_json(w, &DatasetsJson { dir, datasets }),
        OutputMode::Text => {
            writeln!(
                w,
                "{}",
                bold(&format!("Datasets in {}:", dir.display()), config)
            )?;
            for (index, path) in datasets.iter().enumerate() {
                writeln!(
                    w,
                    " [{}] {}",
                    info(&index.to_string(), config),
                    crate::datasets::display_name(path)
                )?;
            }
            Ok(())
        }
    }
}
