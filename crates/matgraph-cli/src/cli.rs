//! Command-line interface definitions and dispatch.

use crate::config::Config;
use crate::datasets;
use crate::error::{Error, Result};
use crate::output::{self, OutputConfig, OutputMode, TraversalKind};
use crate::session::Session;
use clap::{Parser, Subcommand};
use matgraph::{Graph, analysis};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Matgraph: explore graphs stored as adjacency-matrix files.
#[derive(Debug, Parser)]
#[command(name = "matgraph")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./matgraph.yaml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command to run (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive menu
    Interactive {
        /// Directory holding matrix files (overrides the configuration)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Print the adjacency list and matrix of a graph
    Show {
        /// Matrix file
        file: PathBuf,
    },

    /// Breadth-first search with distances and parents
    Bfs {
        /// Matrix file
        file: PathBuf,

        /// Start vertex
        #[arg(short, long, default_value = "0")]
        start: usize,

        /// Also print the path from its traversal root to this vertex
        #[arg(long, value_name = "VERTEX")]
        to: Option<usize>,
    },

    /// Depth-first search with depths and parents
    Dfs {
        /// Matrix file
        file: PathBuf,

        /// Start vertex
        #[arg(short, long, default_value = "0")]
        start: usize,
    },

    /// Detect cycles and count connected components
    Analyze {
        /// Matrix file
        file: PathBuf,
    },

    /// List the matrix files in the datasets directory
    List {
        /// Directory holding matrix files (overrides the configuration)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

impl Cli {
    /// The requested output mode.
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Tracing filter directive for the `-v` count.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Run the selected command against stdin/stdout.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration, dataset loading, or output fails,
    /// or when a traversal start vertex is out of range.
    pub fn execute(self, working_dir: &Path) -> Result<()> {
        let config = Config::resolve(self.config.as_deref(), working_dir)?;
        let mode = self.output_mode();
        let output_config = OutputConfig::from_env();

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match selected_command(self.command) {
            Commands::Interactive { dir } => run_interactive(
                &mut out,
                &config,
                working_dir,
                dir.as_deref(),
                output_config,
            ),
            Commands::Show { file } => {
                let graph = load_graph(&file)?;
                output::print_graph(&mut out, &graph, mode, &output_config)?;
                Ok(())
            }
            Commands::Bfs { file, start, to } => run_traversal(
                &mut out,
                &file,
                TraversalKind::Bfs,
                start,
                to,
                mode,
                &output_config,
            ),
            Commands::Dfs { file, start } => run_traversal(
                &mut out,
                &file,
                TraversalKind::Dfs,
                start,
                None,
                mode,
                &output_config,
            ),
            Commands::Analyze { file } => {
                let graph = load_graph(&file)?;
                let report = analysis::analyze(&graph);
                output::print_analysis(&mut out, &report, mode, &output_config)?;
                Ok(())
            }
            Commands::List { dir } => {
                let dir = datasets_dir(&config, working_dir, dir.as_deref());
                let files = datasets::discover(&dir, &config.extension)?;
                output::print_datasets(&mut out, &dir, &files, mode, &output_config)?;
                Ok(())
            }
        }
    }
}

/// The command to run, with the interactive menu as the default.
fn selected_command(command: Option<Commands>) -> Commands {
    command.unwrap_or(Commands::Interactive { dir: None })
}

fn datasets_dir(config: &Config, working_dir: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(dir) => working_dir.join(dir),
        None => config.datasets_dir(working_dir),
    }
}

fn load_graph(file: &Path) -> Result<Graph> {
    let matrix = matgraph::load_matrix(file)?;
    Ok(Graph::from_matrix(matrix))
}

fn run_interactive<W: Write>(
    out: W,
    config: &Config,
    working_dir: &Path,
    explicit_dir: Option<&Path>,
    output_config: OutputConfig,
) -> Result<()> {
    let dir = datasets_dir(config, working_dir, explicit_dir);
    tracing::info!(dir = %dir.display(), "Starting interactive session");

    let stdin = io::stdin();
    let mut session = Session::new(
        stdin.lock(),
        out,
        dir,
        config.extension.clone(),
        output_config,
    );
    session.run()
}

/// Load `file`, check `start` and print one traversal.
///
/// # Errors
///
/// Returns [`Error::InvalidStart`] when `start` is not a vertex of the graph.
pub fn run_traversal<W: Write>(
    out: &mut W,
    file: &Path,
    kind: TraversalKind,
    start: usize,
    target: Option<usize>,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let graph = load_graph(file)?;
    if !graph.contains_vertex(start) {
        return Err(Error::InvalidStart {
            start,
            vertex_count: graph.vertex_count(),
        });
    }

    let traversal = kind.run(&graph, start);
    tracing::debug!(?kind, start, visited = traversal.order.len(), "Traversal finished");
    output::print_traversal(out, kind, &traversal, target, mode, config)?;
    Ok(())
}
