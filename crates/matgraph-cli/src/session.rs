//! Interactive menu session.
//!
//! A [`Session`] owns at most one loaded [`Graph`] and drives a numbered
//! menu over any reader/writer pair. Loading a new dataset replaces the
//! current graph; a failed load leaves it in place. End of input ends the
//! session cleanly at any prompt.

use crate::datasets;
use crate::error::Result;
use crate::output::{self, OutputConfig, OutputMode, TraversalKind};
use matgraph::{Graph, analysis};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const MENU: &str = "\
 1. Load graph from file
 2. Breadth-first search (BFS)
 3. Depth-first search (DFS)
 4. Analyze graph (cycles, components)
 5. Show graph structure
 6. Exit";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Load,
    Bfs,
    Dfs,
    Analyze,
    Show,
    Exit,
}

impl MenuChoice {
    fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::Load),
            2 => Some(Self::Bfs),
            3 => Some(Self::Dfs),
            4 => Some(Self::Analyze),
            5 => Some(Self::Show),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive session state.
pub struct Session<R, W> {
    input: R,
    output: W,
    datasets_dir: PathBuf,
    extension: String,
    config: OutputConfig,
    graph: Option<Graph>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading datasets with `extension` from `datasets_dir`.
    #[must_use]
    pub fn new(
        input: R,
        output: W,
        datasets_dir: PathBuf,
        extension: impl Into<String>,
        config: OutputConfig,
    ) -> Self {
        Self {
            input,
            output,
            datasets_dir,
            extension: extension.into(),
            config,
            graph: None,
        }
    }

    /// The currently loaded graph, if any.
    #[must_use]
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    /// Consume the session, returning its writer.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails.
    /// Bad datasets and bad answers are reported and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(
                self.output,
                "{}",
                output::info("=== Graph Analysis ===", &self.config)
            )?;
            writeln!(self.output, "{MENU}")?;

            let Some(number) = self.prompt_number("Choose an option: ")? else {
                break;
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                self.report_error(&format!("Unknown option {number}, choose 1-6"))?;
                continue;
            };

            tracing::debug!(?choice, "Menu selection");
            if self.dispatch(choice)? == Flow::Quit {
                break;
            }
        }

        writeln!(self.output, "Goodbye.")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        if choice == MenuChoice::Exit {
            return Ok(Flow::Quit);
        }
        if choice == MenuChoice::Load {
            return self.load();
        }

        let Some(graph) = self.graph.take() else {
            self.report_error("No graph loaded, load a graph first (option 1)")?;
            return Ok(Flow::Continue);
        };
        let flow = self.run_on(&graph, choice);
        self.graph = Some(graph);
        flow
    }

    fn run_on(&mut self, graph: &Graph, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Bfs => self.traverse(graph, TraversalKind::Bfs),
            MenuChoice::Dfs => self.traverse(graph, TraversalKind::Dfs),
            MenuChoice::Analyze => {
                let report = analysis::analyze(graph);
                output::write_analysis(&mut self.output, &report, &self.config)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Show => {
                output::write_graph(&mut self.output, graph, &self.config)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Load | MenuChoice::Exit => Ok(Flow::Continue),
        }
    }

    fn load(&mut self) -> Result<Flow> {
        let files = match datasets::discover(&self.datasets_dir, &self.extension) {
            Ok(files) => files,
            Err(e) => {
                self.report_error(&e.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        output::print_datasets(
            &mut self.output,
            &self.datasets_dir,
            &files,
            OutputMode::Text,
            &self.config,
        )?;

        let prompt = format!("Select a file (0-{}): ", files.len() - 1);
        let Some(index) = self.prompt_in_range(&prompt, files.len())? else {
            return Ok(Flow::Quit);
        };

        let path = &files[index];
        let name = datasets::display_name(path);
        match matgraph::load_matrix(path) {
            Ok(matrix) => {
                let graph = Graph::from_matrix(matrix);
                output::write_loaded(&mut self.output, &name, &graph, &self.config)?;
                self.graph = Some(graph);
            }
            Err(e) if e.is_invalid_matrix() => {
                self.report_error(&format!("{name} is not a valid adjacency matrix: {e}"))?;
            }
            Err(e) => {
                self.report_error(&format!("Could not read {name}: {e}"))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn traverse(&mut self, graph: &Graph, kind: TraversalKind) -> Result<Flow> {
        let vertex_count = graph.vertex_count();
        let prompt = format!("Start vertex (0-{}): ", vertex_count.saturating_sub(1));
        let Some(start) = self.prompt_in_range(&prompt, vertex_count)? else {
            return Ok(Flow::Quit);
        };

        let traversal = kind.run(graph, start);
        output::print_traversal(
            &mut self.output,
            kind,
            &traversal,
            None,
            OutputMode::Text,
            &self.config,
        )?;
        Ok(Flow::Continue)
    }

    /// Prompt until the answer is an index below `len`. `None` on end of input.
    fn prompt_in_range(&mut self, prompt: &str, len: usize) -> Result<Option<usize>> {
        loop {
            let Some(number) = self.prompt_number(prompt)? else {
                return Ok(None);
            };
            match usize::try_from(number) {
                Ok(index) if index < len => return Ok(Some(index)),
                _ => self.report_error(&format!(
                    "{number} is out of range, expected 0-{}",
                    len.saturating_sub(1)
                ))?,
            }
        }
    }

    /// Prompt until the answer parses as an integer. `None` on end of input.
    fn prompt_number(&mut self, prompt: &str) -> Result<Option<i64>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            let answer = line.trim();
            match answer.parse::<i64>() {
                Ok(number) => return Ok(Some(number)),
                Err(_) => {
                    self.report_error(&format!("'{answer}' is not a number, try again"))?;
                }
            }
        }
    }

    fn report_error(&mut self, message: &str) -> Result<()> {
        writeln!(
            self.output,
            "{}",
            output::error(&format!("Error: {message}"), &self.config)
        )?;
        Ok(())
    }
}
