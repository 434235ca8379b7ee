//! Matgraph CLI library.
//!
//! Console front end for the `matgraph` crate: an interactive menu that loads
//! adjacency-matrix files from a datasets directory, plus one-shot
//! subcommands (`show`, `bfs`, `dfs`, `analyze`, `list`) with optional JSON
//! output.

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod datasets;
pub mod error;
pub mod output;
pub mod session;

pub use error::{Error, Result};
