//! Configuration management for matgraph.
//!
//! Configuration is optional. When no `--config` path is given, a
//! `matgraph.yaml` in the working directory is used if present, otherwise the
//! defaults apply:
//!
//! ```yaml
//! datasets-dir: datasets
//! extension: txt
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "matgraph.yaml";

/// Default directory holding matrix files
pub const DEFAULT_DATASETS_DIR: &str = "datasets";

/// Default extension of matrix files
pub const DEFAULT_EXTENSION: &str = "txt";

/// Configuration file structure for matgraph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Directory searched for matrix files, relative to the working directory
    pub datasets_dir: PathBuf,

    /// File extension of matrix files, without the dot
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            datasets_dir: PathBuf::from(DEFAULT_DATASETS_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read, is not valid
    /// YAML for this structure, or sets an empty extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;

        if config.extension.is_empty() {
            return Err(Error::Config(format!(
                "{}: extension cannot be empty",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Pick the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `matgraph.yaml` in
    /// `working_dir` is used when present, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the selected file fails to load.
    pub fn resolve(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = working_dir.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// The datasets directory, resolved against `working_dir`.
    ///
    /// Falls back to `working_dir` itself when the configured directory does
    /// not exist.
    #[must_use]
    pub fn datasets_dir(&self, working_dir: &Path) -> PathBuf {
        let dir = working_dir.join(&self.datasets_dir);
        if dir.is_dir() {
            dir
        } else {
            tracing::info!(
                configured = %dir.display(),
                "Datasets directory not found, using working directory"
            );
            working_dir.to_path_buf()
        }
    }
}
