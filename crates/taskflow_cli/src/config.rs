//! Driver configuration loaded from an optional TOML file.
//!
//! Every field has a default, so an empty file (or no file) is valid.
//! Command-line flags override file values.

use crate::cli::Cli;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use taskflow_core::default_log_level;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub log_level: String,
    /// Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    pub seed_sample_data: bool,
    /// Reference date override; local date when unset.
    pub today: Option<NaiveDate>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().as_str().to_string(),
            log_dir: None,
            seed_sample_data: true,
            today: None,
        }
    }
}

impl CliConfig {
    /// Reads `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
        if let Some(dir) = &cli.log_dir {
            self.log_dir = Some(dir.clone());
        }
        if let Some(today) = cli.today {
            self.today = Some(today);
        }
        if cli.empty {
            self.seed_sample_data = false;
        }
        self
    }
}
