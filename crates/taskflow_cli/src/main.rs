//! TaskFlow command-line driver.
//!
//! # Responsibility
//! - Parse flags and config, start logging, run one command.
//! - Report failures on stderr with a non-zero exit code.

mod cli;
mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use cli::Cli;
use commands::Session;
use config::CliConfig;
use log::info;
use std::io;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?.with_overrides(&cli);

    if let Some(dir) = &config.log_dir {
        let dir = dir.to_str().context("log dir must be valid UTF-8")?;
        taskflow_core::init_logging(&config.log_level, dir)?;
    }
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        taskflow_core::core_version()
    );

    let today = config.today.unwrap_or_else(|| Local::now().date_naive());
    let mut session = Session::new(config.seed_sample_data, today)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.execute(cli.command, &mut out)
}
