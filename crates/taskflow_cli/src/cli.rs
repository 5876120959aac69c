use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taskflow")]
#[command(about = "TaskFlow - in-memory task list, statistics and settings")]
#[command(version)]
pub struct Cli {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Reference date for statistics and new tasks (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Absolute directory for rolling log files (logging is off without it)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start from an empty task list instead of the sample tasks
    #[arg(long)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks matching the search and filters
    List {
        /// Case-insensitive text matched against title and description
        #[arg(long, default_value = "")]
        search: String,
        /// all|low|medium|high
        #[arg(long, default_value = "all")]
        priority: String,
        /// all|completed|pending
        #[arg(long, default_value = "all")]
        status: String,
        /// dueDate|priority|created|alphabetical (defaults to the preference)
        #[arg(long)]
        sort: Option<String>,
        /// Hide completed tasks
        #[arg(long)]
        hide_completed: bool,
    },
    /// Create a task and print the resulting list
    Add {
        /// Task title
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// low|medium|high (defaults to the preferred priority)
        #[arg(long, default_value = "")]
        priority: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        due: String,
    },
    /// Change fields of an existing task
    Edit {
        /// Task id or unique id prefix
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        /// New due date (YYYY-MM-DD); an empty value clears it
        #[arg(long)]
        due: Option<String>,
    },
    /// Flip a task between pending and completed
    Toggle {
        /// Task id or unique id prefix
        id: String,
    },
    /// Delete a task
    Remove {
        /// Task id or unique id prefix
        id: String,
    },
    /// Delete every task
    Clear,
    /// Show completion statistics for the reference date
    Stats,
    /// Show the home dashboard summary
    Dashboard,
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print current settings
    Show,
    /// Write a JSON snapshot of all settings
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Apply a JSON snapshot and print the result
    Import {
        /// Snapshot file
        path: PathBuf,
    },
    /// Restore default settings
    Reset,
}
