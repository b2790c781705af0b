//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line client for Tick.
///
/// Lists projects, tasks and today's time, and records time entries.
/// Credentials are read from `TICKSPOT_USERNAME` and `TICKSPOT_PASSWORD`.
#[derive(Debug, Parser)]
#[command(name = "ticker", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List projects, tasks, or the time logged today.
    List(ListArgs),

    /// Time a piece of work and log it once you press Enter.
    Start(StartArgs),

    /// Log a time entry with explicit hours.
    ///
    /// Hours are given with `--hours` or `--ho`; a single-dash `-ho` is read
    /// as `-h` and only prints this help.
    Create(CreateArgs),
}

/// What `list` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Project,
    Task,
    Time,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    pub category: Category,

    /// Restrict tasks or time to one project.
    #[arg(short, long)]
    pub project: Option<u64>,

    /// With `time`: list raw entries from this date instead of today's
    /// summary. Requires a project.
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// With `time` and `--start-date`: last date to include (default: today).
    #[arg(long, requires = "start_date")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Project id for the entry.
    #[arg(short, long)]
    pub project: Option<u64>,

    /// Task id for the entry.
    #[arg(short, long)]
    pub task: Option<u64>,

    /// Note for the entry. Defaults to the current git branch.
    #[arg(short, long)]
    pub message: Option<String>,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Hours to log (`--hours` or `--ho`).
    #[arg(long, visible_alias = "ho")]
    pub hours: Option<f64>,

    /// Project id for the entry.
    #[arg(short, long)]
    pub project: Option<u64>,

    /// Task id for the entry.
    #[arg(short, long)]
    pub task: Option<u64>,

    /// Date of the entry (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: Option<String>,

    /// Note for the entry.
    #[arg(short, long)]
    pub message: Option<String>,
}
