//! CLI argument parsing for shortpath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CompareArgs, DemoArgs, SolveArgs};
pub use output::OutputFormat;

/// Shortpath - lowest-cost routes through weighted graphs
#[derive(Parser, Debug)]
#[command(name = "shortpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Solver configuration file
    #[arg(long, global = true, env = "SHORTPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the lowest-cost path between two nodes of a graph file
    Solve(SolveArgs),

    /// Solve with every frontier strategy and check that they agree
    Compare(CompareArgs),

    /// Solve the built-in sample networks
    Demo(DemoArgs),

    /// Inspect solver configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the default configuration file location
    Path,
}
