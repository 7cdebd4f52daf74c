//! CLI argument parsing for friendship
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for friendship commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

/// Friendship - shortest distances in a social graph
#[derive(Parser, Debug)]
#[command(name = "friendship")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph configuration file (TOML); the built-in four-person graph is used if omitted
    #[arg(long, short, global = true, env = "FRIENDSHIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the graph and answer every configured query (default)
    Demo,

    /// Shortest distance between two people (-1 if unreachable)
    Distance {
        /// Starting person
        from: String,
        /// Destination person
        to: String,
    },

    /// List a person's direct friends
    Neighbors {
        /// Person name
        person: String,
    },

    /// List everyone in the graph
    People,
}
