use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nohang-indicator: memory pressure status for the nohang daemon
///
/// Reads the daemon's thresholds, compares them with live memory, swap,
/// zram and PSI readings, and reports the resulting severity.
#[derive(Parser, Debug)]
#[command(name = "nohang-indicator")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute (defaults to `watch`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the current status once
    #[command(alias = "s")]
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Refresh the status until interrupted
    #[command(alias = "w")]
    Watch {
        /// Refresh interval in seconds (default: config)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Show the daemon's process table (`nohang --tasks`)
    #[command(alias = "t")]
    Tasks,
}
