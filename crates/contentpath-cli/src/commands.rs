//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::{ArgGroup, Subcommand};

/// Available commands for the content path tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the effective content path and the config file backing it
    Get {
        /// Print the result as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Set the content path, or reset it to the platform default
    #[command(group(
        ArgGroup::new("target")
            .required(true)
            .args(["path", "default"])
    ))]
    Set {
        /// Absolute path of the new content directory (environment variables are expanded)
        path: Option<String>,
        /// Remove the override and use the platform default
        #[arg(long)]
        default: bool,
        /// Skip confirmation prompt
        #[arg(short, long, conflicts_with = "dry_run")]
        force: bool,
        /// Show what would change without changing anything
        #[arg(long)]
        dry_run: bool,
    },
}
