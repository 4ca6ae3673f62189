//! CLI argument definitions using clap
//!
//! Commands:
//! - stockroom init --config <path>
//! - stockroom start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stockroom - a small file-backed product inventory HTTP service
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the data directory and default configuration
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./stockroom.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./stockroom.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
