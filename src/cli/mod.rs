//! CLI module for stockroom
//!
//! Provides the command-line interface:
//! - init: create the data directory, default config, and empty store
//! - start: load config, open the store, enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, start};
pub use errors::{CliError, CliErrorCode, CliResult};
