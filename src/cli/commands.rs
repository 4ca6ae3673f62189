//! CLI command implementations
//!
//! `init` is idempotent on the config file (an existing one is loaded,
//! not overwritten) but refuses to re-create an existing store. `start`
//! performs the whole boot sequence: config, store, runtime, serve.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::http_server::{AppState, HttpServer};
use crate::observability::Logger;
use crate::store::ProductTable;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Create the data directory, default config file, and empty store.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        ServerConfig::load(config_path).map_err(|e| CliError::config_error(e.to_string()))?
    } else {
        let config = ServerConfig::default();
        let body = serde_json::to_string_pretty(&config)
            .map_err(|e| CliError::config_error(e.to_string()))?;
        fs::write(config_path, body)
            .map_err(|e| CliError::config_error(format!("failed to write config: {}", e)))?;
        config
    };

    let store_path = config.store_path();
    if store_path.exists() {
        return Err(CliError::already_initialized(format!(
            "store already exists at {}",
            store_path.display()
        )));
    }

    ProductTable::open(&store_path).map_err(|e| CliError::boot_failed(e.to_string()))?;

    let shown = store_path.display().to_string();
    Logger::info("store_initialized", &[("path", shown.as_str())]);
    Ok(())
}

/// Load config, open the store, and serve until terminated.
pub fn start(config_path: &Path) -> CliResult<()> {
    let config =
        ServerConfig::load(config_path).map_err(|e| CliError::config_error(e.to_string()))?;

    let store_path = config.store_path();
    let table = ProductTable::open(&store_path).map_err(|e| CliError::boot_failed(e.to_string()))?;

    let shown = store_path.display().to_string();
    Logger::info("store_opened", &[("path", shown.as_str())]);

    let state = Arc::new(AppState::new(table));
    let server = HttpServer::new(config, state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::boot_failed(e.to_string()))
}
